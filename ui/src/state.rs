use payloads::responses;
use yewdux::prelude::*;

/// Global app state.
///
/// The only cross-page slot is the suggestion-to-recipe handoff: accepting
/// a generated recipe on the suggestions page stores it here, navigation
/// moves to the recipes page, and that page drains the slot into its create
/// modal. The slot is typed and in-memory; nothing ambient, nothing
/// persisted.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub pending_recipe: Option<responses::GeneratedRecipe>,
}

impl State {
    pub fn set_pending_recipe(&mut self, recipe: responses::GeneratedRecipe) {
        self.pending_recipe = Some(recipe);
    }

    /// Read-and-clear, so a handed-off recipe opens the create modal once.
    pub fn take_pending_recipe(
        &mut self,
    ) -> Option<responses::GeneratedRecipe> {
        self.pending_recipe.take()
    }
}
