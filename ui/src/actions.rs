//! Save-time orchestration that sits between forms and the API client.

use payloads::{
    ApiError, IngredientId,
    requests::{IngredientCreate, RecipeIngredientEntry},
    responses,
};
use std::future::Future;

/// A recipe ingredient row as edited in the form. The id may be unresolved
/// until save; `ingredient_name` is the free-form label the user typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeIngredientDraft {
    pub ingredient_id: Option<IngredientId>,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub is_optional: bool,
    pub note: Option<String>,
}

impl RecipeIngredientDraft {
    pub fn from_recipe_ingredient(
        ingredient: &responses::RecipeIngredient,
    ) -> Self {
        Self {
            ingredient_id: Some(ingredient.ingredient_id),
            ingredient_name: ingredient.ingredient_name.clone(),
            quantity: ingredient.quantity.unwrap_or(0.0),
            unit: ingredient.unit.clone(),
            is_optional: ingredient.is_optional,
            note: ingredient.note.clone(),
        }
    }

    /// Generated recipes reference ingredients by id when they exist in the
    /// pantry; an id of zero or less means the ingredient is unknown and
    /// must be resolved by name.
    pub fn from_generated(
        ingredient: &responses::GeneratedRecipeIngredient,
    ) -> Self {
        let ingredient_id =
            (ingredient.ingredient_id.0 > 0).then_some(ingredient.ingredient_id);
        Self {
            ingredient_id,
            ingredient_name: ingredient.name.clone(),
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
            is_optional: false,
            note: None,
        }
    }
}

/// Resolve draft rows into entries the backend will accept.
///
/// Rows that already carry a valid id pass through unchanged. A row with
/// no id but a name creates that ingredient first (zero on hand, the
/// row's unit) and takes the new id. Rows with neither are dropped. Any
/// create failure aborts the whole save.
pub async fn resolve_recipe_ingredients<F, Fut>(
    drafts: &[RecipeIngredientDraft],
    create_ingredient: F,
) -> Result<Vec<RecipeIngredientEntry>, ApiError>
where
    F: Fn(IngredientCreate) -> Fut,
    Fut: Future<Output = Result<responses::Ingredient, ApiError>>,
{
    let mut resolved = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let ingredient_id = match draft.ingredient_id {
            Some(id) => id,
            None => {
                let name = draft.ingredient_name.trim();
                if name.is_empty() {
                    continue;
                }
                let unit = if draft.unit.is_empty() {
                    "unit".to_string()
                } else {
                    draft.unit.clone()
                };
                let created = create_ingredient(IngredientCreate {
                    name: name.to_string(),
                    quantity: 0.0,
                    unit: Some(unit),
                    category: None,
                    storage_location: None,
                    expiry_date: None,
                    notes: None,
                })
                .await?;
                created.id
            }
        };
        resolved.push(RecipeIngredientEntry {
            ingredient_id,
            quantity: draft.quantity,
            unit: draft.unit.clone(),
            is_optional: draft.is_optional,
            note: draft.note.clone(),
        });
    }
    Ok(resolved)
}

/// Ask for confirmation before a destructive call; `confirm` is injected
/// so this stays testable off-browser.
pub async fn confirm_and_delete<F, Fut>(
    message: &str,
    confirm: impl Fn(&str) -> bool,
    delete: F,
) -> Result<bool, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if !confirm(message) {
        return Ok(false);
    }
    delete().await?;
    Ok(true)
}

/// The browser confirm dialog.
pub fn window_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn draft(
        id: Option<i64>,
        name: &str,
        quantity: f64,
        unit: &str,
    ) -> RecipeIngredientDraft {
        RecipeIngredientDraft {
            ingredient_id: id.map(IngredientId),
            ingredient_name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            is_optional: false,
            note: None,
        }
    }

    fn created(id: i64, name: &str) -> responses::Ingredient {
        responses::Ingredient {
            id: IngredientId(id),
            name: name.to_string(),
            quantity: Some(0.0),
            unit: Some("unit".to_string()),
            category: None,
            storage_location: None,
            expiry_date: None,
            notes: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
            is_deleted: false,
        }
    }

    // A nameless, idless row creates nothing and is dropped; a named row
    // creates its ingredient; a resolved row passes through untouched.
    #[test]
    fn resolves_named_rows_and_passes_resolved_rows_through() {
        let creates = RefCell::new(Vec::new());
        let drafts = vec![
            draft(Some(3), "Eggs", 4.0, "pieces"),
            draft(None, "Basil", 1.0, "bunch"),
            draft(None, "   ", 1.0, "g"),
        ];

        let resolved = block_on(resolve_recipe_ingredients(
            &drafts,
            |details: IngredientCreate| {
                creates.borrow_mut().push(details.clone());
                async move { Ok(created(9, &details.name)) }
            },
        ))
        .unwrap();

        let creates = creates.into_inner();
        assert_eq!(creates.len(), 1);
        assert_eq!(creates[0].name, "Basil");
        assert_eq!(creates[0].quantity, 0.0);
        assert_eq!(creates[0].unit.as_deref(), Some("bunch"));

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].ingredient_id, IngredientId(3));
        assert_eq!(resolved[1].ingredient_id, IngredientId(9));
        assert_eq!(resolved[1].quantity, 1.0);
    }

    #[test]
    fn create_failure_aborts_the_whole_resolution() {
        let drafts = vec![
            draft(Some(3), "Eggs", 4.0, "pieces"),
            draft(None, "Basil", 1.0, "bunch"),
        ];
        let failure = ApiError {
            detail: "ingredient already exists".to_string(),
            status_code: 409,
        };

        let result = block_on(resolve_recipe_ingredients(&drafts, |_| {
            let failure = failure.clone();
            async move { Err(failure) }
        }));
        assert_eq!(result, Err(failure));
    }

    #[test]
    fn empty_unit_falls_back_to_a_generic_one() {
        let drafts = vec![draft(None, "Salt", 1.0, "")];
        let creates = RefCell::new(Vec::new());

        block_on(resolve_recipe_ingredients(&drafts, |details| {
            creates.borrow_mut().push(details.clone());
            async move { Ok(created(4, &details.name)) }
        }))
        .unwrap();

        assert_eq!(creates.into_inner()[0].unit.as_deref(), Some("unit"));
    }

    #[test]
    fn declined_confirmation_skips_the_delete() {
        let deleted = RefCell::new(false);
        let result = block_on(confirm_and_delete(
            "Delete this ingredient?",
            |_| false,
            || {
                *deleted.borrow_mut() = true;
                async { Ok(()) }
            },
        ));
        assert_eq!(result, Ok(false));
        assert!(!*deleted.borrow());
    }

    #[test]
    fn accepted_confirmation_runs_the_delete() {
        let result = block_on(confirm_and_delete(
            "Delete this ingredient?",
            |_| true,
            || async { Ok(()) },
        ));
        assert_eq!(result, Ok(true));
    }
}
