use payloads::{RecipeId, responses::RecipeSuggestion};
use std::collections::BTreeSet;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub suggestions: Vec<RecipeSuggestion>,
    /// Existing recipes selected for the shopping list.
    pub selected: BTreeSet<RecipeId>,
    pub on_toggle: Callback<RecipeId>,
    pub on_generate_shopping_list: Callback<()>,
    /// Hand a generated recipe off to the recipe form.
    pub on_save_generated: Callback<RecipeSuggestion>,
    #[prop_or(false)]
    pub loading: bool,
}

#[function_component]
pub fn SuggestionList(props: &Props) -> Html {
    let on_generate = {
        let on_generate_shopping_list = props.on_generate_shopping_list.clone();
        Callback::from(move |_: MouseEvent| {
            on_generate_shopping_list.emit(())
        })
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-neutral-900 \
                           dark:text-neutral-100">
                    {"Suggestions"}
                </h2>
                <button
                    onclick={on_generate}
                    disabled={props.loading || props.selected.is_empty()}
                    class="px-4 py-2 rounded-md text-sm font-medium \
                           bg-neutral-900 hover:bg-neutral-800 \
                           dark:bg-neutral-100 dark:text-neutral-900 \
                           text-white disabled:opacity-50"
                >
                    {"Shopping list for selected"}
                </button>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {for props.suggestions.iter().map(|suggestion| html! {
                    <SuggestionCard
                        key={suggestion.recipe_name.clone()}
                        suggestion={suggestion.clone()}
                        selected={matches!(
                            suggestion.recipe_id,
                            Some(id) if props.selected.contains(&id)
                        )}
                        on_toggle={props.on_toggle.clone()}
                        on_save_generated={props.on_save_generated.clone()}
                    />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    suggestion: RecipeSuggestion,
    selected: bool,
    on_toggle: Callback<RecipeId>,
    on_save_generated: Callback<RecipeSuggestion>,
}

#[function_component]
fn SuggestionCard(props: &CardProps) -> Html {
    let suggestion = &props.suggestion;

    let match_percent = (suggestion.match_score * 100.0).round() as u32;

    let action = match suggestion.recipe_id {
        // An existing recipe can go on the shopping list.
        Some(recipe_id) => {
            let on_toggle = props.on_toggle.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                on_toggle.emit(recipe_id)
            });
            let label = if props.selected { "Selected ✓" } else { "Select" };
            html! {
                <button
                    onclick={onclick}
                    class="px-3 py-1 rounded-md text-sm font-medium border \
                           border-neutral-300 dark:border-neutral-600 \
                           hover:bg-neutral-100 dark:hover:bg-neutral-700"
                >
                    {label}
                </button>
            }
        }
        // A generated recipe is saved through the recipe form instead.
        None => {
            let on_save_generated = props.on_save_generated.clone();
            let suggestion = suggestion.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                on_save_generated.emit(suggestion.clone())
            });
            html! {
                <button
                    onclick={onclick}
                    disabled={props.suggestion.generated_recipe.is_none()}
                    class="px-3 py-1 rounded-md text-sm font-medium \
                           bg-neutral-900 hover:bg-neutral-800 \
                           dark:bg-neutral-100 dark:text-neutral-900 \
                           text-white disabled:opacity-50"
                >
                    {"Save as recipe"}
                </button>
            }
        }
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 p-5 rounded-lg border \
                    border-neutral-200 dark:border-neutral-700 space-y-2">
            <div class="flex items-start justify-between">
                <h3 class="font-semibold text-neutral-900 \
                           dark:text-neutral-100">
                    {&suggestion.recipe_name}
                </h3>
                <span class="text-xs text-neutral-500 dark:text-neutral-400">
                    {format!("{match_percent}% match")}
                </span>
            </div>
            if suggestion.is_ai_generated {
                <span class="text-xs font-medium uppercase px-2 py-0.5 \
                             rounded bg-neutral-100 dark:bg-neutral-700 \
                             text-neutral-600 dark:text-neutral-300">
                    {"AI generated"}
                </span>
            }
            if let Some(reason) = &suggestion.reason {
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {reason}
                </p>
            }
            if !suggestion.missing_ingredients.is_empty() {
                <p class="text-sm text-amber-700 dark:text-amber-400">
                    {format!(
                        "Missing: {}",
                        suggestion.missing_ingredients.join(", ")
                    )}
                </p>
            }
            <div class="flex justify-end pt-1">
                {action}
            </div>
        </div>
    }
}
