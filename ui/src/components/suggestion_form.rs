use payloads::{
    Difficulty, IngredientId,
    requests::{IngredientFilters, SuggestionRequest},
};
use std::collections::BTreeSet;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::use_query;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_submit: Callback<SuggestionRequest>,
    #[prop_or(false)]
    pub loading: bool,
}

/// Picks the ingredients and constraints for a suggestion request. The
/// pantry contents load once on mount.
#[function_component]
pub fn SuggestionForm(props: &Props) -> Html {
    let ingredients = use_query((), || async move {
        let filters = IngredientFilters {
            page_size: Some(1000),
            ..Default::default()
        };
        get_api_client().list_ingredients(&filters).await
    });

    let selected = use_state(BTreeSet::<IngredientId>::new);
    let max_prep_time = use_state(String::new);
    let max_cook_time = use_state(String::new);
    let difficulty = use_state(String::new);
    let warning = use_state(|| None::<&'static str>);

    let toggle_ingredient = {
        let selected = selected.clone();
        Callback::from(move |id: IngredientId| {
            let mut next = (*selected).clone();
            if !next.remove(&id) {
                next.insert(id);
            }
            selected.set(next);
        })
    };

    let select_all = {
        let selected = selected.clone();
        let all: Vec<IngredientId> = ingredients
            .data
            .as_ref()
            .map(|page| page.items.iter().map(|i| i.id).collect())
            .unwrap_or_default();
        Callback::from(move |_: MouseEvent| {
            selected.set(all.iter().copied().collect());
        })
    };

    let deselect_all = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(BTreeSet::new());
        })
    };

    let onsubmit = {
        let selected = selected.clone();
        let max_prep_time = max_prep_time.clone();
        let max_cook_time = max_cook_time.clone();
        let difficulty = difficulty.clone();
        let warning = warning.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if selected.is_empty() {
                warning.set(Some("Select at least one ingredient"));
                return;
            }
            warning.set(None);

            let parsed_difficulty = match difficulty.as_str() {
                "easy" => Some(Difficulty::Easy),
                "medium" => Some(Difficulty::Medium),
                "hard" => Some(Difficulty::Hard),
                _ => None,
            };

            on_submit.emit(SuggestionRequest {
                available_ingredients: selected.iter().copied().collect(),
                max_prep_time: max_prep_time.trim().parse().ok(),
                max_cook_time: max_cook_time.trim().parse().ok(),
                difficulty: parsed_difficulty,
                dietary_restrictions: Vec::new(),
                max_results: 5,
            });
        })
    };

    let number_input = |label: &str,
                        state: &UseStateHandle<String>,
                        placeholder: &str| {
        let state = state.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        });
        html! {
            <div>
                <label class="block text-sm font-medium text-neutral-700 \
                              dark:text-neutral-300 mb-1">
                    {label.to_string()}
                </label>
                <input
                    type="number"
                    oninput={oninput}
                    placeholder={placeholder.to_string()}
                    class="w-full px-3 py-2 border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white \
                           dark:bg-neutral-800 text-sm"
                />
            </div>
        }
    };

    let on_difficulty_change = {
        let difficulty = difficulty.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            difficulty.set(select.value());
        })
    };

    html! {
        <form onsubmit={onsubmit}>
            <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg border \
                        border-neutral-200 dark:border-neutral-700 space-y-4">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-semibold text-neutral-900 \
                               dark:text-neutral-100">
                        {"Available Ingredients"}
                    </h3>
                    <div class="flex gap-2">
                        <button
                            type="button"
                            onclick={select_all}
                            disabled={ingredients.loading}
                            class="text-sm font-medium text-neutral-600 \
                                   dark:text-neutral-300 hover:text-neutral-900"
                        >
                            {"Select all"}
                        </button>
                        <button
                            type="button"
                            onclick={deselect_all}
                            class="text-sm font-medium text-neutral-600 \
                                   dark:text-neutral-300 hover:text-neutral-900"
                        >
                            {"Clear"}
                        </button>
                    </div>
                </div>

                {ingredients.render("ingredients", |page| {
                    if page.items.is_empty() {
                        return html! {
                            <p class="text-sm text-neutral-500">
                                {"Add some ingredients first to get suggestions."}
                            </p>
                        };
                    }
                    html! {
                        <div class="flex flex-wrap gap-2">
                            {for page.items.iter().map(|ingredient| {
                                let is_selected = selected.contains(&ingredient.id);
                                let toggle = {
                                    let toggle_ingredient = toggle_ingredient.clone();
                                    let id = ingredient.id;
                                    Callback::from(move |_: MouseEvent| {
                                        toggle_ingredient.emit(id)
                                    })
                                };
                                let classes = if is_selected {
                                    "px-3 py-1 rounded-full text-sm border \
                                     bg-neutral-900 text-white dark:bg-neutral-100 \
                                     dark:text-neutral-900 border-transparent"
                                } else {
                                    "px-3 py-1 rounded-full text-sm border \
                                     border-neutral-300 dark:border-neutral-600 \
                                     text-neutral-700 dark:text-neutral-300 \
                                     hover:bg-neutral-100 dark:hover:bg-neutral-700"
                                };
                                html! {
                                    <button
                                        type="button"
                                        key={ingredient.id.to_string()}
                                        onclick={toggle}
                                        class={classes}
                                    >
                                        {&ingredient.name}
                                    </button>
                                }
                            })}
                        </div>
                    }
                })}

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {number_input("Max prep time (min)", &max_prep_time, "any")}
                    {number_input("Max cook time (min)", &max_cook_time, "any")}
                    <div>
                        <label class="block text-sm font-medium \
                                      text-neutral-700 dark:text-neutral-300 \
                                      mb-1">
                            {"Difficulty"}
                        </label>
                        <select
                            onchange={on_difficulty_change}
                            class="w-full px-3 py-2 border border-neutral-300 \
                                   dark:border-neutral-600 rounded-md bg-white \
                                   dark:bg-neutral-800 text-sm"
                        >
                            <option value="" selected=true>{"Any difficulty"}</option>
                            <option value="easy">{"easy"}</option>
                            <option value="medium">{"medium"}</option>
                            <option value="hard">{"hard"}</option>
                        </select>
                    </div>
                </div>

                if let Some(warning) = *warning {
                    <p class="text-sm text-red-600 dark:text-red-400">
                        {warning}
                    </p>
                }

                <div class="flex justify-end">
                    <button
                        type="submit"
                        disabled={props.loading}
                        class="px-4 py-2 rounded-md text-sm font-medium \
                               bg-neutral-900 hover:bg-neutral-800 \
                               dark:bg-neutral-100 dark:text-neutral-900 \
                               text-white disabled:opacity-50"
                    >
                        {if props.loading { "Thinking..." } else { "Get suggestions" }}
                    </button>
                </div>
            </div>
        </form>
    }
}
