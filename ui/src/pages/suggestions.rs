use payloads::{
    RecipeId,
    requests::{ShoppingListRequest, SuggestionRequest},
    responses::{RecipeSuggestion, ShoppingListResponse, SuggestionResponse},
};
use std::collections::BTreeSet;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{ShoppingListView, SuggestionForm, SuggestionList};
use crate::contexts::toast::{Toast, ToastAction, use_toast};
use crate::get_api_client;
use crate::hooks::use_mutation;
use crate::{Route, State};

#[function_component]
pub fn SuggestionsPage() -> Html {
    let toast_handle = use_toast();
    let navigator = use_navigator().unwrap();

    let suggestions = use_state(|| None::<SuggestionResponse>);
    let selected = use_state(BTreeSet::<RecipeId>::new);
    let shopping_list = use_state(|| None::<ShoppingListResponse>);

    let suggest = use_mutation(|request: SuggestionRequest| async move {
        get_api_client().suggest_recipes(&request).await
    });
    let generate_list =
        use_mutation(|request: ShoppingListRequest| async move {
            get_api_client().shopping_list(&request).await
        });

    let on_get_suggestions = {
        let suggestions = suggestions.clone();
        let selected = selected.clone();
        let shopping_list = shopping_list.clone();
        let suggest = suggest.clone();
        let toast_handle = toast_handle.clone();

        Callback::from(move |request: SuggestionRequest| {
            let suggestions = suggestions.clone();
            let selected = selected.clone();
            let shopping_list = shopping_list.clone();
            let suggest = suggest.clone();
            let toast_handle = toast_handle.clone();

            yew::platform::spawn_local(async move {
                match suggest.mutate(request).await {
                    Ok(response) => {
                        suggestions.set(Some(response));
                        selected.set(BTreeSet::new());
                        shopping_list.set(None);
                    }
                    Err(error) => {
                        tracing::error!(
                            "failed to get suggestions: {error}"
                        );
                        toast_handle.dispatch(ToastAction::Add(
                            Toast::error(
                                "Failed to get recipe suggestions. Please \
                                 try again.",
                            ),
                        ));
                    }
                }
            });
        })
    };

    let on_toggle = {
        let selected = selected.clone();
        Callback::from(move |recipe_id: RecipeId| {
            let mut next = (*selected).clone();
            if !next.remove(&recipe_id) {
                next.insert(recipe_id);
            }
            selected.set(next);
        })
    };

    let on_generate_shopping_list = {
        let selected = selected.clone();
        let shopping_list = shopping_list.clone();
        let generate_list = generate_list.clone();
        let toast_handle = toast_handle.clone();

        Callback::from(move |_| {
            let recipe_ids: Vec<RecipeId> = selected.iter().copied().collect();
            if recipe_ids.is_empty() {
                return;
            }
            let shopping_list = shopping_list.clone();
            let generate_list = generate_list.clone();
            let toast_handle = toast_handle.clone();

            yew::platform::spawn_local(async move {
                match generate_list
                    .mutate(ShoppingListRequest { recipe_ids })
                    .await
                {
                    Ok(response) => shopping_list.set(Some(response)),
                    Err(error) => {
                        tracing::error!(
                            "failed to generate shopping list: {error}"
                        );
                        toast_handle.dispatch(ToastAction::Add(
                            Toast::error(
                                "Failed to generate shopping list. Please \
                                 try again.",
                            ),
                        ));
                    }
                }
            });
        })
    };

    // Saving a generated recipe goes through the recipe form: stash the
    // payload in the store slot and navigate; the recipes page drains it.
    let on_save_generated = {
        let navigator = navigator.clone();
        let toast_handle = toast_handle.clone();
        Callback::from(move |suggestion: RecipeSuggestion| {
            let Some(generated) = suggestion.generated_recipe else {
                toast_handle.dispatch(ToastAction::Add(Toast::error(
                    "No recipe data to save",
                )));
                return;
            };
            Dispatch::<State>::global()
                .reduce_mut(|state| state.set_pending_recipe(generated));
            navigator.push(&Route::Recipes);
        })
    };

    let on_close_shopping_list = {
        let shopping_list = shopping_list.clone();
        Callback::from(move |_| shopping_list.set(None))
    };

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 \
                           dark:text-neutral-100">
                    {"Cooking Suggestions"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"What can you make with what you have?"}
                </p>
            </div>

            <SuggestionForm
                on_submit={on_get_suggestions}
                loading={suggest.loading}
            />

            if let Some(response) = &*suggestions {
                if response.suggestions.is_empty() {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"No suggestions for those ingredients."}
                        </p>
                    </div>
                } else if let Some(list) = &*shopping_list {
                    <ShoppingListView
                        shopping_list={list.clone()}
                        on_close={on_close_shopping_list}
                    />
                } else {
                    <SuggestionList
                        suggestions={response.suggestions.clone()}
                        selected={(*selected).clone()}
                        on_toggle={on_toggle}
                        on_generate_shopping_list={on_generate_shopping_list}
                        on_save_generated={on_save_generated}
                        loading={generate_list.loading}
                    />
                }
            }
        </div>
    }
}
