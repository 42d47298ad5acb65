use payloads::requests::RecipeFilters;
use payloads::responses::{GeneratedRecipe, Recipe, RecipeDetail};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::actions::{confirm_and_delete, window_confirm};
use crate::components::{PaginationControls, RecipeCard, RecipeFormModal};
use crate::contexts::toast::{Toast, ToastAction, use_toast};
use crate::get_api_client;
use crate::hooks::use_recipes;

const RECIPE_PAGE_SIZE: u32 = 12;

#[derive(Clone, PartialEq)]
enum ModalState {
    Closed,
    Create,
    CreateFromSuggestion(GeneratedRecipe),
    Edit(RecipeDetail),
}

#[function_component]
pub fn RecipesPage() -> Html {
    let toast_handle = use_toast();
    let page = use_state(|| 1u32);
    let filters = RecipeFilters {
        page: Some(*page),
        page_size: Some(RECIPE_PAGE_SIZE),
        ..Default::default()
    };
    let recipes = use_recipes(filters);
    let modal = use_state(|| ModalState::Closed);

    // Drain the suggestion handoff slot once, opening a prefilled create
    // modal for a recipe accepted on the suggestions page.
    {
        let modal = modal.clone();
        let dispatch = Dispatch::<State>::global();
        use_effect_with((), move |_| {
            if let Some(generated) =
                dispatch.reduce_mut(|state| state.take_pending_recipe())
            {
                modal.set(ModalState::CreateFromSuggestion(generated));
            }
        });
    }

    let on_add = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ModalState::Create))
    };

    let on_close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(ModalState::Closed))
    };

    // Cards hold the list shape of a recipe; editing needs the ingredient
    // rows too, so fetch the detail before opening the form.
    let on_edit = {
        let modal = modal.clone();
        let toast_handle = toast_handle.clone();
        Callback::from(move |recipe: Recipe| {
            let modal = modal.clone();
            let toast_handle = toast_handle.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().get_recipe(recipe.id).await {
                    Ok(detail) => modal.set(ModalState::Edit(detail)),
                    Err(error) => {
                        tracing::error!("failed to load recipe: {error}");
                        toast_handle.dispatch(ToastAction::Add(
                            Toast::error(error.detail),
                        ));
                    }
                }
            });
        })
    };

    let on_delete = {
        let recipes = recipes.clone();
        let toast_handle = toast_handle.clone();
        Callback::from(move |recipe: Recipe| {
            let recipes = recipes.clone();
            let toast_handle = toast_handle.clone();
            yew::platform::spawn_local(async move {
                let result = confirm_and_delete(
                    "Are you sure you want to delete this recipe?",
                    window_confirm,
                    || {
                        let recipes = recipes.clone();
                        async move { recipes.remove(recipe.id).await }
                    },
                )
                .await;
                if let Err(error) = result {
                    tracing::error!("failed to delete recipe: {error}");
                    toast_handle.dispatch(ToastAction::Add(Toast::error(
                        error.detail,
                    )));
                }
            });
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 \
                               dark:text-neutral-100">
                        {"Recipes"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 \
                              mt-2">
                        {"Your recipe collection"}
                    </p>
                </div>
                <button
                    onclick={on_add}
                    class="bg-neutral-900 hover:bg-neutral-800 \
                           dark:bg-neutral-100 dark:text-neutral-900 \
                           dark:hover:bg-neutral-200 text-white px-4 py-2 \
                           rounded-md text-sm font-medium transition-colors"
                >
                    {"Add Recipe"}
                </button>
            </div>

            if recipes.loading {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Loading recipes..."}
                    </p>
                </div>
            } else if let Some(error) = &recipes.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading recipes: {error}")}
                    </p>
                </div>
            } else if let Some(list) = &recipes.list {
                if list.items.is_empty() {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"No recipes yet. Add one, or let the kitchen \
                              suggest something."}
                        </p>
                    </div>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-2 \
                                lg:grid-cols-3 gap-6">
                        {for list.items.iter().map(|recipe| html! {
                            <RecipeCard
                                key={recipe.id.to_string()}
                                recipe={recipe.clone()}
                                on_edit={on_edit.clone()}
                                on_delete={on_delete.clone()}
                                is_busy={recipes.is_submitting()}
                            />
                        })}
                    </div>
                    <PaginationControls
                        page={*page}
                        current_count={list.items.len()}
                        has_next={list.has_next}
                        on_page_change={{
                            let page = page.clone();
                            Callback::from(move |next| page.set(next))
                        }}
                        is_loading={recipes.loading}
                    />
                }
            }

            {match (*modal).clone() {
                ModalState::Closed => html! {},
                ModalState::Create => html! {
                    <RecipeFormModal
                        recipes={recipes.clone()}
                        editing={None::<RecipeDetail>}
                        on_close={on_close_modal.clone()}
                    />
                },
                ModalState::CreateFromSuggestion(generated) => html! {
                    <RecipeFormModal
                        recipes={recipes.clone()}
                        editing={None::<RecipeDetail>}
                        initial={Some(generated)}
                        on_close={on_close_modal.clone()}
                    />
                },
                ModalState::Edit(detail) => html! {
                    <RecipeFormModal
                        recipes={recipes.clone()}
                        editing={Some(detail)}
                        on_close={on_close_modal.clone()}
                    />
                },
            }}
        </div>
    }
}
