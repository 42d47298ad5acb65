use payloads::responses::Ingredient;
use yew::prelude::*;

use crate::actions::{confirm_and_delete, window_confirm};
use crate::components::{
    IngredientFilterBar, IngredientFormModal, IngredientTable,
    PaginationControls,
};
use crate::contexts::toast::{Toast, ToastAction, use_toast};
use crate::hooks::{use_ingredient_filters, use_ingredients};
use crate::listing::sort::sort_ingredients;

#[derive(Clone, PartialEq)]
enum ModalState {
    Closed,
    Create,
    Edit(Ingredient),
}

#[function_component]
pub fn IngredientsPage() -> Html {
    let toast_handle = use_toast();
    let filters = use_ingredient_filters();
    let ingredients = use_ingredients(filters.applied.clone());
    let modal = use_state(|| ModalState::Closed);

    let on_add = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ModalState::Create))
    };

    let on_edit = {
        let modal = modal.clone();
        Callback::from(move |ingredient: Ingredient| {
            modal.set(ModalState::Edit(ingredient))
        })
    };

    let on_close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(ModalState::Closed))
    };

    let on_delete = {
        let ingredients = ingredients.clone();
        let toast_handle = toast_handle.clone();
        Callback::from(move |ingredient: Ingredient| {
            let ingredients = ingredients.clone();
            let toast_handle = toast_handle.clone();
            yew::platform::spawn_local(async move {
                let result = confirm_and_delete(
                    "Delete this ingredient?",
                    window_confirm,
                    || {
                        let ingredients = ingredients.clone();
                        async move { ingredients.remove(ingredient.id).await }
                    },
                )
                .await;
                if let Err(error) = result {
                    tracing::error!("failed to delete ingredient: {error}");
                    toast_handle.dispatch(ToastAction::Add(Toast::error(
                        error.detail,
                    )));
                }
            });
        })
    };

    let (sort_column, sort_direction) = match filters.sort {
        Some((column, direction)) => (Some(column), direction),
        None => (None, Default::default()),
    };

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 \
                               dark:text-neutral-100">
                        {"Ingredients"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 \
                              mt-2">
                        {"Everything in your kitchen"}
                    </p>
                </div>
                <button
                    onclick={on_add}
                    class="bg-neutral-900 hover:bg-neutral-800 \
                           dark:bg-neutral-100 dark:text-neutral-900 \
                           dark:hover:bg-neutral-200 text-white px-4 py-2 \
                           rounded-md text-sm font-medium transition-colors"
                >
                    {"Add Ingredient"}
                </button>
            </div>

            <IngredientFilterBar filters={filters.clone()} />

            if ingredients.loading {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Loading ingredients..."}
                    </p>
                </div>
            } else if let Some(error) = &ingredients.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading ingredients: {error}")}
                    </p>
                </div>
            } else if let Some(page) = &ingredients.page {
                if page.items.is_empty() {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"No ingredients found."}
                        </p>
                    </div>
                } else {
                    <IngredientTable
                        ingredients={sort_ingredients(
                            &page.items,
                            sort_column,
                            sort_direction,
                        )}
                        sort={filters.sort}
                        on_sort={filters.on_sort.clone()}
                        on_edit={on_edit}
                        on_delete={on_delete}
                        is_busy={ingredients.is_submitting()}
                    />
                    <PaginationControls
                        page={filters.page}
                        current_count={page.items.len()}
                        has_next={page.has_next}
                        on_page_change={filters.set_page.clone()}
                        is_loading={ingredients.loading}
                    />
                }
            }

            {match (*modal).clone() {
                ModalState::Closed => html! {},
                ModalState::Create => html! {
                    <IngredientFormModal
                        ingredients={ingredients.clone()}
                        editing={None::<Ingredient>}
                        on_close={on_close_modal.clone()}
                    />
                },
                ModalState::Edit(ingredient) => html! {
                    <IngredientFormModal
                        ingredients={ingredients.clone()}
                        editing={Some(ingredient)}
                        on_close={on_close_modal.clone()}
                    />
                },
            }}
        </div>
    }
}
