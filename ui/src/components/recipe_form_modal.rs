use payloads::{
    Difficulty,
    requests::{self, RecipeCreate, RecipeUpdate},
    responses::{GeneratedRecipe, RecipeDetail},
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::actions::{RecipeIngredientDraft, resolve_recipe_ingredients};
use crate::components::Modal;
use crate::contexts::toast::{Toast, ToastAction, use_toast};
use crate::get_api_client;
use crate::hooks::use_form::FieldErrors;
use crate::hooks::{FormConfig, UseRecipesHandle, use_form};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeFormValues {
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
}

const FIELDS: &[&str] = &[
    "name",
    "description",
    "instructions",
    "prep_time",
    "cook_time",
    "servings",
    "difficulty",
];

impl RecipeFormValues {
    fn from_detail(detail: &RecipeDetail) -> Self {
        Self {
            name: detail.name.clone(),
            description: detail.description.clone().unwrap_or_default(),
            instructions: detail.instructions.clone(),
            prep_time: detail
                .prep_time
                .map(|v| v.to_string())
                .unwrap_or_default(),
            cook_time: detail
                .cook_time
                .map(|v| v.to_string())
                .unwrap_or_default(),
            servings: detail
                .servings
                .map(|v| v.to_string())
                .unwrap_or_default(),
            difficulty: detail
                .difficulty
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    fn from_generated(generated: &GeneratedRecipe) -> Self {
        Self {
            name: generated.name.clone(),
            description: generated.description.clone().unwrap_or_default(),
            instructions: generated.instructions.clone(),
            prep_time: generated
                .prep_time_minutes
                .map(|v| v.to_string())
                .unwrap_or_default(),
            cook_time: generated
                .cook_time_minutes
                .map(|v| v.to_string())
                .unwrap_or_default(),
            servings: generated
                .servings
                .map(|v| v.to_string())
                .unwrap_or_default(),
            difficulty: generated
                .difficulty
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    fn parsed_difficulty(&self) -> Option<Difficulty> {
        match self.difficulty.as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    fn parsed_minutes(value: &str) -> Option<u32> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            value.parse().ok()
        }
    }

    fn to_create(
        &self,
        ingredients: Vec<requests::RecipeIngredientEntry>,
    ) -> RecipeCreate {
        RecipeCreate {
            name: self.name.trim().to_string(),
            description: match self.description.trim() {
                "" => None,
                description => Some(description.to_string()),
            },
            instructions: self.instructions.trim().to_string(),
            prep_time: Self::parsed_minutes(&self.prep_time),
            cook_time: Self::parsed_minutes(&self.cook_time),
            servings: Self::parsed_minutes(&self.servings),
            difficulty: self.parsed_difficulty(),
            ingredients,
        }
    }

    fn to_update(
        &self,
        ingredients: Vec<requests::RecipeIngredientEntry>,
    ) -> RecipeUpdate {
        let create = self.to_create(ingredients);
        RecipeUpdate {
            name: Some(create.name),
            description: create.description,
            instructions: Some(create.instructions),
            prep_time: create.prep_time,
            cook_time: create.cook_time,
            servings: create.servings,
            difficulty: create.difficulty,
            ingredients: Some(create.ingredients),
        }
    }
}

pub fn validate_recipe_form(values: &RecipeFormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if values.name.trim().is_empty() {
        errors.insert("name", "Name is required".to_string());
    }
    if values.instructions.trim().is_empty() {
        errors.insert("instructions", "Instructions are required".to_string());
    }

    for (field, value) in
        [("prep_time", &values.prep_time), ("cook_time", &values.cook_time)]
    {
        let value = value.trim();
        if !value.is_empty() && value.parse::<u32>().is_err() {
            errors.insert(field, "Must be a non-negative number".to_string());
        }
    }

    let servings = values.servings.trim();
    if !servings.is_empty()
        && !servings.parse::<u32>().is_ok_and(|v| v >= 1)
    {
        errors.insert("servings", "Servings must be at least 1".to_string());
    }

    errors
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipes: UseRecipesHandle,
    /// `Some` puts the form in edit mode, prefilled with the stored recipe.
    pub editing: Option<RecipeDetail>,
    /// A generated recipe handed off from the suggestions page; prefills a
    /// create form.
    #[prop_or_default]
    pub initial: Option<GeneratedRecipe>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn RecipeFormModal(props: &Props) -> Html {
    let toast_handle = use_toast();

    let (initial_values, initial_drafts) = match (&props.editing, &props.initial)
    {
        (Some(detail), _) => (
            RecipeFormValues::from_detail(detail),
            detail
                .ingredients
                .iter()
                .map(RecipeIngredientDraft::from_recipe_ingredient)
                .collect::<Vec<_>>(),
        ),
        (None, Some(generated)) => (
            RecipeFormValues::from_generated(generated),
            generated
                .ingredients
                .iter()
                .map(RecipeIngredientDraft::from_generated)
                .collect(),
        ),
        (None, None) => (RecipeFormValues::default(), Vec::new()),
    };

    let drafts = use_state(|| initial_drafts);

    let form = {
        let recipes = props.recipes.clone();
        let editing = props.editing.clone();
        let on_close = props.on_close.clone();
        let toast_handle = toast_handle.clone();
        let drafts = drafts.clone();

        use_form(
            FormConfig {
                initial_values,
                fields: FIELDS,
            },
            validate_recipe_form,
            move |values: RecipeFormValues| {
                let recipes = recipes.clone();
                let editing = editing.clone();
                let on_close = on_close.clone();
                let toast_handle = toast_handle.clone();
                let drafts = (*drafts).clone();

                async move {
                    // Rows referencing ingredients we do not have yet are
                    // created first; a failure there aborts the save.
                    let resolved = match resolve_recipe_ingredients(
                        &drafts,
                        |details| async move {
                            get_api_client()
                                .create_ingredient(&details)
                                .await
                        },
                    )
                    .await
                    {
                        Ok(resolved) => resolved,
                        Err(error) => {
                            tracing::error!(
                                "failed to resolve recipe ingredients: {error}"
                            );
                            toast_handle.dispatch(ToastAction::Add(
                                Toast::error(error.detail),
                            ));
                            return;
                        }
                    };

                    let result = match &editing {
                        Some(detail) => {
                            recipes
                                .update(detail.id, values.to_update(resolved))
                                .await
                        }
                        None => recipes.create(values.to_create(resolved)).await,
                    };
                    match result {
                        Ok(saved) => {
                            toast_handle.dispatch(ToastAction::Add(
                                Toast::success(format!(
                                    "Saved \"{}\"",
                                    saved.name
                                )),
                            ));
                            on_close.emit(());
                        }
                        Err(error) => {
                            tracing::error!("failed to save recipe: {error}");
                            toast_handle.dispatch(ToastAction::Add(
                                Toast::error(error.detail),
                            ));
                        }
                    }
                }
            },
        )
    };

    let title = if props.editing.is_some() {
        "Edit Recipe"
    } else {
        "Add Recipe"
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| form.handle_submit(Some(e)))
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
        dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-800 \
        text-sm text-neutral-900 dark:text-neutral-100 focus:outline-none \
        focus:ring-2 focus:ring-neutral-400";

    let text_input = |field: &'static str,
                      label: &str,
                      value: String,
                      placeholder: &str,
                      apply: fn(&mut RecipeFormValues, String)| {
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let value = input.value();
                form.handle_change(field, move |values| {
                    apply(values, value.clone())
                });
            })
        };
        let onblur = {
            let form = form.clone();
            Callback::from(move |_: FocusEvent| form.handle_blur(field))
        };
        let error = form.touched_error(field);

        html! {
            <div class="mb-4">
                <label class="block text-sm font-medium text-neutral-700 \
                              dark:text-neutral-300 mb-1">
                    {label.to_string()}
                </label>
                <input
                    type="text"
                    value={value}
                    oninput={oninput}
                    onblur={onblur}
                    placeholder={placeholder.to_string()}
                    class={input_class}
                />
                if let Some(error) = error {
                    <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                        {error}
                    </p>
                }
            </div>
        }
    };

    let on_instructions_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let value = textarea.value();
            form.handle_change("instructions", move |values| {
                values.instructions = value.clone()
            });
        })
    };
    let on_instructions_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.handle_blur("instructions"))
    };

    let on_difficulty_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            form.handle_change("difficulty", move |values| {
                values.difficulty = value.clone()
            });
        })
    };

    let values = form.values().clone();

    html! {
        <Modal title={title.to_string()} on_close={props.on_close.clone()}>
            <form onsubmit={onsubmit}>
                {text_input(
                    "name", "Recipe name", values.name.clone(),
                    "e.g. Spaghetti Carbonara",
                    |values, value| values.name = value,
                )}
                {text_input(
                    "description", "Description", values.description.clone(),
                    "Brief description (optional)",
                    |values, value| values.description = value,
                )}
                <div class="mb-4">
                    <label class="block text-sm font-medium text-neutral-700 \
                                  dark:text-neutral-300 mb-1">
                        {"Instructions"}
                    </label>
                    <textarea
                        value={values.instructions.clone()}
                        oninput={on_instructions_input}
                        onblur={on_instructions_blur}
                        rows="6"
                        placeholder="Step-by-step cooking instructions"
                        class={input_class}
                    />
                    if let Some(error) = form.touched_error("instructions") {
                        <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                            {error}
                        </p>
                    }
                </div>
                <div class="grid grid-cols-3 gap-4">
                    {text_input(
                        "prep_time", "Prep (min)", values.prep_time.clone(),
                        "0", |values, value| values.prep_time = value,
                    )}
                    {text_input(
                        "cook_time", "Cook (min)", values.cook_time.clone(),
                        "0", |values, value| values.cook_time = value,
                    )}
                    {text_input(
                        "servings", "Servings", values.servings.clone(),
                        "4", |values, value| values.servings = value,
                    )}
                </div>
                <div class="mb-4">
                    <label class="block text-sm font-medium text-neutral-700 \
                                  dark:text-neutral-300 mb-1">
                        {"Difficulty"}
                    </label>
                    <select
                        value={values.difficulty.clone()}
                        onchange={on_difficulty_change}
                        class={input_class}
                    >
                        <option value="" selected={values.difficulty.is_empty()}>
                            {"Unrated"}
                        </option>
                        {for [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
                            .iter()
                            .map(|difficulty| html! {
                                <option
                                    value={difficulty.as_str()}
                                    selected={values.difficulty == difficulty.as_str()}
                                >
                                    {difficulty.as_str()}
                                </option>
                            })}
                    </select>
                </div>

                <IngredientRows drafts={drafts.clone()} />

                <div class="flex justify-end space-x-3 pt-2">
                    <button
                        type="button"
                        onclick={on_cancel}
                        class="px-4 py-2 border border-neutral-300 \
                               dark:border-neutral-600 rounded-md text-sm \
                               font-medium text-neutral-700 \
                               dark:text-neutral-300 hover:bg-neutral-50 \
                               dark:hover:bg-neutral-700"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={form.is_submitting()}
                        class="px-4 py-2 rounded-md text-sm font-medium \
                               bg-neutral-900 hover:bg-neutral-800 \
                               dark:bg-neutral-100 dark:text-neutral-900 \
                               dark:hover:bg-neutral-200 text-white \
                               disabled:opacity-50"
                    >
                        {if form.is_submitting() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct IngredientRowsProps {
    drafts: UseStateHandle<Vec<RecipeIngredientDraft>>,
}

/// Editable ingredient rows. A row without a resolved id takes a free-form
/// name; the save path creates those ingredients first.
#[function_component]
fn IngredientRows(props: &IngredientRowsProps) -> Html {
    let drafts = &props.drafts;

    let update_row = {
        let drafts = drafts.clone();
        move |index: usize, apply: Box<dyn Fn(&mut RecipeIngredientDraft)>| {
            let mut next = (*drafts).clone();
            if let Some(row) = next.get_mut(index) {
                apply(row);
            }
            drafts.set(next);
        }
    };

    let on_add = {
        let drafts = drafts.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*drafts).clone();
            next.push(RecipeIngredientDraft {
                quantity: 1.0,
                ..Default::default()
            });
            drafts.set(next);
        })
    };

    let input_class = "px-2 py-1 border border-neutral-300 \
        dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-800 \
        text-sm text-neutral-900 dark:text-neutral-100";

    html! {
        <div class="mb-4">
            <div class="flex items-center justify-between mb-2">
                <label class="block text-sm font-medium text-neutral-700 \
                              dark:text-neutral-300">
                    {"Ingredients"}
                </label>
                <button
                    type="button"
                    onclick={on_add}
                    class="text-sm font-medium text-neutral-600 \
                           dark:text-neutral-300 hover:text-neutral-900 \
                           dark:hover:text-neutral-100"
                >
                    {"+ Add ingredient"}
                </button>
            </div>
            if drafts.is_empty() {
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {"No ingredients yet."}
                </p>
            }
            {for drafts.iter().enumerate().map(|(index, row)| {
                let on_name = {
                    let update_row = update_row.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let value = input.value();
                        update_row(index, Box::new(move |row| {
                            row.ingredient_name = value.clone();
                        }));
                    })
                };
                let on_quantity = {
                    let update_row = update_row.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let value = input.value().parse().unwrap_or(0.0);
                        update_row(index, Box::new(move |row| {
                            row.quantity = value;
                        }));
                    })
                };
                let on_unit = {
                    let update_row = update_row.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let value = input.value();
                        update_row(index, Box::new(move |row| {
                            row.unit = value.clone();
                        }));
                    })
                };
                let on_optional = {
                    let update_row = update_row.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let checked = input.checked();
                        update_row(index, Box::new(move |row| {
                            row.is_optional = checked;
                        }));
                    })
                };
                let on_remove = {
                    let drafts = drafts.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*drafts).clone();
                        next.remove(index);
                        drafts.set(next);
                    })
                };

                html! {
                    <div class="flex items-center gap-2 mb-2">
                        <input
                            type="text"
                            value={row.ingredient_name.clone()}
                            oninput={on_name}
                            disabled={row.ingredient_id.is_some()}
                            placeholder="Ingredient name"
                            class={format!("flex-1 {input_class}")}
                        />
                        <input
                            type="number"
                            value={row.quantity.to_string()}
                            oninput={on_quantity}
                            class={format!("w-20 {input_class}")}
                        />
                        <input
                            type="text"
                            value={row.unit.clone()}
                            oninput={on_unit}
                            placeholder="unit"
                            class={format!("w-24 {input_class}")}
                        />
                        <label class="flex items-center gap-1 text-xs \
                                      text-neutral-600 dark:text-neutral-400">
                            <input
                                type="checkbox"
                                checked={row.is_optional}
                                onchange={on_optional}
                            />
                            {"optional"}
                        </label>
                        <button
                            type="button"
                            onclick={on_remove}
                            class="text-red-600 dark:text-red-400 \
                                   hover:text-red-800 text-sm"
                            title="Remove"
                        >
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_instructions_are_required() {
        let errors = validate_recipe_form(&RecipeFormValues::default());
        assert_eq!(errors.get("name").unwrap(), "Name is required");
        assert_eq!(
            errors.get("instructions").unwrap(),
            "Instructions are required"
        );
    }

    #[test]
    fn negative_times_and_zero_servings_are_rejected() {
        let values = RecipeFormValues {
            name: "Carbonara".to_string(),
            instructions: "Boil pasta.".to_string(),
            prep_time: "-5".to_string(),
            servings: "0".to_string(),
            ..Default::default()
        };
        let errors = validate_recipe_form(&values);
        assert!(errors.contains_key("prep_time"));
        assert!(errors.contains_key("servings"));
        assert!(!errors.contains_key("cook_time"));
    }

    #[test]
    fn valid_values_build_a_create_payload() {
        let values = RecipeFormValues {
            name: " Carbonara ".to_string(),
            instructions: "Boil pasta.".to_string(),
            prep_time: "10".to_string(),
            servings: "4".to_string(),
            difficulty: "medium".to_string(),
            ..Default::default()
        };
        assert!(validate_recipe_form(&values).is_empty());

        let create = values.to_create(vec![]);
        assert_eq!(create.name, "Carbonara");
        assert_eq!(create.prep_time, Some(10));
        assert_eq!(create.cook_time, None);
        assert_eq!(create.servings, Some(4));
        assert_eq!(create.difficulty, Some(Difficulty::Medium));
        assert_eq!(create.description, None);
    }
}
