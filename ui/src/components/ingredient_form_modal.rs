use payloads::{
    DEFAULT_LOCATION_ORDER, IngredientCategory,
    requests::{
        self, IngredientCreate, IngredientPatch, QuantityValidation,
    },
    responses::Ingredient,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::Modal;
use crate::contexts::toast::{Toast, ToastAction, use_toast};
use crate::hooks::use_form::FieldErrors;
use crate::hooks::{FormConfig, UseIngredientsHandle, use_form};

/// Raw form inputs; everything is a string until validation parses it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientFormValues {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: String,
    pub storage_location: String,
    pub expiry_date: String,
    pub notes: String,
}

const FIELDS: &[&str] = &[
    "name",
    "quantity",
    "unit",
    "category",
    "storage_location",
    "expiry_date",
    "notes",
];

impl IngredientFormValues {
    fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            quantity: ingredient
                .quantity
                .map(|q| q.to_string())
                .unwrap_or_default(),
            unit: ingredient.unit.clone().unwrap_or_default(),
            category: ingredient
                .category
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            storage_location: ingredient
                .storage_location
                .clone()
                .unwrap_or_default(),
            expiry_date: ingredient.expiry_date.clone().unwrap_or_default(),
            notes: ingredient.notes.clone().unwrap_or_default(),
        }
    }

    /// An empty quantity counts as zero on hand.
    fn parsed_quantity(&self) -> f64 {
        self.quantity.trim().parse().unwrap_or(0.0)
    }

    fn to_create(&self) -> IngredientCreate {
        IngredientCreate {
            name: self.name.trim().to_string(),
            quantity: self.parsed_quantity(),
            unit: none_if_empty(&self.unit),
            category: parse_category(&self.category),
            storage_location: none_if_empty(&self.storage_location),
            expiry_date: none_if_empty(&self.expiry_date),
            notes: none_if_empty(&self.notes),
        }
    }

    fn to_patch(&self) -> IngredientPatch {
        IngredientPatch {
            name: Some(self.name.trim().to_string()),
            quantity: Some(self.parsed_quantity()),
            unit: none_if_empty(&self.unit),
            category: parse_category(&self.category),
            storage_location: none_if_empty(&self.storage_location),
            expiry_date: none_if_empty(&self.expiry_date),
            notes: none_if_empty(&self.notes),
        }
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_category(value: &str) -> Option<IngredientCategory> {
    IngredientCategory::ALL
        .iter()
        .find(|category| category.as_str() == value)
        .copied()
}

/// The quantity must be expressible as a non-negative number before a
/// submit is accepted.
pub fn validate_ingredient_form(values: &IngredientFormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(message) =
        requests::validate_name(&values.name).error_message()
    {
        errors.insert("name", message.to_string());
    }

    let quantity = values.quantity.trim();
    if !quantity.is_empty() {
        let validation = match quantity.parse::<f64>() {
            Ok(parsed) => requests::validate_quantity(parsed),
            Err(_) => QuantityValidation::NotANumber,
        };
        if let Some(message) = validation.error_message() {
            errors.insert("quantity", message.to_string());
        }
    }

    let expiry = values.expiry_date.trim();
    if !expiry.is_empty() && !requests::is_valid_expiry_date(expiry) {
        errors.insert("expiry_date", "Invalid date".to_string());
    }

    errors
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ingredients: UseIngredientsHandle,
    /// `Some` puts the form in edit mode, prefilled.
    pub editing: Option<Ingredient>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn IngredientFormModal(props: &Props) -> Html {
    let toast_handle = use_toast();

    let initial_values = props
        .editing
        .as_ref()
        .map(IngredientFormValues::from_ingredient)
        .unwrap_or_default();

    let form = {
        let ingredients = props.ingredients.clone();
        let editing = props.editing.clone();
        let on_close = props.on_close.clone();
        let toast_handle = toast_handle.clone();

        use_form(
            FormConfig {
                initial_values,
                fields: FIELDS,
            },
            validate_ingredient_form,
            move |values: IngredientFormValues| {
                let ingredients = ingredients.clone();
                let editing = editing.clone();
                let on_close = on_close.clone();
                let toast_handle = toast_handle.clone();

                async move {
                    let result = match &editing {
                        Some(ingredient) => ingredients
                            .update(ingredient.id, values.to_patch())
                            .await,
                        None => ingredients.create(values.to_create()).await,
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
                            tracing::error!(
                                "failed to save ingredient: {error}"
                            );
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
        "Edit Ingredient"
    } else {
        "Add Ingredient"
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| form.handle_submit(Some(e)))
    };

    let text_input = |field: &'static str,
                      label: &str,
                      input_type: &str,
                      value: String,
                      placeholder: &str,
                      apply: fn(&mut IngredientFormValues, String)| {
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
                    type={input_type.to_string()}
                    value={value}
                    oninput={oninput}
                    onblur={onblur}
                    placeholder={placeholder.to_string()}
                    class="w-full px-3 py-2 border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white \
                           dark:bg-neutral-800 text-sm text-neutral-900 \
                           dark:text-neutral-100 focus:outline-none \
                           focus:ring-2 focus:ring-neutral-400"
                />
                if let Some(error) = error {
                    <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                        {error}
                    </p>
                }
            </div>
        }
    };

    let on_location_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            form.handle_change("storage_location", move |values| {
                values.storage_location = value.clone()
            });
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            form.handle_change("category", move |values| {
                values.category = value.clone()
            });
        })
    };

    let on_notes_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let value = textarea.value();
            form.handle_change("notes", move |values| {
                values.notes = value.clone()
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let select_class = "w-full px-3 py-2 border border-neutral-300 \
        dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-800 \
        text-sm text-neutral-900 dark:text-neutral-100";

    let values = form.values().clone();

    html! {
        <Modal title={title.to_string()} on_close={props.on_close.clone()}>
            <form onsubmit={onsubmit}>
                {text_input(
                    "name", "Name", "text", values.name.clone(),
                    "e.g. Tomatoes",
                    |values, value| values.name = value,
                )}
                <div class="grid grid-cols-2 gap-4">
                    {text_input(
                        "quantity", "Quantity", "number",
                        values.quantity.clone(), "0",
                        |values, value| values.quantity = value,
                    )}
                    {text_input(
                        "unit", "Unit", "text", values.unit.clone(),
                        "e.g. pieces",
                        |values, value| values.unit = value,
                    )}
                </div>
                <div class="mb-4">
                    <label class="block text-sm font-medium text-neutral-700 \
                                  dark:text-neutral-300 mb-1">
                        {"Storage location"}
                    </label>
                    <select
                        value={values.storage_location.clone()}
                        onchange={on_location_change}
                        class={select_class}
                    >
                        <option value="" selected={values.storage_location.is_empty()}>
                            {"Unspecified"}
                        </option>
                        {for DEFAULT_LOCATION_ORDER.iter()
                            .filter(|l| **l != payloads::UNSPECIFIED_LOCATION)
                            .map(|location| html! {
                                <option
                                    value={*location}
                                    selected={values.storage_location == *location}
                                >
                                    {location.to_string()}
                                </option>
                            })}
                    </select>
                </div>
                <div class="mb-4">
                    <label class="block text-sm font-medium text-neutral-700 \
                                  dark:text-neutral-300 mb-1">
                        {"Category"}
                    </label>
                    <select
                        value={values.category.clone()}
                        onchange={on_category_change}
                        class={select_class}
                    >
                        <option value="" selected={values.category.is_empty()}>
                            {"None"}
                        </option>
                        {for IngredientCategory::ALL.iter().map(|category| html! {
                            <option
                                value={category.as_str()}
                                selected={values.category == category.as_str()}
                            >
                                {category.as_str()}
                            </option>
                        })}
                    </select>
                </div>
                {text_input(
                    "expiry_date", "Expiry date", "date",
                    values.expiry_date.clone(), "",
                    |values, value| values.expiry_date = value,
                )}
                <div class="mb-4">
                    <label class="block text-sm font-medium text-neutral-700 \
                                  dark:text-neutral-300 mb-1">
                        {"Notes"}
                    </label>
                    <textarea
                        value={values.notes.clone()}
                        oninput={on_notes_input}
                        rows="2"
                        class={select_class}
                    />
                </div>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let errors = validate_ingredient_form(&IngredientFormValues {
            quantity: "5".to_string(),
            ..Default::default()
        });
        assert_eq!(errors.get("name").unwrap(), "Name is required");
    }

    #[test]
    fn negative_or_garbled_quantity_is_rejected() {
        let errors = validate_ingredient_form(&IngredientFormValues {
            name: "Tomatoes".to_string(),
            quantity: "-2".to_string(),
            ..Default::default()
        });
        assert_eq!(errors.get("quantity").unwrap(), "Quantity cannot be negative");

        let errors = validate_ingredient_form(&IngredientFormValues {
            name: "Tomatoes".to_string(),
            quantity: "lots".to_string(),
            ..Default::default()
        });
        assert_eq!(errors.get("quantity").unwrap(), "Quantity must be a number");
    }

    #[test]
    fn empty_quantity_is_allowed_and_creates_as_zero() {
        let values = IngredientFormValues {
            name: "Tomatoes".to_string(),
            ..Default::default()
        };
        assert!(validate_ingredient_form(&values).is_empty());
        assert_eq!(values.to_create().quantity, 0.0);
    }

    #[test]
    fn create_payload_compacts_empty_optionals() {
        let values = IngredientFormValues {
            name: " Tomatoes ".to_string(),
            quantity: "5".to_string(),
            unit: "pieces".to_string(),
            ..Default::default()
        };
        let create = values.to_create();
        assert_eq!(create.name, "Tomatoes");
        assert_eq!(create.quantity, 5.0);
        assert_eq!(create.unit.as_deref(), Some("pieces"));
        assert_eq!(create.storage_location, None);
        assert_eq!(create.notes, None);
    }

    #[test]
    fn bad_expiry_date_is_rejected() {
        let errors = validate_ingredient_form(&IngredientFormValues {
            name: "Milk".to_string(),
            expiry_date: "tomorrow".to_string(),
            ..Default::default()
        });
        assert_eq!(errors.get("expiry_date").unwrap(), "Invalid date");
    }
}
