use futures::future::LocalBoxFuture;
use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

pub type FieldErrors = BTreeMap<&'static str, String>;

type Validator<T> = dyn Fn(&T) -> FieldErrors;
type OnSubmit<T> = dyn Fn(T) -> LocalBoxFuture<'static, ()>;

/// Form state: field values plus per-field error/touched bookkeeping.
#[derive(Clone, PartialEq)]
pub struct FormState<T> {
    pub values: T,
    pub errors: FieldErrors,
    pub touched: BTreeSet<&'static str>,
    pub is_submitting: bool,
    fields: &'static [&'static str],
}

impl<T> FormState<T> {
    fn new(values: T, fields: &'static [&'static str]) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            is_submitting: false,
            fields,
        }
    }
}

pub enum FormAction<T> {
    Change {
        field: &'static str,
        apply: Rc<dyn Fn(&mut T)>,
    },
    Blur {
        field: &'static str,
        error: Option<String>,
    },
    FailSubmit {
        errors: FieldErrors,
    },
    BeginSubmit,
    EndSubmit,
    Reset(T),
}

impl<T: Clone> Reducible for FormState<T> {
    type Action = FormAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // Editing a field optimistically clears its error; it is not
            // re-validated until blur or submit.
            FormAction::Change { field, apply } => {
                apply(&mut next.values);
                next.errors.remove(field);
            }
            FormAction::Blur { field, error } => {
                next.touched.insert(field);
                if let Some(message) = error {
                    next.errors.insert(field, message);
                }
            }
            FormAction::FailSubmit { errors } => {
                next.touched = self.fields.iter().copied().collect();
                next.errors = errors;
                next.is_submitting = false;
            }
            FormAction::BeginSubmit => {
                next.touched = self.fields.iter().copied().collect();
                next.is_submitting = true;
            }
            FormAction::EndSubmit => {
                next.is_submitting = false;
            }
            FormAction::Reset(values) => {
                next = Self::new(values, self.fields);
            }
        }
        Rc::new(next)
    }
}

/// The submit gate: either the validation errors to surface, or a clear
/// path to the submit callback.
pub(crate) fn submit_gate<T>(
    validate: &Validator<T>,
    values: &T,
) -> Result<(), FieldErrors> {
    let errors = validate(values);
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Form hook return type. Clone it into event closures; all methods
/// dispatch into the same underlying state.
pub struct UseFormHandle<T: Clone + 'static> {
    state: UseReducerHandle<FormState<T>>,
    validate: Rc<Validator<T>>,
    on_submit: Rc<OnSubmit<T>>,
    initial_values: Rc<T>,
}

impl<T: Clone + 'static> Clone for UseFormHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            validate: self.validate.clone(),
            on_submit: self.on_submit.clone(),
            initial_values: self.initial_values.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> PartialEq for UseFormHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T: Clone + 'static> UseFormHandle<T> {
    pub fn values(&self) -> &T {
        &self.state.values
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    /// The error to display for a field: only surfaced once the field has
    /// been touched.
    pub fn touched_error(&self, field: &'static str) -> Option<String> {
        if self.state.touched.contains(field) {
            self.state.errors.get(field).cloned()
        } else {
            None
        }
    }

    pub fn handle_change(
        &self,
        field: &'static str,
        apply: impl Fn(&mut T) + 'static,
    ) {
        self.state.dispatch(FormAction::Change {
            field,
            apply: Rc::new(apply),
        });
    }

    /// Mark the field touched and surface only this field's validation
    /// message, leaving other fields' errors as they are.
    pub fn handle_blur(&self, field: &'static str) {
        let error = (self.validate)(&self.state.values).remove(field);
        self.state.dispatch(FormAction::Blur { field, error });
    }

    /// Validate everything and either surface the errors (submit callback
    /// not invoked) or run the submit callback with `is_submitting` set.
    /// The callback surfaces its own failures; `is_submitting` always
    /// clears when it finishes.
    pub fn handle_submit(&self, event: Option<SubmitEvent>) {
        if let Some(event) = &event {
            event.prevent_default();
        }

        if let Err(errors) = submit_gate(&*self.validate, &self.state.values)
        {
            self.state.dispatch(FormAction::FailSubmit { errors });
            return;
        }

        self.state.dispatch(FormAction::BeginSubmit);

        let values = self.state.values.clone();
        let dispatcher = self.state.dispatcher();
        let on_submit = self.on_submit.clone();

        yew::platform::spawn_local(async move {
            on_submit(values).await;
            dispatcher.dispatch(FormAction::EndSubmit);
        });
    }

    #[allow(dead_code)]
    pub fn reset(&self) {
        self.state
            .dispatch(FormAction::Reset((*self.initial_values).clone()));
    }
}

/// Configuration for [`use_form`].
pub struct FormConfig<T> {
    pub initial_values: T,
    /// Every field name the form tracks; submit marks all of them touched.
    pub fields: &'static [&'static str],
}

/// Form state hook.
///
/// The validator is a pure function from values to per-field messages; an
/// absent key means the field is valid. There is no async validation.
///
/// # Example
///
/// ```rust
/// let form = use_form(
///     FormConfig {
///         initial_values: IngredientFormValues::default(),
///         fields: &["name", "quantity"],
///     },
///     validate_ingredient_form,
///     move |values| async move { /* create + close modal */ },
/// );
/// ```
#[hook]
pub fn use_form<T, V, S, Fut>(
    config: FormConfig<T>,
    validate: V,
    on_submit: S,
) -> UseFormHandle<T>
where
    T: Clone + PartialEq + 'static,
    V: Fn(&T) -> FieldErrors + 'static,
    S: Fn(T) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let initial_values = Rc::new(config.initial_values.clone());
    let fields = config.fields;
    let state = use_reducer(move || {
        FormState::new(config.initial_values, fields)
    });

    let on_submit: Rc<OnSubmit<T>> = Rc::new(move |values| {
        let fut = on_submit(values);
        Box::pin(fut) as LocalBoxFuture<'static, ()>
    });

    UseFormHandle {
        state,
        validate: Rc::new(validate),
        on_submit,
        initial_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Default)]
    struct TestValues {
        name: String,
        quantity: String,
    }

    const FIELDS: &[&str] = &["name", "quantity"];

    fn validate(values: &TestValues) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if values.name.trim().is_empty() {
            errors.insert("name", "Name is required".to_string());
        }
        errors
    }

    fn reduce<T: Clone>(
        state: FormState<T>,
        action: FormAction<T>,
    ) -> FormState<T> {
        (*Rc::new(state).reduce(action)).clone()
    }

    // An invalid form never reaches the submit callback: the gate returns
    // the errors and FailSubmit surfaces them on every field.
    #[test]
    fn submit_gate_blocks_invalid_values_and_touches_all_fields() {
        let values = TestValues::default();
        let errors = submit_gate(&validate, &values).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), "Name is required");

        let state = reduce(
            FormState::new(values, FIELDS),
            FormAction::FailSubmit { errors },
        );
        assert!(!state.is_submitting);
        assert_eq!(state.errors.get("name").unwrap(), "Name is required");
        assert!(state.touched.contains("name"));
        assert!(state.touched.contains("quantity"));
    }

    #[test]
    fn submit_gate_passes_valid_values() {
        let values = TestValues {
            name: "Tomatoes".to_string(),
            quantity: "5".to_string(),
        };
        assert!(submit_gate(&validate, &values).is_ok());
    }

    #[test]
    fn change_updates_value_and_clears_that_fields_error() {
        let mut state = FormState::new(TestValues::default(), FIELDS);
        state.errors.insert("name", "Name is required".to_string());

        let state = reduce(
            state,
            FormAction::Change {
                field: "name",
                apply: Rc::new(|v: &mut TestValues| {
                    v.name = "Basil".to_string()
                }),
            },
        );
        assert_eq!(state.values.name, "Basil");
        assert!(state.errors.get("name").is_none());
    }

    #[test]
    fn blur_touches_the_field_and_surfaces_only_its_error() {
        let state = FormState::new(TestValues::default(), FIELDS);
        let error = validate(&state.values).remove("quantity");
        let state = reduce(
            state,
            FormAction::Blur {
                field: "quantity",
                error,
            },
        );
        assert!(state.touched.contains("quantity"));
        assert!(!state.touched.contains("name"));
        // quantity is valid, so no error appears even though name is bad
        assert!(state.errors.is_empty());
    }

    #[test]
    fn submit_lifecycle_toggles_is_submitting() {
        let state = FormState::new(
            TestValues {
                name: "Tomatoes".to_string(),
                quantity: String::new(),
            },
            FIELDS,
        );
        let state = reduce(state, FormAction::BeginSubmit);
        assert!(state.is_submitting);
        assert!(state.touched.contains("name"));

        let state = reduce(state, FormAction::EndSubmit);
        assert!(!state.is_submitting);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut state = FormState::new(TestValues::default(), FIELDS);
        state.errors.insert("name", "Name is required".to_string());
        state.touched.insert("name");
        state.is_submitting = true;

        let state = reduce(state, FormAction::Reset(TestValues::default()));
        assert_eq!(state.values, TestValues::default());
        assert!(state.errors.is_empty());
        assert!(state.touched.is_empty());
        assert!(!state.is_submitting);
    }
}
