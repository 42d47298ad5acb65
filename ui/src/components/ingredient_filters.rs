use payloads::DEFAULT_LOCATION_ORDER;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::IngredientFiltersHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub filters: IngredientFiltersHandle,
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
    dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-800 \
    text-sm text-neutral-900 dark:text-neutral-100 focus:outline-none \
    focus:ring-2 focus:ring-neutral-400";

/// Filter inputs for the ingredient list. Edits land in the draft filter
/// state and are committed (debounced) by the filters hook.
#[function_component]
pub fn IngredientFilterBar(props: &Props) -> Html {
    let filters = &props.filters;

    let on_name_input = {
        let set_name_contains = filters.set_name_contains.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_name_contains.emit(input.value());
        })
    };

    let on_location_change = {
        let set_storage_location = filters.set_storage_location.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_storage_location.emit(select.value());
        })
    };

    let on_expiring_change = {
        let set_expiring_before = filters.set_expiring_before.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_expiring_before.emit(input.value());
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            <div>
                <label class="block text-sm font-medium text-neutral-700 \
                              dark:text-neutral-300 mb-1">
                    {"Search by name"}
                </label>
                <input
                    type="text"
                    value={filters.name_contains.clone()}
                    oninput={on_name_input}
                    placeholder="e.g. tomato"
                    class={INPUT_CLASS}
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-neutral-700 \
                              dark:text-neutral-300 mb-1">
                    {"Storage location"}
                </label>
                <select
                    value={filters.storage_location.clone()}
                    onchange={on_location_change}
                    class={INPUT_CLASS}
                >
                    <option value="" selected={filters.storage_location.is_empty()}>
                        {"All locations"}
                    </option>
                    {for DEFAULT_LOCATION_ORDER.iter().map(|location| html! {
                        <option
                            value={*location}
                            selected={filters.storage_location == *location}
                        >
                            {capitalize(location)}
                        </option>
                    })}
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium text-neutral-700 \
                              dark:text-neutral-300 mb-1">
                    {"Expiring before"}
                </label>
                <input
                    type="date"
                    value={filters.expiring_before.clone()}
                    onchange={on_expiring_change}
                    class={INPUT_CLASS}
                />
            </div>
        </div>
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
