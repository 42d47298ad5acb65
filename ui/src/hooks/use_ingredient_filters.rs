use gloo_timers::callback::Timeout;
use payloads::requests::IngredientFilters;
use yew::prelude::*;

use crate::listing::sort::{SortColumn, SortDirection, next_sort};

/// How long filter edits settle before they are committed to the applied
/// filters that drive a refetch. Keeps typing in the name box from firing
/// one request per keystroke.
pub const FILTER_DEBOUNCE_MS: u32 = 300;

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Filter/sort/page state for the ingredients page.
///
/// Draft fields mirror the inputs keystroke-by-keystroke; `applied` is the
/// debounced snapshot the list query actually depends on. Sorting is a
/// client-side concern and never reaches the query string.
#[derive(Clone, PartialEq)]
pub struct IngredientFiltersHandle {
    pub name_contains: String,
    pub storage_location: String,
    pub expiring_before: String,
    pub page: u32,
    pub sort: Option<(SortColumn, SortDirection)>,
    pub applied: IngredientFilters,
    pub set_name_contains: Callback<String>,
    pub set_storage_location: Callback<String>,
    pub set_expiring_before: Callback<String>,
    pub set_page: Callback<u32>,
    pub on_sort: Callback<SortColumn>,
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[hook]
pub fn use_ingredient_filters() -> IngredientFiltersHandle {
    let name_contains = use_state(String::new);
    let storage_location = use_state(String::new);
    let expiring_before = use_state(String::new);
    let page = use_state(|| 1u32);
    let sort = use_state(|| None::<(SortColumn, SortDirection)>);
    let applied = use_state(|| IngredientFilters {
        page: Some(1),
        page_size: Some(DEFAULT_PAGE_SIZE),
        ..Default::default()
    });

    // Holds the pending debounce; replacing it drops (and so cancels) the
    // previous timeout.
    let debounce = use_state(|| None::<Timeout>);

    // Commit draft edits to the applied filters after the debounce window,
    // snapping back to the first page.
    {
        let applied = applied.clone();
        let page = page.clone();
        let debounce = debounce.clone();

        use_effect_with(
            (
                (*name_contains).clone(),
                (*storage_location).clone(),
                (*expiring_before).clone(),
            ),
            move |(name, location, expiring)| {
                let name = name.clone();
                let location = location.clone();
                let expiring = expiring.clone();

                let timeout = Timeout::new(FILTER_DEBOUNCE_MS, move || {
                    applied.set(IngredientFilters {
                        name_contains: none_if_empty(&name),
                        storage_location: none_if_empty(&location),
                        expiring_before: none_if_empty(&expiring),
                        category: None,
                        page: Some(1),
                        page_size: Some(DEFAULT_PAGE_SIZE),
                    });
                    page.set(1);
                });
                debounce.set(Some(timeout));
            },
        );
    }

    // Page changes commit immediately.
    {
        let applied = applied.clone();
        use_effect_with(*page, move |page| {
            let mut next = (*applied).clone();
            if next.page != Some(*page) {
                next.page = Some(*page);
                applied.set(next);
            }
        });
    }

    let set_name_contains = {
        let name_contains = name_contains.clone();
        Callback::from(move |value| name_contains.set(value))
    };
    let set_storage_location = {
        let storage_location = storage_location.clone();
        Callback::from(move |value| storage_location.set(value))
    };
    let set_expiring_before = {
        let expiring_before = expiring_before.clone();
        Callback::from(move |value| expiring_before.set(value))
    };
    let set_page = {
        let page = page.clone();
        Callback::from(move |value| page.set(value))
    };
    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |column| sort.set(next_sort(*sort, column)))
    };

    IngredientFiltersHandle {
        name_contains: (*name_contains).clone(),
        storage_location: (*storage_location).clone(),
        expiring_before: (*expiring_before).clone(),
        page: *page,
        sort: *sort,
        applied: (*applied).clone(),
        set_name_contains,
        set_storage_location,
        set_expiring_before,
        set_page,
        on_sort,
    }
}
