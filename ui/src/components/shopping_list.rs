use payloads::DEFAULT_LOCATION_ORDER;
use payloads::responses::ShoppingListResponse;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub shopping_list: ShoppingListResponse,
    pub on_close: Callback<()>,
}

/// Shopping list grouped by storage location, in the usual location order
/// with anything unknown at the end.
#[function_component]
pub fn ShoppingListView(props: &Props) -> Html {
    let list = &props.shopping_list;

    let mut locations: Vec<&String> = list
        .items_by_location
        .keys()
        .filter(|key| !DEFAULT_LOCATION_ORDER.contains(&key.as_str()))
        .collect();
    locations.sort();
    let ordered: Vec<String> = DEFAULT_LOCATION_ORDER
        .iter()
        .filter(|key| list.items_by_location.contains_key(**key))
        .map(|key| key.to_string())
        .chain(locations.into_iter().cloned())
        .collect();

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg border \
                    border-neutral-200 dark:border-neutral-700 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-neutral-900 \
                           dark:text-neutral-100">
                    {format!("Shopping List ({} items)", list.total_items)}
                </h2>
                <button
                    onclick={on_close}
                    class="text-sm font-medium text-neutral-600 \
                           dark:text-neutral-300 hover:text-neutral-900"
                >
                    {"Back to suggestions"}
                </button>
            </div>

            if ordered.is_empty() {
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {"Nothing to buy - you have everything."}
                </p>
            }

            {for ordered.iter().map(|location| {
                let items = &list.items_by_location[location];
                html! {
                    <div key={location.clone()}>
                        <h3 class="text-sm font-medium uppercase tracking-wide \
                                   text-neutral-500 dark:text-neutral-400 mb-2">
                            {location}
                        </h3>
                        <ul class="space-y-1">
                            {for items.iter().map(|item| html! {
                                <li class="flex justify-between text-sm \
                                           text-neutral-900 dark:text-neutral-100">
                                    <span>{&item.ingredient_name}</span>
                                    <span class="text-neutral-500 \
                                                 dark:text-neutral-400">
                                        {format!(
                                            "{} {}",
                                            item.total_quantity, item.unit
                                        )}
                                    </span>
                                </li>
                            })}
                        </ul>
                    </div>
                }
            })}
        </div>
    }
}
