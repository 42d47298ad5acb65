use payloads::responses::Ingredient;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub location: String,
    pub ingredients: Vec<Ingredient>,
}

/// One storage location on the home overview: the first few ingredients
/// plus a link into the filtered ingredients page.
#[function_component]
pub fn StorageLocationCard(props: &Props) -> Html {
    const PREVIEW_COUNT: usize = 5;

    let shown = props.ingredients.iter().take(PREVIEW_COUNT);
    let hidden = props.ingredients.len().saturating_sub(PREVIEW_COUNT);

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md \
                    border border-neutral-200 dark:border-neutral-700 \
                    space-y-3">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-semibold capitalize text-neutral-900 \
                           dark:text-neutral-100">
                    {&props.location}
                </h3>
                <span class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!("{} items", props.ingredients.len())}
                </span>
            </div>
            <ul class="space-y-1">
                {for shown.map(|ingredient| html! {
                    <li
                        key={ingredient.id.to_string()}
                        class="flex justify-between text-sm"
                    >
                        <span class="text-neutral-900 dark:text-neutral-100">
                            {&ingredient.name}
                        </span>
                        <span class="text-neutral-500 dark:text-neutral-400">
                            {match (ingredient.quantity, ingredient.unit.as_deref()) {
                                (Some(q), Some(unit)) => format!("{q} {unit}"),
                                (Some(q), None) => q.to_string(),
                                (None, _) => String::new(),
                            }}
                        </span>
                    </li>
                })}
            </ul>
            if hidden > 0 {
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!("and {hidden} more...")}
                </p>
            }
            <Link<Route>
                to={Route::Ingredients}
                classes="block text-sm font-medium text-neutral-600 \
                         dark:text-neutral-300 hover:text-neutral-900 \
                         dark:hover:text-neutral-100"
            >
                {"View all ingredients"}
            </Link<Route>>
        </div>
    }
}
