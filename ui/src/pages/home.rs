use payloads::DEFAULT_LOCATION_ORDER;
use payloads::requests::IngredientFilters;
use yew::prelude::*;

use crate::components::StorageLocationCard;
use crate::get_api_client;
use crate::hooks::use_query;
use crate::listing::group::{group_by_location, ordered_locations};

/// Storage overview: everything in the kitchen, grouped by where it lives.
#[function_component]
pub fn HomePage() -> Html {
    let ingredients = use_query((), || async move {
        let filters = IngredientFilters {
            page_size: Some(1000),
            ..Default::default()
        };
        get_api_client().list_ingredients(&filters).await
    });

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 \
                           dark:text-neutral-100">
                    {"Your Kitchen"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"What's on hand, by storage location"}
                </p>
            </div>

            {ingredients.render("ingredients", |page| {
                let grouped = group_by_location(&page.items);
                let locations =
                    ordered_locations(&grouped, &DEFAULT_LOCATION_ORDER);

                if locations.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"Your kitchen is empty. Add some ingredients \
                                  to get started."}
                            </p>
                        </div>
                    };
                }

                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 \
                                lg:grid-cols-3 gap-6">
                        {for locations.iter().map(|location| {
                            let items = grouped
                                .get(location)
                                .unwrap_or_default()
                                .to_vec();
                            html! {
                                <StorageLocationCard
                                    key={location.clone()}
                                    location={location.clone()}
                                    ingredients={items}
                                />
                            }
                        })}
                    </div>
                }
            })}
        </div>
    }
}
