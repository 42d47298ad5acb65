use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn nav_link(route: Route, current: &Route, label: &str) -> Html {
    let base = "px-3 py-2 rounded-md text-sm font-medium transition-colors";
    let classes = if *current == route {
        format!(
            "{base} bg-neutral-100 dark:bg-neutral-700 text-neutral-900 \
             dark:text-neutral-100"
        )
    } else {
        format!(
            "{base} text-neutral-600 dark:text-neutral-400 \
             hover:text-neutral-900 dark:hover:text-neutral-100"
        )
    };

    html! {
        <Link<Route> to={route} classes={Classes::from(classes)}>
            {label.to_string()}
        </Link<Route>>
    }
}

#[function_component]
pub fn Header() -> Html {
    let current = use_route::<Route>().unwrap_or(Route::Home);

    html! {
        <header class="border-b border-neutral-200 dark:border-neutral-700 \
                       bg-white dark:bg-neutral-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-bold \
                        text-neutral-900 dark:text-neutral-100">
                        {"Pantry"}
                    </Link<Route>>
                    <nav class="flex space-x-2">
                        {nav_link(Route::Home, &current, "Storage")}
                        {nav_link(Route::Ingredients, &current, "Ingredients")}
                        {nav_link(Route::Recipes, &current, "Recipes")}
                        {nav_link(Route::Suggestions, &current, "Suggestions")}
                    </nav>
                </div>
            </div>
        </header>
    }
}
