use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod actions;
mod components;
mod contexts;
mod hooks;
mod listing;
pub mod logs;
mod pages;
mod state;

pub use state::State;

use components::layout::MainLayout;
use contexts::toast::ToastProvider;

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            let window = web_sys::window().unwrap();
            window.location().origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/ingredients")]
    Ingredients,
    #[at("/recipes")]
    Recipes,
    #[at("/suggestions")]
    Suggestions,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::HomePage /> },
        Route::Ingredients => html! { <pages::IngredientsPage /> },
        Route::Recipes => html! { <pages::RecipesPage /> },
        Route::Suggestions => html! { <pages::SuggestionsPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
