use yew::prelude::*;

use crate::components::layout::Header;
use crate::components::toast::ToastContainer;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &Props) -> Html {
    html! {
        <div class="min-h-screen bg-white dark:bg-neutral-900 \
                    text-neutral-900 dark:text-neutral-100 transition-colors">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {props.children.clone()}
            </main>
            <ToastContainer />
        </div>
    }
}
