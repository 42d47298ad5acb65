use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Backdrop-and-panel wrapper for the add/edit dialogs. Clicking the
/// backdrop itself (not its children) closes the modal.
#[function_component]
pub fn Modal(props: &Props) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 z-40 flex items-center justify-center \
                   bg-black/50 p-4"
        >
            <div class="w-full max-w-lg max-h-full overflow-y-auto rounded-lg \
                        bg-white dark:bg-neutral-800 shadow-xl border \
                        border-neutral-200 dark:border-neutral-700">
                <div class="flex items-center justify-between px-6 py-4 \
                            border-b border-neutral-200 dark:border-neutral-700">
                    <h2 class="text-lg font-semibold text-neutral-900 \
                               dark:text-neutral-100">
                        {&props.title}
                    </h2>
                    <button
                        onclick={on_close_click}
                        class="text-neutral-400 hover:text-neutral-600 \
                               dark:hover:text-neutral-200 transition-colors"
                        title="Close"
                    >
                        <span class="text-xl leading-none">{"×"}</span>
                    </button>
                </div>
                <div class="px-6 py-4">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
