use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::contexts::toast::{Toast, ToastAction, ToastKind, use_toast};

#[function_component]
pub fn ToastContainer() -> Html {
    let toast_handle = use_toast();

    let mut toasts: Vec<_> = toast_handle.toasts.values().cloned().collect();
    toasts.sort_by_key(|toast| toast.id);

    if toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component]
fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    // Auto-dismiss after the toast's duration; the timeout dies with the
    // item if it is closed by hand first.
    {
        let toast_handle = toast_handle.clone();
        let toast_id = toast.id;
        let duration = toast.duration;
        use_effect_with(toast_id, move |_| {
            let timeout = Timeout::new(duration, move || {
                toast_handle.dispatch(ToastAction::Remove(toast_id));
            });
            move || drop(timeout)
        });
    }

    let (container_class, icon) = match toast.kind {
        ToastKind::Error => (
            "bg-red-50 dark:bg-red-900 border-red-200 dark:border-red-800 \
             text-red-700 dark:text-red-400",
            "✕",
        ),
        ToastKind::Success => (
            "bg-green-50 dark:bg-green-900 border-green-200 \
             dark:border-green-800 text-green-700 dark:text-green-400",
            "✓",
        ),
    };

    let on_close = {
        let toast_id = toast.id;
        let toast_handle = toast_handle.clone();
        Callback::from(move |_| {
            toast_handle.dispatch(ToastAction::Remove(toast_id));
        })
    };

    html! {
        <div class={format!(
            "relative p-4 rounded-lg border shadow-lg {container_class}"
        )}>
            <div class="flex items-start space-x-3">
                <span class="flex-shrink-0 text-sm font-medium">{icon}</span>
                <p class="flex-1 min-w-0 text-sm font-medium leading-5">
                    {&toast.message}
                </p>
                <button
                    onclick={on_close}
                    class="flex-shrink-0 inline-flex text-neutral-400 \
                           hover:text-neutral-600 dark:hover:text-neutral-200 \
                           transition-colors"
                    title="Dismiss"
                >
                    <span class="text-lg leading-none">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
