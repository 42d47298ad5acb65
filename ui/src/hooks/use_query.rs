use payloads::ApiError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// Issues tickets for fetch attempts and remembers the newest one.
///
/// Dependency changes can start a new fetch while an older one is still in
/// flight; there is no cancellation, so both completions race for the same
/// state slot. A completion may only write state while its ticket is still
/// current — an older ticket lost to a newer invocation and its result is
/// discarded, whatever order the responses land in.
#[derive(Debug, Default)]
pub struct FetchSeq {
    latest: u64,
}

impl FetchSeq {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Generic query hook return type.
pub struct UseQueryHandle<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub refetch: Callback<()>,
}

impl<T> UseQueryHandle<T> {
    /// Render exactly one of: loading indicator, error message, empty
    /// state, or content. A query consumer never renders nothing.
    ///
    /// While `loading` is true, `data` is None by construction, so the
    /// loading branch always wins over stale content.
    ///
    /// # Arguments
    ///
    /// * `context` - Contextual string like "ingredients" or "recipes"
    /// * `render_fn` - Function to render when data is available
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T) -> Html,
    {
        if self.loading {
            html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {}...", context)}
                    </p>
                </div>
            }
        } else if let Some(error) = &self.error {
            html! {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading {}: {}", context, error)}
                    </p>
                </div>
            }
        } else if let Some(data) = &self.data {
            render_fn(data)
        } else {
            html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("No {} found", context)}
                    </p>
                </div>
            }
        }
    }
}

/// Generic query hook.
///
/// Fetches on mount and whenever `deps` changes (by value), and exposes a
/// manual `refetch`. Entering a fetch clears `data` and `error` and sets
/// `loading` — consumers must treat `loading == true` as "do not trust
/// `data`". The fetch function captures its inputs from the closure; `deps`
/// exists for change tracking in `use_callback`/`use_effect_with`.
///
/// # Example
///
/// ```rust
/// #[hook]
/// pub fn use_ingredient(id: IngredientId) -> UseQueryHandle<Ingredient> {
///     use_query(id, move || async move {
///         get_api_client().get_ingredient(id).await
///     })
/// }
/// ```
#[hook]
pub fn use_query<T, D, F, Fut>(deps: D, fetch_fn: F) -> UseQueryHandle<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let data = use_state(|| None::<T>);
    let error = use_state(|| None::<ApiError>);
    let loading = use_state(|| true);
    let seq = use_mut_ref(FetchSeq::default);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let loading = loading.clone();
        let seq = seq.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let loading = loading.clone();
            let seq = seq.clone();
            let fetch_fn = fetch_fn.clone();

            let ticket = seq.borrow_mut().issue();
            loading.set(true);
            data.set(None);
            error.set(None);

            yew::platform::spawn_local(async move {
                let result = fetch_fn().await;

                if !seq.borrow().is_current(ticket) {
                    // A newer fetch owns the state slot now.
                    return;
                }

                match result {
                    Ok(value) => {
                        data.set(Some(value));
                        error.set(None);
                    }
                    Err(e) => {
                        data.set(None);
                        error.set(Some(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    UseQueryHandle {
        data: (*data).clone(),
        loading: *loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_is_current() {
        let mut seq = FetchSeq::default();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    // The slow-stale-response scenario: fetch A is issued, then fetch B;
    // B completes first, then A. A must not be applied.
    #[test]
    fn stale_completion_is_discarded_regardless_of_completion_order() {
        let mut seq = FetchSeq::default();
        let a = seq.issue();
        let b = seq.issue();

        // B completes first and applies.
        assert!(seq.is_current(b));
        // A completes afterwards and is discarded.
        assert!(!seq.is_current(a));
    }

    #[test]
    fn refetch_after_settled_fetch_supersedes_it() {
        let mut seq = FetchSeq::default();
        let first = seq.issue();
        assert!(seq.is_current(first));

        // Manual refetch while nothing is in flight.
        let second = seq.issue();
        assert!(seq.is_current(second));
        assert!(!seq.is_current(first));
    }
}
