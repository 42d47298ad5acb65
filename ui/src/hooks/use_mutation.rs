use futures::future::LocalBoxFuture;
use payloads::ApiError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// State triple for a one-shot mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationState<T> {
    pub loading: bool,
    pub error: Option<ApiError>,
    pub data: Option<T>,
}

impl<T> Default for MutationState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
        }
    }
}

pub enum MutationAction<T> {
    Begin,
    Resolved(T),
    Rejected(ApiError),
}

impl<T: Clone> Reducible for MutationState<T> {
    type Action = MutationAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MutationAction::Begin => Self {
                loading: true,
                error: None,
                data: self.data.clone(),
            },
            MutationAction::Resolved(value) => Self {
                loading: false,
                error: None,
                data: Some(value),
            },
            MutationAction::Rejected(error) => Self {
                loading: false,
                error: Some(error),
                data: self.data.clone(),
            },
        };
        Rc::new(next)
    }
}

/// Drive one mutation attempt, reporting transitions through `emit`.
/// The result is handed back to the caller as well as stored, so an
/// awaiting caller must handle the failure itself — nothing is swallowed.
pub(crate) async fn run_attempt<T, Fut>(
    fut: Fut,
    emit: impl Fn(MutationAction<T>),
) -> Result<T, ApiError>
where
    T: Clone,
    Fut: Future<Output = Result<T, ApiError>>,
{
    emit(MutationAction::Begin);
    match fut.await {
        Ok(value) => {
            emit(MutationAction::Resolved(value.clone()));
            Ok(value)
        }
        Err(error) => {
            emit(MutationAction::Rejected(error.clone()));
            Err(error)
        }
    }
}

/// Generic mutation hook return type.
///
/// Concurrent `mutate` calls interleave in completion order and the handle
/// exposes the most recently settled result; await each call before issuing
/// the next when sequential semantics matter.
pub struct UseMutationHandle<A, T: Clone + 'static> {
    runner: Rc<dyn Fn(A) -> LocalBoxFuture<'static, Result<T, ApiError>>>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub data: Option<T>,
}

impl<A, T: Clone + 'static> UseMutationHandle<A, T> {
    /// Run the mutation. Updates `loading`/`error`/`data` on the handle and
    /// returns the outcome to the caller.
    pub fn mutate(
        &self,
        args: A,
    ) -> LocalBoxFuture<'static, Result<T, ApiError>> {
        (self.runner)(args)
    }
}

impl<A, T: Clone + 'static> Clone for UseMutationHandle<A, T> {
    fn clone(&self) -> Self {
        Self {
            runner: self.runner.clone(),
            loading: self.loading,
            error: self.error.clone(),
            data: self.data.clone(),
        }
    }
}

/// Generic mutation hook.
///
/// Wraps an async write operation into a stateful handle. No cache
/// invalidation happens here: after a successful state-changing call the
/// caller refetches whichever queries depend on it.
///
/// # Example
///
/// ```rust
/// let create = use_mutation(|details: IngredientCreate| async move {
///     get_api_client().create_ingredient(&details).await
/// });
/// ```
#[hook]
pub fn use_mutation<A, T, F, Fut>(mutate_fn: F) -> UseMutationHandle<A, T>
where
    A: 'static,
    T: Clone + 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_reducer(MutationState::<T>::default);

    let runner = {
        let state = state.clone();
        let mutate_fn = Rc::new(mutate_fn);

        Rc::new(move |args: A| {
            let dispatcher = state.dispatcher();
            let fut = mutate_fn(args);
            let boxed: LocalBoxFuture<'static, Result<T, ApiError>> =
                Box::pin(async move {
                    run_attempt(fut, |action| dispatcher.dispatch(action))
                        .await
                });
            boxed
        })
    };

    UseMutationHandle {
        runner,
        loading: state.loading,
        error: state.error.clone(),
        data: state.data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn err(detail: &str) -> ApiError {
        ApiError {
            detail: detail.to_string(),
            status_code: 500,
        }
    }

    fn reduce_all(actions: Vec<MutationAction<i32>>) -> MutationState<i32> {
        let mut state = Rc::new(MutationState::<i32>::default());
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn successful_attempt_stores_data_and_returns_it() {
        let actions = RefCell::new(Vec::new());
        let result = block_on(run_attempt(async { Ok(7) }, |a| {
            actions.borrow_mut().push(a)
        }));
        assert_eq!(result, Ok(7));

        let state = reduce_all(actions.into_inner());
        assert!(!state.loading);
        assert_eq!(state.data, Some(7));
        assert_eq!(state.error, None);
    }

    // The failure is both stored and handed back to the caller.
    #[test]
    fn failed_attempt_stores_error_and_propagates_it() {
        let actions = RefCell::new(Vec::new());
        let result = block_on(run_attempt::<i32, _>(
            async { Err(err("boom")) },
            |a| actions.borrow_mut().push(a),
        ));
        assert_eq!(result, Err(err("boom")));

        let state = reduce_all(actions.into_inner());
        assert!(!state.loading);
        assert_eq!(state.error, Some(err("boom")));
        assert_eq!(state.data, None);
    }

    #[test]
    fn begin_clears_previous_error_and_sets_loading() {
        let state = reduce_all(vec![
            MutationAction::Rejected(err("boom")),
            MutationAction::Begin,
        ]);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn rejection_keeps_data_from_an_earlier_success() {
        let state = reduce_all(vec![
            MutationAction::Resolved(1),
            MutationAction::Begin,
            MutationAction::Rejected(err("boom")),
        ]);
        assert_eq!(state.data, Some(1));
        assert_eq!(state.error, Some(err("boom")));
    }
}
