//! Operators over [`ResultAsync`].
//!
//! A synchronous [`Result`](crate::Result) joins such a pipeline through
//! [`Result::to_async`](crate::Result::to_async) or `ResultAsync::from`.

use std::future::Future;

use crate::{IntoResultAsync, ResultAsync};

/// Operator form of [`ResultAsync::map`].
pub fn map<V, U, E, F>(projection: F) -> impl FnOnce(ResultAsync<V, E>) -> ResultAsync<U, E>
where
    V: Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
    F: FnOnce(V) -> U + Send + 'static,
{
    move |result| result.map(projection)
}

/// Operator form of [`ResultAsync::map_async`].
pub fn map_async<V, U, E, F, Fut>(
    projection: F,
) -> impl FnOnce(ResultAsync<V, E>) -> ResultAsync<U, E>
where
    V: Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
    F: FnOnce(V) -> Fut + Send + 'static,
    Fut: Future<Output = U> + Send + 'static,
{
    move |result| result.map_async(projection)
}

/// Operator form of [`ResultAsync::map_error`].
pub fn map_error<V, E, E2, F>(projection: F) -> impl FnOnce(ResultAsync<V, E>) -> ResultAsync<V, E2>
where
    V: Send + 'static,
    E: Send + 'static,
    E2: Send + 'static,
    F: FnOnce(E) -> E2 + Send + 'static,
{
    move |result| result.map_error(projection)
}

/// Operator form of [`ResultAsync::bind`].
pub fn bind<V, E, R, F>(projection: F) -> impl FnOnce(ResultAsync<V, E>) -> ResultAsync<R::Value, E>
where
    V: Send + 'static,
    E: Send + 'static,
    F: FnOnce(V) -> R + Send + 'static,
    R: IntoResultAsync<Error = E>,
{
    move |result| result.bind(projection)
}

/// Operator form of [`ResultAsync::ensure`].
pub fn ensure<V, E, P>(predicate: P, error: E) -> impl FnOnce(ResultAsync<V, E>) -> ResultAsync<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
    P: FnOnce(&V) -> bool + Send + 'static,
{
    move |result| result.ensure(predicate, error)
}

/// Operator form of [`ResultAsync::tap`].
pub fn tap<V, E, F>(action: F) -> impl FnOnce(ResultAsync<V, E>) -> ResultAsync<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
    F: FnOnce(&V) + Send + 'static,
{
    move |result| result.tap(action)
}

/// Operator form of [`ResultAsync::tap_async`].
pub fn tap_async<V, E, F, Fut>(action: F) -> impl FnOnce(ResultAsync<V, E>) -> ResultAsync<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
    F: FnOnce(&V) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    move |result| result.tap_async(action)
}

/// Operator form of [`ResultAsync::tap_failure`].
pub fn tap_failure<V, E, F>(action: F) -> impl FnOnce(ResultAsync<V, E>) -> ResultAsync<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
    F: FnOnce(&E) + Send + 'static,
{
    move |result| result.tap_failure(action)
}

/// Operator form of [`ResultAsync::compensate`].
pub fn compensate<V, E, R, F>(
    recovery: F,
) -> impl FnOnce(ResultAsync<V, E>) -> ResultAsync<V, R::Error>
where
    V: Send + 'static,
    E: Send + 'static,
    F: FnOnce(E) -> R + Send + 'static,
    R: IntoResultAsync<Value = V>,
{
    move |result| result.compensate(recovery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Result, pipe};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn pipeline_turns_async_at_first_async_operator() {
        let outcome = pipe!(
            Result::<i32, String>::success(3).to_async(),
            map_async(|n: i32| async move { n + 1 }),
            ensure(|n: &i32| *n == 4, "unexpected".to_string()),
            map(|n: i32| n * 10),
        )
        .await;
        assert_eq!(outcome, Result::success(40));
    }
}
