//! Operators over [`Result`].

use crate::Result;

/// Operator form of [`Result::map`].
pub fn map<V, U, E, F>(projection: F) -> impl FnOnce(Result<V, E>) -> Result<U, E>
where
    F: FnOnce(V) -> U,
{
    move |result| result.map(projection)
}

/// Operator form of [`Result::map_error`].
pub fn map_error<V, E, E2, F>(projection: F) -> impl FnOnce(Result<V, E>) -> Result<V, E2>
where
    F: FnOnce(E) -> E2,
{
    move |result| result.map_error(projection)
}

/// Operator form of [`Result::bind`].
pub fn bind<V, U, E, F>(projection: F) -> impl FnOnce(Result<V, E>) -> Result<U, E>
where
    F: FnOnce(V) -> Result<U, E>,
{
    move |result| result.bind(projection)
}

/// Operator form of [`Result::ensure`].
pub fn ensure<V, E, P>(predicate: P, error: E) -> impl FnOnce(Result<V, E>) -> Result<V, E>
where
    P: FnOnce(&V) -> bool,
{
    move |result| result.ensure(predicate, error)
}

/// Operator form of [`Result::check`].
pub fn check<V, U, E, F>(validation: F) -> impl FnOnce(Result<V, E>) -> Result<V, E>
where
    F: FnOnce(&V) -> Result<U, E>,
{
    move |result| result.check(validation)
}

/// Operator form of [`Result::tap`].
pub fn tap<V, E, F>(action: F) -> impl FnOnce(Result<V, E>) -> Result<V, E>
where
    F: FnOnce(&V),
{
    move |result| result.tap(action)
}

/// Operator form of [`Result::tap_failure`].
pub fn tap_failure<V, E, F>(action: F) -> impl FnOnce(Result<V, E>) -> Result<V, E>
where
    F: FnOnce(&E),
{
    move |result| result.tap_failure(action)
}

/// Operator form of [`Result::tap_either`].
pub fn tap_either<V, E, F>(action: F) -> impl FnOnce(Result<V, E>) -> Result<V, E>
where
    F: FnOnce(&Result<V, E>),
{
    move |result| result.tap_either(action)
}

/// Operator form of [`Result::compensate`].
pub fn compensate<V, E, E2, F>(recovery: F) -> impl FnOnce(Result<V, E>) -> Result<V, E2>
where
    F: FnOnce(E) -> Result<V, E2>,
{
    move |result| result.compensate(recovery)
}
