//! Operators over [`MaybeAsync`].

use crate::{IntoMaybeAsync, MaybeAsync, ResultAsync};

/// Operator form of [`MaybeAsync::map`].
pub fn map<T, U, F>(projection: F) -> impl FnOnce(MaybeAsync<T>) -> MaybeAsync<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnOnce(T) -> U + Send + 'static,
{
    move |maybe| maybe.map(projection)
}

/// Operator form of [`MaybeAsync::bind`].
pub fn bind<T, R, F>(projection: F) -> impl FnOnce(MaybeAsync<T>) -> MaybeAsync<R::Value>
where
    T: Send + 'static,
    F: FnOnce(T) -> R + Send + 'static,
    R: IntoMaybeAsync,
{
    move |maybe| maybe.bind(projection)
}

/// Operator form of [`MaybeAsync::tap`].
pub fn tap<T, F>(action: F) -> impl FnOnce(MaybeAsync<T>) -> MaybeAsync<T>
where
    T: Send + 'static,
    F: FnOnce(&T) + Send + 'static,
{
    move |maybe| maybe.tap(action)
}

/// Operator form of [`MaybeAsync::tap_none`].
pub fn tap_none<T, F>(action: F) -> impl FnOnce(MaybeAsync<T>) -> MaybeAsync<T>
where
    T: Send + 'static,
    F: FnOnce() + Send + 'static,
{
    move |maybe| maybe.tap_none(action)
}

/// Operator form of [`MaybeAsync::or`].
pub fn or<T: Send + 'static>(fallback: T) -> impl FnOnce(MaybeAsync<T>) -> MaybeAsync<T> {
    move |maybe| maybe.or(fallback)
}

/// Operator form of [`MaybeAsync::to_result`].
pub fn to_result<T, E>(error: E) -> impl FnOnce(MaybeAsync<T>) -> ResultAsync<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    move |maybe| maybe.to_result(error)
}
