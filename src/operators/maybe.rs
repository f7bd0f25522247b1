//! Operators over [`Maybe`].

use crate::Maybe;

/// Operator form of [`Maybe::map`].
pub fn map<T, U, F>(projection: F) -> impl FnOnce(Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    move |maybe| maybe.map(projection)
}

/// Operator form of [`Maybe::bind`].
pub fn bind<T, U, F>(projection: F) -> impl FnOnce(Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> Maybe<U>,
{
    move |maybe| maybe.bind(projection)
}

/// Operator form of [`Maybe::tap`].
pub fn tap<T, F>(action: F) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    F: FnOnce(&T),
{
    move |maybe| maybe.tap(action)
}

/// Operator form of [`Maybe::tap_none`].
pub fn tap_none<T, F>(action: F) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    F: FnOnce(),
{
    move |maybe| maybe.tap_none(action)
}

/// Operator form of [`Maybe::or`].
pub fn or<T>(fallback: T) -> impl FnOnce(Maybe<T>) -> Maybe<T> {
    move |maybe| maybe.or(fallback)
}

/// Operator form of [`Maybe::or_else`].
pub fn or_else<T, F>(factory: F) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    F: FnOnce() -> T,
{
    move |maybe| maybe.or_else(factory)
}

/// Operator form of [`Maybe::to_result`].
#[cfg(feature = "result")]
pub fn to_result<T, E>(error: E) -> impl FnOnce(Maybe<T>) -> crate::Result<T, E> {
    move |maybe| maybe.to_result(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::some(2), Maybe::some(4))]
    #[case(Maybe::none(), Maybe::some(0))]
    fn map_then_or(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(pipe!(input, map(|n: i32| n * 2), or(0)), expected);
    }
}
