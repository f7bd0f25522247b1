//! Maybe type - zero or one value.
//!
//! `Maybe<T>` is either `Some(T)` or `None`. It complements [`Option`] with
//! the combinators a railway-style pipeline needs: side-effect taps that
//! return the original container, fallbacks that accept either a value or
//! another `Maybe`, bridges into [`Result`](crate::Result) and, with the
//! `async` feature, into [`MaybeAsync`].
//!
//! Emptiness is an explicit variant, never a sentinel: `0`, `""` and
//! friends are legitimate payloads. Callers that do want the sentinel
//! policy opt in with [`Maybe::zero_as_none`] and
//! [`Maybe::empty_string_as_none`].
//!
//! # Examples
//!
//! ```rust
//! use outcomes::Maybe;
//!
//! let greeting = Maybe::some("world")
//!     .map(|name| format!("hello, {name}"))
//!     .get_value_or_default("nobody home".to_string());
//! assert_eq!(greeting, "hello, world");
//!
//! let missing: Maybe<&str> = Maybe::from(None);
//! assert!(missing.has_no_value());
//! ```

#[cfg(feature = "async")]
mod maybe_async;

#[cfg(feature = "async")]
pub use maybe_async::{IntoMaybeAsync, MaybeAsync, SharedMaybeAsync};

use std::fmt;

use crate::error::ContractError;

/// A container holding zero or one value.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Equality
///
/// `PartialEq` is structural, so `Maybe::none() == Maybe::none()`.
/// [`Maybe::equals`] implements the stricter comparison where two empty
/// containers are never equal.
///
/// # Examples
///
/// ```rust
/// use outcomes::Maybe;
///
/// let tagged = Maybe::some(21)
///     .tap(|value| assert_eq!(*value, 21))
///     .map(|value| value * 2);
/// assert_eq!(tagged, Maybe::some(42));
/// ```
#[must_use = "this `Maybe` may be empty, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A value is present.
    Some(T),
    /// No value is present.
    None,
}

// =============================================================================
// Construction
// =============================================================================

impl<T> Maybe<T> {
    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a `Maybe` from an [`Option`]: `Some` keeps its value,
    /// `None` becomes empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(1)), Maybe::some(1));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::none());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }

    /// Returns the first item, or `none` when `items` is empty.
    pub fn try_first<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_option(items.into_iter().next())
    }

    /// Returns the first item matching `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// let first_even = Maybe::try_first_with(vec![1, 3, 4, 6], |n| n % 2 == 0);
    /// assert_eq!(first_even, Maybe::some(4));
    /// ```
    pub fn try_first_with<I, P>(items: I, mut predicate: P) -> Self
    where
        I: IntoIterator<Item = T>,
        P: FnMut(&T) -> bool,
    {
        Self::from_option(items.into_iter().find(|item| predicate(item)))
    }

    /// Returns the last item, or `none` when `items` is empty.
    pub fn try_last<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_option(items.into_iter().last())
    }

    /// Returns the last item matching `predicate`.
    pub fn try_last_with<I, P>(items: I, mut predicate: P) -> Self
    where
        I: IntoIterator<Item = T>,
        P: FnMut(&T) -> bool,
    {
        Self::from_option(items.into_iter().filter(|item| predicate(item)).last())
    }

    /// Keeps only the values of the non-empty containers, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// let values = Maybe::choose(vec![Maybe::some(1), Maybe::none(), Maybe::some(3)]);
    /// assert_eq!(values, vec![1, 3]);
    /// ```
    pub fn choose<I>(maybes: I) -> Vec<T>
    where
        I: IntoIterator<Item = Self>,
    {
        maybes.into_iter().filter_map(Self::into_option).collect()
    }

    /// Like [`Maybe::choose`], projecting every kept value through `selector`.
    pub fn choose_with<I, U, S>(maybes: I, selector: S) -> Vec<U>
    where
        I: IntoIterator<Item = Self>,
        S: FnMut(T) -> U,
    {
        maybes
            .into_iter()
            .filter_map(Self::into_option)
            .map(selector)
            .collect()
    }
}

impl<T: Default + PartialEq> Maybe<T> {
    /// Treats the type's zero (its `Default`) as "no value".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// assert_eq!(Maybe::zero_as_none(0), Maybe::none());
    /// assert_eq!(Maybe::zero_as_none(7), Maybe::some(7));
    /// ```
    pub fn zero_as_none(value: T) -> Self {
        if value == T::default() {
            Self::None
        } else {
            Self::Some(value)
        }
    }
}

impl<S: AsRef<str>> Maybe<S> {
    /// Treats an empty string as "no value".
    pub fn empty_string_as_none(value: S) -> Self {
        if value.as_ref().is_empty() {
            Self::None
        } else {
            Self::Some(value)
        }
    }

    /// Treats an empty or whitespace-only string as "no value".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// assert_eq!(Maybe::empty_or_whitespace_as_none(" \t"), Maybe::none());
    /// assert_eq!(Maybe::empty_or_whitespace_as_none(" a "), Maybe::some(" a "));
    /// ```
    pub fn empty_or_whitespace_as_none(value: S) -> Self {
        if value.as_ref().trim().is_empty() {
            Self::None
        } else {
            Self::Some(value)
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Inspection and Extraction
// =============================================================================

impl<T> Maybe<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn has_no_value(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts into an [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns the value, or [`ContractError::EmptyValue`].
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::EmptyValue`] when no value is present.
    pub fn try_get_value(self) -> std::result::Result<T, ContractError> {
        self.into_option().ok_or(ContractError::EmptyValue)
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the [`ContractError::EmptyValue`] message when no value
    /// is present.
    #[track_caller]
    pub fn get_value_or_panic(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => ContractError::EmptyValue.raise(),
        }
    }

    /// Returns the value, or `default` when empty.
    #[inline]
    pub fn get_value_or_default(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value, or the result of `factory` when empty.
    ///
    /// `factory` is only invoked for an empty container.
    #[inline]
    pub fn get_value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => factory(),
        }
    }

    /// Collapses the container by invoking exactly one branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// let label = Maybe::some(3).fold(|n| format!("{n} items"), || "empty".to_string());
    /// assert_eq!(label, "3 items");
    /// ```
    pub fn fold<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }
}

impl<T: PartialEq> Maybe<T> {
    /// Compares two containers by value.
    ///
    /// Only two containers that both hold a value can be equal; two empty
    /// containers are *not* equal to each other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// assert!(Maybe::some(1).equals(&Maybe::some(1)));
    /// assert!(!Maybe::<i32>::none().equals(&Maybe::none()));
    /// ```
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => left == right,
            _ => false,
        }
    }
}

// =============================================================================
// Transformation
// =============================================================================

impl<T> Maybe<T> {
    /// Applies `projection` to the value. An empty container stays empty
    /// and `projection` is not invoked.
    #[inline]
    pub fn map<U, F>(self, projection: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(projection(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies a `Maybe`-returning `projection` to the value and flattens
    /// the result. An empty container stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// let parse = |text: &str| Maybe::from(text.parse::<i32>().ok());
    /// assert_eq!(Maybe::some("12").bind(parse), Maybe::some(12));
    /// assert_eq!(Maybe::some("x").bind(parse), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, projection: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => projection(value),
            Self::None => Maybe::None,
        }
    }

    /// Runs `action` on the value, returning the container unchanged.
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` when empty, returning the container unchanged.
    pub fn tap_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.has_no_value() {
            action();
        }
        self
    }

    /// Returns `self` if it has a value, otherwise `Some(fallback)`.
    pub fn or(self, fallback: T) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => Self::Some(fallback),
        }
    }

    /// Returns `self` if it has a value, otherwise `Some(factory())`.
    pub fn or_else<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(_) => self,
            Self::None => Self::Some(factory()),
        }
    }

    /// Returns `self` if it has a value, otherwise `fallback`.
    pub fn or_maybe(self, fallback: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => fallback,
        }
    }

    /// Returns `self` if it has a value, otherwise the `Maybe` produced by
    /// `factory`.
    pub fn or_else_maybe<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => factory(),
        }
    }
}

#[cfg(feature = "result")]
impl<T> Maybe<T> {
    /// Converts into a `Result`, failing with `error` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{Maybe, Result};
    ///
    /// assert_eq!(Maybe::some(1).to_result("missing"), Result::success(1));
    /// assert_eq!(Maybe::<i32>::none().to_result("missing"), Result::failure("missing"));
    /// ```
    pub fn to_result<E>(self, error: E) -> crate::Result<T, E> {
        match self {
            Self::Some(value) => crate::Result::Success(value),
            Self::None => crate::Result::Failure(error),
        }
    }

    /// Converts into a `Result`, failing with `error_factory()` when empty.
    pub fn to_result_with<E, F>(self, error_factory: F) -> crate::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => crate::Result::Success(value),
            Self::None => crate::Result::Failure(error_factory()),
        }
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => write!(formatter, "None"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_ref().into_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn map_on_none_does_not_invoke_projection() {
        let mut invoked = false;
        let mapped = Maybe::<i32>::none().map(|value| {
            invoked = true;
            value + 1
        });
        assert_eq!(mapped, Maybe::none());
        assert!(!invoked);
    }

    #[rstest]
    fn try_last_with_picks_last_match() {
        let last_odd = Maybe::try_last_with(vec![1, 2, 3, 4], |n| n % 2 == 1);
        assert_eq!(last_odd, Maybe::some(3));
    }

    #[rstest]
    fn default_is_none() {
        assert!(Maybe::<String>::default().has_no_value());
    }

    #[rstest]
    #[case(Maybe::some(5), "Some(5)")]
    #[case(Maybe::none(), "None")]
    fn display(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(format!("{maybe}"), expected);
    }
}
