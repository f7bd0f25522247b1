//! Pipeline composition for containers.
//!
//! Containers are threaded through operator chains in one of two ways:
//!
//! - [`pipe!`]: applies any number of single-argument operators left to
//!   right, starting from a container
//! - [`Pipe::pipe`]: the method form, one operator per call
//!
//! An operator is any `FnOnce(Container) -> Output`. The output may be a
//! different container entirely, e.g. a `Result` turning into a
//! `ResultAsync`. The free functions in [`crate::operators`] build such
//! operators.
//!
//! # Examples
//!
//! ```
//! use outcomes::pipe;
//! use outcomes::Maybe;
//! use outcomes::operators::maybe::{map, or};
//!
//! let name = pipe!(
//!     Maybe::some("  ada "),
//!     map(|name: &str| name.trim().to_string()),
//!     or("anonymous".to_string()),
//! );
//! assert_eq!(name, Maybe::some("ada".to_string()));
//! ```

mod pipe_macro;

/// Method-style pipeline step shared by every container.
///
/// `container.pipe(operator)` is `operator(container)`; chaining calls
/// folds left exactly like [`pipe!`](crate::pipe!).
///
/// # Examples
///
/// ```
/// use outcomes::{Maybe, Pipe};
///
/// let length = Maybe::some("hello")
///     .pipe(|maybe| maybe.map(str::len))
///     .pipe(|maybe| maybe.get_value_or_default(0));
/// assert_eq!(length, 5);
/// ```
pub trait Pipe: Sized {
    /// Applies `operator` to `self`.
    #[inline]
    fn pipe<Output, Operator>(self, operator: Operator) -> Output
    where
        Operator: FnOnce(Self) -> Output,
    {
        operator(self)
    }
}

#[cfg(feature = "maybe")]
impl<T> Pipe for crate::Maybe<T> {}

#[cfg(feature = "result")]
impl<V, E> Pipe for crate::Result<V, E> {}

#[cfg(feature = "async")]
impl<T> Pipe for crate::MaybeAsync<T> {}

#[cfg(feature = "async")]
impl<V, E> Pipe for crate::ResultAsync<V, E> {}
