//! Result type - a success value or a domain failure.
//!
//! `Result<V, E>` is either `Success(V)` or `Failure(E)`. Every transformation
//! of the success value short-circuits on a failure: the callback is not
//! invoked and the existing error is passed through untouched. Failures are
//! handled explicitly with [`Result::compensate`], [`Result::map_error`],
//! [`Result::fold`] or [`Result::finally`].
//!
//! This type deliberately shares its name with [`std::result::Result`]; it
//! converts to and from the standard type losslessly.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::Result;
//!
//! fn parse_port(text: &str) -> Result<u16, String> {
//!     Result::try_catch(|| text.parse::<u16>(), |error| error.to_string())
//!         .ensure(|port| *port >= 1024, "reserved port".to_string())
//! }
//!
//! assert_eq!(parse_port("8080"), Result::success(8080));
//! assert_eq!(parse_port("80"), Result::failure("reserved port".to_string()));
//! ```

mod aggregate;
mod record;

#[cfg(feature = "async")]
mod combine_async;
#[cfg(feature = "async")]
mod result_async;

pub use record::Record;

#[cfg(feature = "async")]
pub use combine_async::{CombineTuple, combine_tuple};
#[cfg(feature = "async")]
pub use result_async::{IntoResultAsync, ResultAsync, SharedResultAsync};

use std::fmt;
use std::panic::AssertUnwindSafe;

use crate::Maybe;
use crate::Unit;
use crate::error::{ContractError, Rejection};

/// The outcome of an operation: a success value or a domain failure.
///
/// # Type Parameters
///
/// * `V` - The type of the success value
/// * `E` - The type of the failure error
///
/// # Examples
///
/// ```rust
/// use outcomes::Result;
///
/// let recovered = Result::<String, &str>::failure("err")
///     .compensate(|error| Result::<String, &str>::success(format!("recovered:{error}")));
/// assert_eq!(recovered, Result::success("recovered:err".to_string()));
/// ```
#[must_use = "this `Result` may be a failure, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Result<V, E> {
    /// The operation succeeded with a value.
    Success(V),
    /// The operation failed with an error.
    Failure(E),
}

// =============================================================================
// Construction
// =============================================================================

impl<V, E> Result<V, E> {
    /// Creates a successful result.
    #[inline]
    pub const fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Creates a failed result.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Succeeds with `value` when `condition` holds, otherwise fails with
    /// `error`.
    pub fn success_if(condition: bool, value: V, error: E) -> Self {
        if condition {
            Self::Success(value)
        } else {
            Self::Failure(error)
        }
    }

    /// Like [`Result::success_if`], evaluating `predicate` lazily.
    pub fn success_if_with<P>(predicate: P, value: V, error: E) -> Self
    where
        P: FnOnce() -> bool,
    {
        Self::success_if(predicate(), value, error)
    }

    /// Fails with `error` when `condition` holds, otherwise succeeds with
    /// `value`.
    pub fn failure_if(condition: bool, value: V, error: E) -> Self {
        Self::success_if(!condition, value, error)
    }

    /// Like [`Result::failure_if`], evaluating `predicate` lazily.
    pub fn failure_if_with<P>(predicate: P, value: V, error: E) -> Self
    where
        P: FnOnce() -> bool,
    {
        Self::failure_if(predicate(), value, error)
    }

    /// Runs a fallible `operation`, converting its error with
    /// `error_handler`. For operations that produce `()`, see
    /// [`Result::try_catch_unit`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Result;
    ///
    /// let parsed = Result::try_catch(|| "x".parse::<i32>(), |_| "not a number");
    /// assert_eq!(parsed, Result::failure("not a number"));
    /// ```
    pub fn try_catch<X, F, H>(operation: F, error_handler: H) -> Self
    where
        F: FnOnce() -> std::result::Result<V, X>,
        H: FnOnce(X) -> E,
    {
        match operation() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error_handler(error)),
        }
    }

    /// Runs `operation`, converting a panic into a failure through
    /// `error_handler`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Result;
    ///
    /// let outcome: Result<i32, String> = Result::catch_unwind(
    ///     || panic!("division by zero"),
    ///     |rejection| rejection.into_message(),
    /// );
    /// assert_eq!(outcome, Result::failure("division by zero".to_string()));
    /// ```
    pub fn catch_unwind<F, H>(operation: F, error_handler: H) -> Self
    where
        F: FnOnce() -> V,
        H: FnOnce(Rejection) -> E,
    {
        match std::panic::catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(error_handler(Rejection::from_panic(payload))),
        }
    }
}

impl<E> Result<Unit, E> {
    /// Creates a successful result carrying [`Unit`].
    #[inline]
    pub const fn success_unit() -> Self {
        Self::Success(Unit)
    }

    /// Runs a fallible `operation` that produces nothing, succeeding with
    /// [`Unit`]. [`Result::try_catch`] on the same operation would succeed
    /// with `()` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{Result, Unit};
    ///
    /// let written = Result::try_catch_unit(|| Ok::<(), String>(()), |error| error);
    /// assert_eq!(written, Result::success(Unit));
    /// ```
    pub fn try_catch_unit<X, F, H>(operation: F, error_handler: H) -> Self
    where
        F: FnOnce() -> std::result::Result<(), X>,
        H: FnOnce(X) -> E,
    {
        Result::try_catch(operation, error_handler).map(Unit::from)
    }
}

impl<V, E> From<std::result::Result<V, E>> for Result<V, E> {
    #[inline]
    fn from(result: std::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for std::result::Result<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        result.into_std()
    }
}

// =============================================================================
// Inspection and Extraction
// =============================================================================

impl<V, E> Result<V, E> {
    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the error, if any.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Converts into a [`std::result::Result`].
    #[inline]
    pub fn into_std(self) -> std::result::Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Converts into a [`Maybe`], discarding the error.
    pub fn to_maybe(self) -> Maybe<V> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Returns the success value, or [`ContractError::NoValue`].
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NoValue`] for a failure.
    pub fn try_get_value(self) -> std::result::Result<V, ContractError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(ContractError::NoValue),
        }
    }

    /// Returns the error, or [`ContractError::NoError`].
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NoError`] for a success.
    pub fn try_get_error(self) -> std::result::Result<E, ContractError> {
        match self {
            Self::Success(_) => Err(ContractError::NoError),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with the [`ContractError::NoValue`] message for a failure.
    #[track_caller]
    pub fn get_value_or_panic(self) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => ContractError::NoValue.raise(),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with the [`ContractError::NoError`] message for a success.
    #[track_caller]
    pub fn get_error_or_panic(self) -> E {
        match self {
            Self::Success(_) => ContractError::NoError.raise(),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value, or `default` for a failure.
    #[inline]
    pub fn get_value_or_default(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or a value derived from the error.
    #[inline]
    pub fn get_value_or_else<F>(self, factory: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => factory(error),
        }
    }

    /// Returns the error, or `default` for a success.
    #[inline]
    pub fn get_error_or_default(self, default: E) -> E {
        match self {
            Self::Success(_) => default,
            Self::Failure(error) => error,
        }
    }

    /// Returns the error, or an error derived from the success value.
    #[inline]
    pub fn get_error_or_else<F>(self, factory: F) -> E
    where
        F: FnOnce(V) -> E,
    {
        match self {
            Self::Success(value) => factory(value),
            Self::Failure(error) => error,
        }
    }
}

// =============================================================================
// Transformation
// =============================================================================

impl<V, E> Result<V, E> {
    /// Fails with `error` when the success value does not satisfy
    /// `predicate`. A failure passes through and `predicate` is not invoked.
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        self.ensure_with(predicate, |_| error)
    }

    /// Like [`Result::ensure`], deriving the error from the rejected value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Result;
    ///
    /// let checked = Result::<i32, String>::success(-4)
    ///     .ensure_with(|n| *n >= 0, |n| format!("{n} is negative"));
    /// assert_eq!(checked, Result::failure("-4 is negative".to_string()));
    /// ```
    pub fn ensure_with<P, F>(self, predicate: P, error_factory: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(V) -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error_factory(value))
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Transforms the success value.
    #[inline]
    pub fn map<U, F>(self, projection: F) -> Result<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Result::Success(projection(value)),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Transforms the error.
    #[inline]
    pub fn map_error<E2, F>(self, projection: F) -> Result<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(projection(error)),
        }
    }

    /// Alias of [`Result::map_error`].
    #[inline]
    pub fn map_failure<E2, F>(self, projection: F) -> Result<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.map_error(projection)
    }

    /// Chains a `Result`-returning `projection` on the success value.
    #[inline]
    pub fn bind<U, F>(self, projection: F) -> Result<U, E>
    where
        F: FnOnce(V) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => projection(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Runs a validation step for its outcome only.
    ///
    /// On success, `validation` is invoked with the value; its failure
    /// replaces `self`, its success value is discarded and the original
    /// value is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Result;
    ///
    /// let not_banned = |name: &String| {
    ///     Result::failure_if(name == "mallory", name.len(), "banned".to_string())
    /// };
    /// let checked = Result::<String, String>::success("alice".to_string()).check(not_banned);
    /// assert_eq!(checked, Result::success("alice".to_string()));
    /// ```
    pub fn check<U, F>(self, validation: F) -> Self
    where
        F: FnOnce(&V) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => match validation(&value) {
                Result::Success(_) => Self::Success(value),
                Result::Failure(error) => Self::Failure(error),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    /// [`Result::check`] gated by `condition`.
    pub fn check_if<U, F>(self, condition: bool, validation: F) -> Self
    where
        F: FnOnce(&V) -> Result<U, E>,
    {
        if condition { self.check(validation) } else { self }
    }

    /// [`Result::check`] gated by a predicate on the success value.
    pub fn check_if_with<U, P, F>(self, predicate: P, validation: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(&V) -> Result<U, E>,
    {
        let accepted = matches!(&self, Self::Success(value) if predicate(value));
        if accepted { self.check(validation) } else { self }
    }

    /// Runs `action` on the success value.
    #[inline]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the success value when `condition` holds.
    pub fn tap_if<F>(self, condition: bool, action: F) -> Self
    where
        F: FnOnce(&V),
    {
        if condition { self.tap(action) } else { self }
    }

    /// Runs `action` on the success value when `predicate` accepts it.
    pub fn tap_if_with<P, F>(self, predicate: P, action: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(&V),
    {
        if let Self::Success(value) = &self
            && predicate(value)
        {
            action(value);
        }
        self
    }

    /// Runs `action` regardless of the outcome.
    pub fn tap_either<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }

    /// Runs `action` on the error.
    #[inline]
    pub fn tap_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Runs a fallible `operation` on the success value, converting its
    /// error with `error_handler`. An existing failure is preserved and
    /// neither function is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Result;
    ///
    /// let parsed = Result::<&str, String>::success("17")
    ///     .on_success_try(|text| text.parse::<i32>(), |error| error.to_string());
    /// assert_eq!(parsed, Result::success(17));
    /// ```
    pub fn on_success_try<U, X, F, H>(self, operation: F, error_handler: H) -> Result<U, E>
    where
        F: FnOnce(V) -> std::result::Result<U, X>,
        H: FnOnce(X) -> E,
    {
        match self {
            Self::Success(value) => match operation(value) {
                Ok(next) => Result::Success(next),
                Err(error) => Result::Failure(error_handler(error)),
            },
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Recovers from a failure: `recovery` receives the original error and
    /// produces a replacement result. A success passes through.
    #[inline]
    pub fn compensate<E2, F>(self, recovery: F) -> Result<V, E2>
    where
        F: FnOnce(E) -> Result<V, E2>,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    /// Collapses the result by invoking exactly one branch.
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Hands the whole result to `collapse`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Result;
    ///
    /// let status = Result::<i32, &str>::failure("timeout")
    ///     .finally(|result| if result.is_success() { 200 } else { 504 });
    /// assert_eq!(status, 504);
    /// ```
    pub fn finally<R, F>(self, collapse: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        collapse(self)
    }

    /// Re-types a failure under a new success type.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ConvertSuccess`] when called on a success.
    pub fn convert_failure<U>(self) -> std::result::Result<Result<U, E>, ContractError> {
        match self {
            Self::Success(_) => Err(ContractError::ConvertSuccess),
            Self::Failure(error) => Ok(Result::Failure(error)),
        }
    }
}

// =============================================================================
// Display
// =============================================================================

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Result<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn success_unit_carries_unit() {
        let outcome: Result<Unit, String> = Result::success_unit();
        assert_eq!(outcome.value(), Some(&Unit));
    }

    #[rstest]
    fn try_catch_unit_succeeds_with_unit() {
        let done: Result<Unit, String> = Result::try_catch_unit(|| Ok::<(), i32>(()), |code| code.to_string());
        assert_eq!(done, Result::success(Unit));

        let failed: Result<Unit, String> = Result::try_catch_unit(|| Err(7), |code: i32| code.to_string());
        assert_eq!(failed, Result::failure("7".to_string()));
    }

    #[rstest]
    #[case(true, Result::success(1))]
    #[case(false, Result::failure("no"))]
    fn success_if_branches(#[case] condition: bool, #[case] expected: Result<i32, &str>) {
        assert_eq!(Result::success_if(condition, 1, "no"), expected);
    }

    #[rstest]
    #[case(true, Result::failure("no"))]
    #[case(false, Result::success(1))]
    fn failure_if_branches(#[case] condition: bool, #[case] expected: Result<i32, &str>) {
        assert_eq!(Result::failure_if(condition, 1, "no"), expected);
    }

    #[rstest]
    fn check_if_with_skips_validation_when_predicate_rejects() {
        let mut validated = false;
        let outcome = Result::<i32, &str>::success(1).check_if_with(
            |value| *value > 10,
            |_| {
                validated = true;
                Result::<(), &str>::failure("never")
            },
        );
        assert_eq!(outcome, Result::success(1));
        assert!(!validated);
    }

    #[rstest]
    fn convert_failure_rejects_success() {
        let outcome = Result::<i32, &str>::success(1).convert_failure::<String>();
        assert_eq!(outcome, Err(ContractError::ConvertSuccess));
    }

    #[rstest]
    #[case(Result::success(3), "Success(3)")]
    #[case(Result::failure("bad".to_string()), "Failure(bad)")]
    fn display(#[case] outcome: Result<i32, String>, #[case] expected: &str) {
        assert_eq!(format!("{outcome}"), expected);
    }
}
