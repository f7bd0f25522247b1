//! Error types raised outside the domain-failure model.
//!
//! Two kinds of errors live here:
//!
//! - [`ContractError`]: a container was used against its contract, e.g. a
//!   value was requested from an empty `Maybe`. These are never carried
//!   inside a container; they are returned from `try_*` accessors or raised
//!   as panics by the `*_or_panic` accessors.
//! - [`Rejection`]: a platform-level failure (a panic) caught at an explicit
//!   boundary such as `Result::catch_unwind` and handed to a caller-supplied
//!   error handler.

use std::any::Any;
use std::fmt;

/// Represents a violation of a container's usage contract.
///
/// # Examples
///
/// ```rust
/// use outcomes::ContractError;
///
/// assert_eq!(
///     format!("{}", ContractError::EmptyValue),
///     "no value: the Maybe is empty"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractError {
    /// A value was requested from a `Maybe` that has none.
    EmptyValue,
    /// A value was requested from a failed `Result`.
    NoValue,
    /// An error was requested from a successful `Result`.
    NoError,
    /// `convert_failure` was called on a successful `Result`.
    ConvertSuccess,
}

impl ContractError {
    /// Logs the violation and panics with its message.
    ///
    /// Used by the `*_or_panic` accessors.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        tracing::error!(error = %self, "container contract violated");
        panic!("{self}")
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::EmptyValue => "no value: the Maybe is empty",
            Self::NoValue => "no value: the Result is a failure",
            Self::NoError => "no error: the Result is a success",
            Self::ConvertSuccess => "cannot convert a successful Result into a failure",
        };
        formatter.write_str(message)
    }
}

impl std::error::Error for ContractError {}

/// A panic caught at a recovery boundary.
///
/// The panic payload is reduced to its message: `&str` and `String`
/// payloads are kept verbatim, anything else becomes `"unknown panic"`.
///
/// # Examples
///
/// ```rust
/// use outcomes::Rejection;
///
/// let rejection = Rejection::new("connection reset");
/// assert_eq!(rejection.message(), "connection reset");
/// assert_eq!(format!("{rejection}"), "panicked: connection reset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rejection {
    message: String,
}

impl Rejection {
    /// Creates a rejection carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload.downcast_ref::<&'static str>().map_or_else(
                || "unknown panic".to_string(),
                |message| (*message).to_string(),
            ),
        };
        let rejection = Self { message };
        tracing::warn!(message = %rejection.message, "panic converted into a rejection");
        rejection
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the rejection, returning the panic message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ContractError::EmptyValue, "no value: the Maybe is empty")]
    #[case(ContractError::NoValue, "no value: the Result is a failure")]
    #[case(ContractError::NoError, "no error: the Result is a success")]
    #[case(
        ContractError::ConvertSuccess,
        "cannot convert a successful Result into a failure"
    )]
    fn contract_error_display(#[case] error: ContractError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn rejection_from_static_str_payload() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(Rejection::from_panic(payload).message(), "boom");
    }

    #[rstest]
    fn rejection_from_string_payload() {
        let code = 7;
        let payload = std::panic::catch_unwind(|| panic!("failed with {code}")).unwrap_err();
        assert_eq!(Rejection::from_panic(payload).message(), "failed with 7");
    }

    #[rstest]
    fn rejection_from_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(Rejection::from_panic(payload).message(), "unknown panic");
    }
}
