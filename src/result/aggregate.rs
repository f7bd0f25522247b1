//! Aggregation over many synchronous results.
//!
//! - [`Result::choose`]: keep the success values, drop the failures
//! - [`Result::combine`]: succeed with every value, or fail with every error
//! - [`Result::combine_in_order`]: succeed with every value, or fail with the
//!   first error in key order

use std::fmt;

use super::{Record, Result};

/// Separator between aggregated error messages.
pub(crate) const ERROR_SEPARATOR: &str = ", ";

impl<V, E> Result<V, E> {
    /// Keeps the success values, preserving input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Result;
    ///
    /// let values = Result::choose(vec![
    ///     Result::success(1),
    ///     Result::failure("skipped"),
    ///     Result::success(3),
    /// ]);
    /// assert_eq!(values, vec![1, 3]);
    /// ```
    pub fn choose<I>(results: I) -> Vec<V>
    where
        I: IntoIterator<Item = Self>,
    {
        results.into_iter().filter_map(|result| result.into_std().ok()).collect()
    }

    /// Like [`Result::choose`], projecting every kept value through
    /// `selector`.
    pub fn choose_with<I, U, S>(results: I, selector: S) -> Vec<U>
    where
        I: IntoIterator<Item = Self>,
        S: FnMut(V) -> U,
    {
        results
            .into_iter()
            .filter_map(|result| result.into_std().ok())
            .map(selector)
            .collect()
    }
}

impl<K, V> Result<Record<K, V>, String> {
    /// Aggregates keyed results.
    ///
    /// Succeeds with a [`Record`] keyed like the input when every entry
    /// succeeds; otherwise fails with every error message, in key order,
    /// joined by `", "`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Result;
    ///
    /// let combined = Result::combine([
    ///     ("first", Result::<i32, &str>::failure("A")),
    ///     ("second", Result::failure("B")),
    /// ]);
    /// assert_eq!(combined, Result::failure("A, B".to_string()));
    /// ```
    pub fn combine<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Result<V, E>)>,
        E: fmt::Display,
    {
        let mut record = Record::new();
        let mut errors = Vec::new();
        for (key, entry) in entries {
            match entry {
                Result::Success(value) => record.push(key, value),
                Result::Failure(error) => errors.push(error.to_string()),
            }
        }
        finish_combine(record, errors)
    }

    /// Aggregates keyed results, stopping at the first failure in key
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Result;
    ///
    /// let combined = Result::combine_in_order([
    ///     ("first", Result::<i32, &str>::failure("A")),
    ///     ("second", Result::failure("B")),
    /// ]);
    /// assert_eq!(combined, Result::failure("A".to_string()));
    /// ```
    pub fn combine_in_order<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Result<V, E>)>,
        E: fmt::Display,
    {
        let mut record = Record::new();
        for (key, entry) in entries {
            match entry {
                Result::Success(value) => record.push(key, value),
                Result::Failure(error) => return Self::Failure(error.to_string()),
            }
        }
        Self::Success(record)
    }
}

/// Turns the collected values and errors into the aggregated outcome.
pub(crate) fn finish_combine<K, V>(
    record: Record<K, V>,
    errors: Vec<String>,
) -> Result<Record<K, V>, String> {
    if errors.is_empty() {
        tracing::trace!(entries = record.len(), "combine succeeded");
        Result::Success(record)
    } else {
        tracing::debug!(
            entries = record.len() + errors.len(),
            failures = errors.len(),
            "combine failed"
        );
        Result::Failure(errors.join(ERROR_SEPARATOR))
    }
}
