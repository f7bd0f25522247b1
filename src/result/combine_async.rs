//! Aggregation over many pending results.
//!
//! Every entry starts before any of them is awaited, so the entries run
//! concurrently. Outcomes are reported in input order, not completion order.

use std::fmt;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::stream::{FuturesOrdered, StreamExt};

use super::aggregate::{ERROR_SEPARATOR, finish_combine};
use super::{IntoResultAsync, Record, Result, ResultAsync};
use crate::error::Rejection;

/// Awaits one entry, turning its failure or panic into a message.
async fn settle_entry<K, V, E>(key: K, entry: ResultAsync<V, E>) -> (K, std::result::Result<V, String>)
where
    E: fmt::Display,
{
    let outcome = match AssertUnwindSafe(entry).catch_unwind().await {
        Ok(Result::Success(value)) => Ok(value),
        Ok(Result::Failure(error)) => Err(error.to_string()),
        Err(payload) => Err(Rejection::from_panic(payload).to_string()),
    };
    (key, outcome)
}

impl<K, V> ResultAsync<Record<K, V>, String>
where
    K: Send + 'static,
    V: Send + 'static,
{
    /// Aggregates keyed outcomes, synchronous or asynchronous.
    ///
    /// Every entry is awaited. Succeeds with a [`Record`] keyed like the
    /// input when all of them succeed; otherwise fails with every error
    /// message, in key order, joined by `", "`. A panicking entry counts as
    /// a failure with message `panicked: <message>`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::{Result, ResultAsync};
    ///
    /// let combined = ResultAsync::combine([
    ///     ("a", Result::<i32, String>::success(1).to_async()),
    ///     ("b", ResultAsync::success(2)),
    /// ])
    /// .await;
    /// assert_eq!(combined.get_value_or_panic()["b"], 2);
    /// ```
    pub fn combine<I, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, R)>,
        R: IntoResultAsync<Value = V>,
        R::Error: fmt::Display,
    {
        let pending: FuturesOrdered<_> = entries
            .into_iter()
            .map(|(key, entry)| settle_entry(key, entry.into_result_async()))
            .collect();

        Self::from_future(async move {
            let settled: Vec<_> = pending.collect().await;
            let mut record = Record::new();
            let mut errors = Vec::new();
            for (key, outcome) in settled {
                match outcome {
                    Ok(value) => record.push(key, value),
                    Err(message) => errors.push(message),
                }
            }
            finish_combine(record, errors)
        })
    }

    /// Aggregates keyed outcomes, failing with the first failure in key
    /// order. Entries after that failure are dropped without being awaited
    /// further.
    pub fn combine_in_order<I, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, R)>,
        R: IntoResultAsync<Value = V>,
        R::Error: fmt::Display,
    {
        let mut pending: FuturesOrdered<_> = entries
            .into_iter()
            .map(|(key, entry)| settle_entry(key, entry.into_result_async()))
            .collect();

        Self::from_future(async move {
            let mut record = Record::new();
            while let Some((key, outcome)) = pending.next().await {
                match outcome {
                    Ok(value) => record.push(key, value),
                    Err(message) => {
                        tracing::debug!(
                            settled = record.len(),
                            "combine_in_order stopped at first failure"
                        );
                        return Result::Failure(message);
                    }
                }
            }
            Result::Success(record)
        })
    }
}

// =============================================================================
// Heterogeneous Aggregation
// =============================================================================

/// Aggregation over a tuple of outcomes with distinct value types.
///
/// Implemented for tuples of two to four [`IntoResultAsync`] entries. Each
/// entry may be a [`Result`], a [`ResultAsync`] or any future of a `Result`,
/// and the error types only need to implement `Display`.
pub trait CombineTuple {
    /// The tuple of success values.
    type Values: Send + 'static;

    /// Aggregates every entry; see [`ResultAsync::combine`].
    fn combine_tuple(self) -> ResultAsync<Self::Values, String>;
}

/// Aggregates a tuple of outcomes.
///
/// # Examples
///
/// ```rust,ignore
/// use outcomes::{Result, ResultAsync, combine_tuple};
///
/// let pair = combine_tuple((
///     Result::<i32, String>::success(1),
///     ResultAsync::<&str, String>::success("two"),
/// ))
/// .await;
/// assert_eq!(pair, Result::success((1, "two")));
/// ```
pub fn combine_tuple<T: CombineTuple>(entries: T) -> ResultAsync<T::Values, String> {
    entries.combine_tuple()
}

macro_rules! impl_combine_tuple {
    ($($entry:ident => $binding:ident),+) => {
        impl<$($entry),+> CombineTuple for ($($entry,)+)
        where
            $($entry: IntoResultAsync, <$entry as IntoResultAsync>::Error: fmt::Display,)+
        {
            type Values = ($(<$entry as IntoResultAsync>::Value,)+);

            fn combine_tuple(self) -> ResultAsync<Self::Values, String> {
                let ($($binding,)+) = self;
                $(let $binding = settle_entry((), $binding.into_result_async());)+

                ResultAsync::from_future(async move {
                    let ($($binding,)+) = futures::join!($($binding),+);
                    let mut errors = Vec::new();
                    $(
                        let $binding = match $binding.1 {
                            Ok(value) => Some(value),
                            Err(message) => {
                                errors.push(message);
                                None
                            }
                        };
                    )+
                    match ($($binding,)+) {
                        ($(Some($binding),)+) => Result::Success(($($binding,)+)),
                        _ => {
                            tracing::debug!(failures = errors.len(), "combine_tuple failed");
                            Result::Failure(errors.join(ERROR_SEPARATOR))
                        }
                    }
                })
            }
        }
    };
}

impl_combine_tuple!(A => first, B => second);
impl_combine_tuple!(A => first, B => second, C => third);
impl_combine_tuple!(A => first, B => second, C => third, D => fourth);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    async fn explode() -> Result<i32, String> {
        panic!("exploded")
    }

    #[rstest]
    #[tokio::test]
    async fn combine_reports_panic_as_failure() {
        let combined = ResultAsync::combine([
            ("ok", ResultAsync::<i32, String>::success(1)),
            ("boom", ResultAsync::from_future(explode())),
        ])
        .await;
        assert_eq!(combined, Result::failure("panicked: exploded".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn combine_tuple_collects_every_error() {
        let combined = combine_tuple((
            Result::<i32, String>::failure("first".to_string()),
            ResultAsync::<u8, &str>::failure("second"),
            Result::<bool, String>::success(true),
        ))
        .await;
        assert_eq!(combined, Result::failure("first, second".to_string()));
    }
}
