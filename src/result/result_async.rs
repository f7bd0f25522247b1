//! `ResultAsync` - a pending computation that settles to a [`Result`].
//!
//! `ResultAsync<V, E>` offers the same operations as [`Result`] with the same
//! short-circuit rules, generalized over pending computations: once the
//! underlying computation settles to a failure, no later `map`, `bind`,
//! `ensure`, `tap` or `on_success_try` callback is invoked and the error is
//! passed along unchanged.
//!
//! # impl `Future`
//!
//! `ResultAsync` implements `Future<Output = Result<V, E>>`, so it can be
//! awaited directly or through [`ResultAsync::settle`]:
//!
//! ```rust,ignore
//! use outcomes::{Result, ResultAsync};
//!
//! #[tokio::main]
//! async fn main() {
//!     let outcome = ResultAsync::<i32, String>::success(21)
//!         .map_async(|value| async move { value * 2 })
//!         .await;
//!     assert_eq!(outcome, Result::success(42));
//! }
//! ```
//!
//! # Evaluation Semantics
//!
//! A `ResultAsync` built from an already-known [`Result`] is *ready*: the
//! synchronous steps applied to it run immediately, at composition time,
//! without boxing. As soon as a step is asynchronous the chain becomes
//! *pending* and every later step runs when the chain is awaited, strictly
//! after the previous step has settled.
//!
//! ```rust,ignore
//! // The multiplication happens when `map` is called
//! let ready = ResultAsync::<i32, String>::success(10).map(|x| x * 2);
//!
//! // Deferred until awaited
//! let pending = ResultAsync::<i32, String>::from_future(async { Result::success(10) })
//!     .map(|x| x * 2);
//! ```
//!
//! # Accepting Sync or Async Projections
//!
//! `bind`, `check` and `compensate` accept any [`IntoResultAsync`]: a plain
//! [`Result`], a `ResultAsync`, or any other future settling to a `Result`.
//! Projections producing plain values use `map`, projections producing
//! futures of plain values use `map_async`.
//!
//! # Platform-Level Failures
//!
//! A panic inside a step is not a domain failure. It propagates to whoever
//! awaits the chain unless it is caught at a boundary: [`ResultAsync::catch_unwind`]
//! for the source computation, [`ResultAsync::settle_or_else`] for the whole
//! chain, and `combine` for each aggregated entry.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};
use pin_project_lite::pin_project;

use super::Result;
use crate::Unit;
use crate::error::{ContractError, Rejection};
use crate::maybe::MaybeAsync;

// =============================================================================
// ResultAsync Struct Definition
// =============================================================================

pin_project! {
    /// A pending computation that settles to a [`Result`].
    ///
    /// # Type Parameters
    ///
    /// - `V`: The success value type.
    /// - `E`: The failure error type.
    ///
    /// # Ownership
    ///
    /// A `ResultAsync` exclusively owns its computation and is consumed by
    /// every operation. To read a settled value more than once without
    /// re-running any step, convert it with [`ResultAsync::shared`].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::{Result, ResultAsync};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let outcome = ResultAsync::<i32, String>::failure("bad".to_string())
    ///         .map(|n| n * 2)
    ///         .tap(|_| unreachable!())
    ///         .await;
    ///     assert_eq!(outcome, Result::failure("bad".to_string()));
    /// }
    /// ```
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ResultAsync<V, E> {
        #[pin]
        state: ResultAsyncState<V, E>,
    }
}

pin_project! {
    /// Internal state machine for `ResultAsync`.
    ///
    /// - `Ready` -> `Settled` (on first poll)
    /// - `Pending` -> `Settled` (when the boxed future completes)
    #[project = ResultAsyncStateProj]
    enum ResultAsyncState<V, E> {
        /// An already-settled result, returned on first poll.
        Ready {
            result: Option<Result<V, E>>,
        },
        /// A computation still in flight.
        Pending {
            #[pin]
            future: BoxFuture<'static, Result<V, E>>,
        },
        /// The result has been handed out.
        Settled,
    }
}

static_assertions::assert_impl_all!(ResultAsync<i32, String>: Send, Unpin);

// =============================================================================
// Future Implementation
// =============================================================================

impl<V, E> Future for ResultAsync<V, E> {
    type Output = Result<V, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        let output = match this.state.as_mut().project() {
            ResultAsyncStateProj::Ready { result } => result
                .take()
                .expect("ResultAsync internal error: ready result was already taken"),
            ResultAsyncStateProj::Pending { future } => match future.poll(context) {
                Poll::Ready(result) => result,
                Poll::Pending => return Poll::Pending,
            },
            ResultAsyncStateProj::Settled => {
                panic!("ResultAsync polled after completion")
            }
        };

        this.state.set(ResultAsyncState::Settled);
        Poll::Ready(output)
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<V, E> ResultAsync<V, E> {
    /// Wraps an already-known [`Result`].
    #[inline]
    pub const fn from_result(result: Result<V, E>) -> Self {
        Self {
            state: ResultAsyncState::Ready {
                result: Some(result),
            },
        }
    }

    /// Creates a ready success.
    #[inline]
    pub const fn success(value: V) -> Self {
        Self::from_result(Result::Success(value))
    }

    /// Creates a ready failure.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::from_result(Result::Failure(error))
    }
}

impl<E> ResultAsync<Unit, E> {
    /// Creates a ready success carrying [`Unit`].
    #[inline]
    pub const fn success_unit() -> Self {
        Self::success(Unit)
    }
}

impl<V, E> From<Result<V, E>> for ResultAsync<V, E> {
    fn from(result: Result<V, E>) -> Self {
        Self::from_result(result)
    }
}

impl<V: Send + 'static, E: Send + 'static> ResultAsync<V, E> {
    /// Wraps a future settling to a domain [`Result`].
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<V, E>> + Send + 'static,
    {
        Self {
            state: ResultAsyncState::Pending {
                future: future.boxed(),
            },
        }
    }

    /// Wraps a fallible future, converting its error with `error_handler`.
    ///
    /// This is the boundary where an error outside the domain model
    /// becomes a domain failure.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::{Result, ResultAsync};
    ///
    /// let read = ResultAsync::try_future(
    ///     async { Err::<String, _>(std::io::Error::other("disk gone")) },
    ///     |error| format!("read failed: {error}"),
    /// );
    /// assert_eq!(read.await, Result::failure("read failed: disk gone".to_string()));
    /// ```
    pub fn try_future<X, F, H>(future: F, error_handler: H) -> Self
    where
        F: Future<Output = std::result::Result<V, X>> + Send + 'static,
        H: FnOnce(X) -> E + Send + 'static,
    {
        Self::from_future(async move {
            match future.await {
                Ok(value) => Result::Success(value),
                Err(error) => Result::Failure(error_handler(error)),
            }
        })
    }

    /// Like [`ResultAsync::try_future`] with an asynchronous error handler.
    pub fn try_future_with<X, F, H, HandlerFuture>(future: F, error_handler: H) -> Self
    where
        F: Future<Output = std::result::Result<V, X>> + Send + 'static,
        H: FnOnce(X) -> HandlerFuture + Send + 'static,
        HandlerFuture: Future<Output = E> + Send + 'static,
    {
        Self::from_future(async move {
            let error = match future.await {
                Ok(value) => return Result::Success(value),
                Err(error) => error,
            };
            Result::Failure(error_handler(error).await)
        })
    }

    /// Wraps an infallible future, converting a panic into a failure
    /// through `error_handler`.
    pub fn catch_unwind<F, H>(future: F, error_handler: H) -> Self
    where
        F: Future<Output = V> + Send + 'static,
        H: FnOnce(Rejection) -> E + Send + 'static,
    {
        Self::from_future(async move {
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(value) => Result::Success(value),
                Err(payload) => Result::Failure(error_handler(Rejection::from_panic(payload))),
            }
        })
    }
}

// =============================================================================
// Sequencing
// =============================================================================

impl<V: Send + 'static, E: Send + 'static> ResultAsync<V, E> {
    /// Runs `continuation` on the settled result.
    ///
    /// A ready result is handed over immediately; a pending one is awaited
    /// first.
    fn then_settle<U, E2, F>(self, continuation: F) -> ResultAsync<U, E2>
    where
        F: FnOnce(Result<V, E>) -> ResultAsync<U, E2> + Send + 'static,
        U: Send + 'static,
        E2: Send + 'static,
    {
        match self {
            Self {
                state: ResultAsyncState::Ready {
                    result: Some(result),
                },
            } => continuation(result),
            other => ResultAsync::from_future(async move {
                let settled = other.await;
                continuation(settled).await
            }),
        }
    }

    /// Like [`then_settle`](Self::then_settle) for steps that only act on a
    /// success. A failure is re-wrapped without invoking `continuation`.
    fn then_success<U, F>(self, continuation: F) -> ResultAsync<U, E>
    where
        F: FnOnce(V) -> ResultAsync<U, E> + Send + 'static,
        U: Send + 'static,
    {
        self.then_settle(|result| match result {
            Result::Success(value) => continuation(value),
            Result::Failure(error) => ResultAsync::failure(error),
        })
    }

    /// Counterpart of [`then_success`](Self::then_success) for failures.
    fn then_failure<E2, F>(self, continuation: F) -> ResultAsync<V, E2>
    where
        F: FnOnce(E) -> ResultAsync<V, E2> + Send + 'static,
        E2: Send + 'static,
    {
        self.then_settle(|result| match result {
            Result::Success(value) => ResultAsync::success(value),
            Result::Failure(error) => continuation(error),
        })
    }
}

// =============================================================================
// Transformations
// =============================================================================

impl<V: Send + 'static, E: Send + 'static> ResultAsync<V, E> {
    /// Transforms the success value.
    pub fn map<U, F>(self, projection: F) -> ResultAsync<U, E>
    where
        F: FnOnce(V) -> U + Send + 'static,
        U: Send + 'static,
    {
        self.then_success(|value| ResultAsync::success(projection(value)))
    }

    /// Transforms the success value with an asynchronous projection.
    pub fn map_async<U, F, Fut>(self, projection: F) -> ResultAsync<U, E>
    where
        F: FnOnce(V) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        self.then_success(|value| {
            let pending = projection(value);
            ResultAsync::from_future(async move { Result::Success(pending.await) })
        })
    }

    /// Transforms the error.
    pub fn map_error<E2, F>(self, projection: F) -> ResultAsync<V, E2>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        self.then_failure(|error| ResultAsync::failure(projection(error)))
    }

    /// Alias of [`ResultAsync::map_error`].
    pub fn map_failure<E2, F>(self, projection: F) -> ResultAsync<V, E2>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        self.map_error(projection)
    }

    /// Transforms the error with an asynchronous projection.
    pub fn map_error_async<E2, F, Fut>(self, projection: F) -> ResultAsync<V, E2>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = E2> + Send + 'static,
        E2: Send + 'static,
    {
        self.then_failure(|error| {
            let pending = projection(error);
            ResultAsync::from_future(async move { Result::Failure(pending.await) })
        })
    }

    /// Chains a projection returning a [`Result`], a `ResultAsync` or any
    /// future of a `Result`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::{Result, ResultAsync};
    ///
    /// let sync_step = ResultAsync::<i32, String>::success(1)
    ///     .bind(|n| Result::<i32, String>::success(n + 1));
    /// let async_step = sync_step.bind(|n| async move { Result::<i32, String>::success(n * 10) });
    /// assert_eq!(async_step.await, Result::success(20));
    /// ```
    pub fn bind<R, F>(self, projection: F) -> ResultAsync<R::Value, E>
    where
        F: FnOnce(V) -> R + Send + 'static,
        R: IntoResultAsync<Error = E>,
    {
        self.then_success(|value| projection(value).into_result_async())
    }

    /// Fails with `error` when the success value does not satisfy
    /// `predicate`. A failure passes through and `predicate` is not invoked.
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&V) -> bool + Send + 'static,
    {
        self.ensure_with(predicate, |_| error)
    }

    /// Like [`ResultAsync::ensure`], deriving the error from the rejected
    /// value.
    pub fn ensure_with<P, F>(self, predicate: P, error_factory: F) -> Self
    where
        P: FnOnce(&V) -> bool + Send + 'static,
        F: FnOnce(V) -> E + Send + 'static,
    {
        self.then_settle(|result| ResultAsync::from_result(result.ensure_with(predicate, error_factory)))
    }

    /// Like [`ResultAsync::ensure`] with an asynchronous predicate.
    pub fn ensure_async<P, Fut>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&V) -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.then_success(|value| {
            let verdict = predicate(&value);
            ResultAsync::from_future(async move {
                if verdict.await {
                    Result::Success(value)
                } else {
                    Result::Failure(error)
                }
            })
        })
    }

    /// Like [`ResultAsync::ensure_with`] with an asynchronous predicate and
    /// an asynchronous error factory. A failure passes through and neither
    /// callback is invoked.
    pub fn ensure_with_async<P, PredicateFuture, F, ErrorFuture>(
        self,
        predicate: P,
        error_factory: F,
    ) -> Self
    where
        P: FnOnce(&V) -> PredicateFuture + Send + 'static,
        PredicateFuture: Future<Output = bool> + Send + 'static,
        F: FnOnce(V) -> ErrorFuture + Send + 'static,
        ErrorFuture: Future<Output = E> + Send + 'static,
    {
        self.then_success(|value| {
            let verdict = predicate(&value);
            ResultAsync::from_future(async move {
                if verdict.await {
                    Result::Success(value)
                } else {
                    Result::Failure(error_factory(value).await)
                }
            })
        })
    }

    /// Runs a validation step for its outcome only, keeping the original
    /// success value. `validation` may be synchronous or asynchronous.
    pub fn check<R, F>(self, validation: F) -> Self
    where
        F: FnOnce(&V) -> R + Send + 'static,
        R: IntoResultAsync<Error = E>,
    {
        self.then_success(|value| {
            validation(&value)
                .into_result_async()
                .then_settle(|verdict| match verdict {
                    Result::Success(_) => ResultAsync::success(value),
                    Result::Failure(error) => ResultAsync::failure(error),
                })
        })
    }

    /// [`ResultAsync::check`] gated by `condition`.
    pub fn check_if<R, F>(self, condition: bool, validation: F) -> Self
    where
        F: FnOnce(&V) -> R + Send + 'static,
        R: IntoResultAsync<Error = E>,
    {
        if condition { self.check(validation) } else { self }
    }

    /// [`ResultAsync::check`] gated by a predicate on the success value.
    pub fn check_if_with<R, P, F>(self, predicate: P, validation: F) -> Self
    where
        P: FnOnce(&V) -> bool + Send + 'static,
        F: FnOnce(&V) -> R + Send + 'static,
        R: IntoResultAsync<Error = E>,
    {
        self.then_success(|value| {
            if predicate(&value) {
                ResultAsync::success(value).check(validation)
            } else {
                ResultAsync::success(value)
            }
        })
    }

    /// Runs a fallible `operation` on the success value, converting its
    /// error with `error_handler`.
    pub fn on_success_try<U, X, F, H>(self, operation: F, error_handler: H) -> ResultAsync<U, E>
    where
        F: FnOnce(V) -> std::result::Result<U, X> + Send + 'static,
        H: FnOnce(X) -> E + Send + 'static,
        U: Send + 'static,
    {
        self.then_settle(|result| ResultAsync::from_result(result.on_success_try(operation, error_handler)))
    }

    /// Like [`ResultAsync::on_success_try`] with an asynchronous operation.
    pub fn on_success_try_async<U, X, F, Fut, H>(
        self,
        operation: F,
        error_handler: H,
    ) -> ResultAsync<U, E>
    where
        F: FnOnce(V) -> Fut + Send + 'static,
        Fut: Future<Output = std::result::Result<U, X>> + Send + 'static,
        H: FnOnce(X) -> E + Send + 'static,
        U: Send + 'static,
    {
        self.then_success(|value| ResultAsync::try_future(operation(value), error_handler))
    }

    /// Recovers from a failure. `recovery` receives the original error and
    /// may return a [`Result`], a `ResultAsync` or any future of a
    /// `Result`. A success passes through and `recovery` is not invoked.
    pub fn compensate<R, F>(self, recovery: F) -> ResultAsync<V, R::Error>
    where
        F: FnOnce(E) -> R + Send + 'static,
        R: IntoResultAsync<Value = V>,
    {
        self.then_failure(|error| recovery(error).into_result_async())
    }

    /// Converts into a [`MaybeAsync`], discarding the error.
    pub fn to_maybe(self) -> MaybeAsync<V> {
        match self {
            Self {
                state: ResultAsyncState::Ready {
                    result: Some(result),
                },
            } => MaybeAsync::from_maybe(result.to_maybe()),
            other => MaybeAsync::from_future(async move { other.await.to_maybe() }),
        }
    }
}

// =============================================================================
// Side Effects
// =============================================================================

impl<V: Send + 'static, E: Send + 'static> ResultAsync<V, E> {
    /// Runs `action` on the success value.
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&V) + Send + 'static,
    {
        self.then_settle(|result| ResultAsync::from_result(result.tap(action)))
    }

    /// Runs an asynchronous `action` on the success value. The chain waits
    /// for the action to finish before moving on.
    pub fn tap_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&V) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.then_success(|value| {
            let effect = action(&value);
            ResultAsync::from_future(async move {
                effect.await;
                Result::Success(value)
            })
        })
    }

    /// Runs `action` on the success value when `condition` holds.
    pub fn tap_if<F>(self, condition: bool, action: F) -> Self
    where
        F: FnOnce(&V) + Send + 'static,
    {
        if condition { self.tap(action) } else { self }
    }

    /// Runs `action` on the success value when it satisfies `predicate`.
    pub fn tap_if_with<P, F>(self, predicate: P, action: F) -> Self
    where
        P: FnOnce(&V) -> bool + Send + 'static,
        F: FnOnce(&V) + Send + 'static,
    {
        self.then_settle(|result| ResultAsync::from_result(result.tap_if_with(predicate, action)))
    }

    /// Runs an asynchronous `action` on the success value when `condition`
    /// holds.
    pub fn tap_if_async<F, Fut>(self, condition: bool, action: F) -> Self
    where
        F: FnOnce(&V) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if condition { self.tap_async(action) } else { self }
    }

    /// Runs `action` regardless of the outcome.
    pub fn tap_either<F>(self, action: F) -> Self
    where
        F: FnOnce(&Result<V, E>) + Send + 'static,
    {
        self.then_settle(|result| ResultAsync::from_result(result.tap_either(action)))
    }

    /// Runs an asynchronous `action` regardless of the outcome.
    pub fn tap_either_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&Result<V, E>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.then_settle(|result| {
            let effect = action(&result);
            ResultAsync::from_future(async move {
                effect.await;
                result
            })
        })
    }

    /// Runs `action` on the error.
    pub fn tap_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        self.then_settle(|result| ResultAsync::from_result(result.tap_failure(action)))
    }

    /// Runs an asynchronous `action` on the error.
    pub fn tap_failure_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&E) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.then_failure(|error| {
            let effect = action(&error);
            ResultAsync::from_future(async move {
                effect.await;
                Result::Failure(error)
            })
        })
    }
}

// =============================================================================
// Terminal Operations
// =============================================================================

impl<V, E> ResultAsync<V, E> {
    /// Waits for the settled [`Result`]. A panic inside the chain
    /// propagates to the caller.
    pub async fn settle(self) -> Result<V, E> {
        self.await
    }

    /// Waits for the settled [`Result`], converting a panic inside the
    /// chain into a failure through `error_handler`.
    ///
    /// # Panics
    ///
    /// Steps applied to a ready result run at composition time, before this
    /// boundary exists. A panic in such a step unwinds from the call that
    /// added the step, for example `ResultAsync::success(1).map(|_| panic!())`.
    /// Only steps that run after the chain has become pending are caught.
    pub async fn settle_or_else<H>(self, error_handler: H) -> Result<V, E>
    where
        H: FnOnce(Rejection) -> E,
    {
        match AssertUnwindSafe(self).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Result::Failure(error_handler(Rejection::from_panic(payload))),
        }
    }

    /// Collapses the settled result by invoking exactly one branch.
    pub async fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        self.await.fold(on_success, on_failure)
    }

    /// Hands the settled result to `collapse`.
    pub async fn finally<R, F>(self, collapse: F) -> R
    where
        F: FnOnce(Result<V, E>) -> R,
    {
        collapse(self.await)
    }

    /// Returns `true` if the computation settles to a success.
    pub async fn is_success(self) -> bool {
        self.await.is_success()
    }

    /// Returns `true` if the computation settles to a failure.
    pub async fn is_failure(self) -> bool {
        self.await.is_failure()
    }

    /// Returns the success value, or `default`.
    pub async fn get_value_or_default(self, default: V) -> V {
        self.await.get_value_or_default(default)
    }

    /// Returns the success value, or a value derived from the error.
    pub async fn get_value_or_else<F>(self, factory: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        self.await.get_value_or_else(factory)
    }

    /// Returns the error, or `default`.
    pub async fn get_error_or_default(self, default: E) -> E {
        self.await.get_error_or_default(default)
    }

    /// Returns the error, or an error derived from the success value.
    pub async fn get_error_or_else<F>(self, factory: F) -> E
    where
        F: FnOnce(V) -> E,
    {
        self.await.get_error_or_else(factory)
    }

    /// Returns the success value, or [`ContractError::NoValue`].
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NoValue`] if the computation settles to a
    /// failure.
    pub async fn try_get_value(self) -> std::result::Result<V, ContractError> {
        self.await.try_get_value()
    }

    /// Returns the error, or [`ContractError::NoError`].
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NoError`] if the computation settles to a
    /// success.
    pub async fn try_get_error(self) -> std::result::Result<E, ContractError> {
        self.await.try_get_error()
    }

    /// Re-types a settled failure for a different success type.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ConvertSuccess`] if the computation settles
    /// to a success.
    pub async fn convert_failure<U>(self) -> std::result::Result<Result<U, E>, ContractError> {
        self.await.convert_failure()
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the computation settles to a failure.
    pub async fn get_value_or_panic(self) -> V {
        self.await.get_value_or_panic()
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics if the computation settles to a success.
    pub async fn get_error_or_panic(self) -> E {
        self.await.get_error_or_panic()
    }
}

// =============================================================================
// Memoization
// =============================================================================

impl<V, E> ResultAsync<V, E>
where
    V: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Converts into a cloneable handle whose settled result is computed
    /// once and handed to every reader.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::ResultAsync;
    ///
    /// let shared = ResultAsync::<i32, String>::from_future(async { outcomes::Result::success(1) })
    ///     .tap(|_| println!("runs once"))
    ///     .shared();
    /// let (first, second) = tokio::join!(shared.clone(), shared);
    /// assert_eq!(first, second);
    /// ```
    pub fn shared(self) -> SharedResultAsync<V, E> {
        SharedResultAsync {
            inner: self.boxed().shared(),
        }
    }
}

/// A cloneable, memoized [`ResultAsync`].
///
/// All clones observe the same settled [`Result`]; the underlying chain runs
/// at most once, no matter how many times it is awaited.
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[derive(Clone)]
pub struct SharedResultAsync<V, E> {
    inner: Shared<BoxFuture<'static, Result<V, E>>>,
}

impl<V: Clone, E: Clone> Future for SharedResultAsync<V, E> {
    type Output = Result<V, E>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(context)
    }
}

impl<V, E> SharedResultAsync<V, E>
where
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Starts a new chain from the memoized result.
    pub fn to_result_async(&self) -> ResultAsync<V, E> {
        ResultAsync::from_future(self.clone())
    }
}

impl<V, E> std::fmt::Debug for SharedResultAsync<V, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("SharedResultAsync(<future>)")
    }
}

impl<V, E> std::fmt::Debug for ResultAsync<V, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ResultAsync(<future>)")
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Conversion into a [`ResultAsync`].
///
/// Implemented by [`Result`] (ready) and by every `Send` future settling to a
/// `Result`, which includes `ResultAsync` itself. Operations that accept a
/// "synchronous or asynchronous" outcome take this trait, so the choice is
/// made by the type checker rather than by inspecting values at runtime.
pub trait IntoResultAsync {
    /// The success value type.
    type Value: Send + 'static;
    /// The failure error type.
    type Error: Send + 'static;

    /// Converts into a [`ResultAsync`].
    fn into_result_async(self) -> ResultAsync<Self::Value, Self::Error>;
}

impl<V, E> IntoResultAsync for Result<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
{
    type Value = V;
    type Error = E;

    fn into_result_async(self) -> ResultAsync<V, E> {
        ResultAsync::from_result(self)
    }
}

impl<F, V, E> IntoResultAsync for F
where
    F: Future<Output = Result<V, E>> + Send + 'static,
    V: Send + 'static,
    E: Send + 'static,
{
    type Value = V;
    type Error = E;

    fn into_result_async(self) -> ResultAsync<V, E> {
        ResultAsync::from_future(self)
    }
}

// =============================================================================
// Result -> ResultAsync Bridges
// =============================================================================

impl<V: Send + 'static, E: Send + 'static> Result<V, E> {
    /// Lifts into a ready [`ResultAsync`].
    pub const fn to_async(self) -> ResultAsync<V, E> {
        ResultAsync::from_result(self)
    }

    /// Transforms the success value with an asynchronous projection.
    pub fn map_async<U, F, Fut>(self, projection: F) -> ResultAsync<U, E>
    where
        F: FnOnce(V) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        self.to_async().map_async(projection)
    }

    /// Chains a projection returning any [`IntoResultAsync`].
    pub fn bind_async<R, F>(self, projection: F) -> ResultAsync<R::Value, E>
    where
        F: FnOnce(V) -> R + Send + 'static,
        R: IntoResultAsync<Error = E>,
    {
        self.to_async().bind(projection)
    }

    /// Runs an asynchronous `action` on the success value.
    pub fn tap_async<F, Fut>(self, action: F) -> ResultAsync<V, E>
    where
        F: FnOnce(&V) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.to_async().tap_async(action)
    }

    /// Runs an asynchronous fallible `operation` on the success value.
    pub fn on_success_try_async<U, X, F, Fut, H>(
        self,
        operation: F,
        error_handler: H,
    ) -> ResultAsync<U, E>
    where
        F: FnOnce(V) -> Fut + Send + 'static,
        Fut: Future<Output = std::result::Result<U, X>> + Send + 'static,
        H: FnOnce(X) -> E + Send + 'static,
        U: Send + 'static,
    {
        self.to_async().on_success_try_async(operation, error_handler)
    }

    /// Recovers from a failure with any [`IntoResultAsync`].
    pub fn compensate_async<R, F>(self, recovery: F) -> ResultAsync<V, R::Error>
    where
        F: FnOnce(E) -> R + Send + 'static,
        R: IntoResultAsync<Value = V>,
    {
        self.to_async().compensate(recovery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test]
    async fn ready_map_runs_at_composition_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mapped = ResultAsync::<i32, String>::success(1).map(move |value| {
            counter.fetch_add(1, Ordering::SeqCst);
            value + 1
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(mapped.await, Result::success(2));
    }

    #[rstest]
    #[tokio::test]
    async fn pending_map_runs_when_awaited() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mapped = ResultAsync::<i32, String>::from_future(async { Result::success(1) }).map(
            move |value| {
                counter.fetch_add(1, Ordering::SeqCst);
                value + 1
            },
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(mapped.await, Result::success(2));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn try_future_with_awaits_error_handler() {
        let outcome = ResultAsync::<i32, String>::try_future_with(
            async { Err::<i32, _>(7) },
            |code| async move { format!("code {code}") },
        );
        assert_eq!(outcome.await, Result::failure("code 7".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn settle_or_else_converts_panic() {
        let outcome = ResultAsync::<i32, String>::from_future(async { Result::success(1) })
            .map(|_: i32| -> i32 { panic!("exploded") })
            .settle_or_else(|rejection| rejection.to_string())
            .await;
        assert_eq!(outcome, Result::failure("panicked: exploded".to_string()));
    }
}
