//! `MaybeAsync` - a pending computation that settles to a [`Maybe`].
//!
//! `MaybeAsync<T>` mirrors [`Maybe`] over pending computations: steps that
//! act on a value are skipped once the computation settles to `None`, and
//! fallbacks are only consulted when it does.
//!
//! Like [`ResultAsync`](crate::ResultAsync), a `MaybeAsync` built from a known
//! `Maybe` applies synchronous steps immediately and only defers work once an
//! asynchronous step is involved.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};
use pin_project_lite::pin_project;

use super::Maybe;
use crate::result::ResultAsync;

pin_project! {
    /// A pending computation that settles to a [`Maybe`].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::{Maybe, MaybeAsync};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let name = MaybeAsync::from_option_future(async { Some(" ada ") })
    ///         .map(str::trim)
    ///         .or("anonymous")
    ///         .await;
    ///     assert_eq!(name, Maybe::some("ada"));
    /// }
    /// ```
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct MaybeAsync<T> {
        #[pin]
        state: MaybeAsyncState<T>,
    }
}

pin_project! {
    #[project = MaybeAsyncStateProj]
    enum MaybeAsyncState<T> {
        Ready {
            maybe: Option<Maybe<T>>,
        },
        Pending {
            #[pin]
            future: BoxFuture<'static, Maybe<T>>,
        },
        Settled,
    }
}

static_assertions::assert_impl_all!(MaybeAsync<i32>: Send, Unpin);

impl<T> Future for MaybeAsync<T> {
    type Output = Maybe<T>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        let output = match this.state.as_mut().project() {
            MaybeAsyncStateProj::Ready { maybe } => maybe
                .take()
                .expect("MaybeAsync internal error: ready value was already taken"),
            MaybeAsyncStateProj::Pending { future } => match future.poll(context) {
                Poll::Ready(maybe) => maybe,
                Poll::Pending => return Poll::Pending,
            },
            MaybeAsyncStateProj::Settled => panic!("MaybeAsync polled after completion"),
        };

        this.state.set(MaybeAsyncState::Settled);
        Poll::Ready(output)
    }
}

impl<T> std::fmt::Debug for MaybeAsync<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("MaybeAsync(<future>)")
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T> MaybeAsync<T> {
    /// Wraps an already-known [`Maybe`].
    #[inline]
    pub const fn from_maybe(maybe: Maybe<T>) -> Self {
        Self {
            state: MaybeAsyncState::Ready { maybe: Some(maybe) },
        }
    }

    /// Creates a ready container holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::from_maybe(Maybe::Some(value))
    }

    /// Creates a ready empty container.
    #[inline]
    pub const fn none() -> Self {
        Self::from_maybe(Maybe::None)
    }
}

impl<T> From<Maybe<T>> for MaybeAsync<T> {
    fn from(maybe: Maybe<T>) -> Self {
        Self::from_maybe(maybe)
    }
}

impl<T: Send + 'static> MaybeAsync<T> {
    /// Wraps a future settling to a [`Maybe`].
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Maybe<T>> + Send + 'static,
    {
        Self {
            state: MaybeAsyncState::Pending {
                future: future.boxed(),
            },
        }
    }

    /// Wraps a future settling to an `Option`.
    pub fn from_option_future<F>(future: F) -> Self
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        Self::from_future(future.map(Maybe::from_option))
    }

    fn then_settle<U, F>(self, continuation: F) -> MaybeAsync<U>
    where
        F: FnOnce(Maybe<T>) -> MaybeAsync<U> + Send + 'static,
        U: Send + 'static,
    {
        match self {
            Self {
                state: MaybeAsyncState::Ready { maybe: Some(maybe) },
            } => continuation(maybe),
            other => MaybeAsync::from_future(async move {
                let settled = other.await;
                continuation(settled).await
            }),
        }
    }

    fn then_some<U, F>(self, continuation: F) -> MaybeAsync<U>
    where
        F: FnOnce(T) -> MaybeAsync<U> + Send + 'static,
        U: Send + 'static,
    {
        self.then_settle(|maybe| match maybe {
            Maybe::Some(value) => continuation(value),
            Maybe::None => MaybeAsync::none(),
        })
    }
}

// =============================================================================
// Transformations
// =============================================================================

impl<T: Send + 'static> MaybeAsync<T> {
    /// Transforms the value.
    pub fn map<U, F>(self, projection: F) -> MaybeAsync<U>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        self.then_some(|value| MaybeAsync::some(projection(value)))
    }

    /// Transforms the value with an asynchronous projection.
    pub fn map_async<U, F, Fut>(self, projection: F) -> MaybeAsync<U>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        self.then_some(|value| MaybeAsync::from_future(projection(value).map(Maybe::Some)))
    }

    /// Chains a projection returning a [`Maybe`], a `MaybeAsync` or any
    /// future of a `Maybe`.
    pub fn bind<R, F>(self, projection: F) -> MaybeAsync<R::Value>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: IntoMaybeAsync,
    {
        self.then_some(|value| projection(value).into_maybe_async())
    }

    /// Runs `action` on the value.
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        self.then_settle(|maybe| MaybeAsync::from_maybe(maybe.tap(action)))
    }

    /// Runs an asynchronous `action` on the value, waiting for it to finish.
    pub fn tap_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.then_some(|value| {
            let effect = action(&value);
            MaybeAsync::from_future(async move {
                effect.await;
                Maybe::Some(value)
            })
        })
    }

    /// Runs `action` when the computation settles empty.
    pub fn tap_none<F>(self, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.then_settle(|maybe| MaybeAsync::from_maybe(maybe.tap_none(action)))
    }

    /// Falls back to `fallback` when empty.
    pub fn or(self, fallback: T) -> Self {
        self.then_settle(|maybe| MaybeAsync::from_maybe(maybe.or(fallback)))
    }

    /// Falls back to `factory()` when empty. `factory` is only invoked for
    /// an empty outcome.
    pub fn or_else<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        self.then_settle(|maybe| MaybeAsync::from_maybe(maybe.or_else(factory)))
    }

    /// Falls back to another [`Maybe`] when empty.
    pub fn or_maybe(self, fallback: Maybe<T>) -> Self {
        self.then_settle(|maybe| MaybeAsync::from_maybe(maybe.or_maybe(fallback)))
    }

    /// Falls back to the outcome of `factory` when empty. `factory` may
    /// return a [`Maybe`], a `MaybeAsync` or any future of a `Maybe`.
    pub fn or_async<R, F>(self, factory: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
        R: IntoMaybeAsync<Value = T>,
    {
        self.then_settle(|maybe| match maybe {
            Maybe::Some(value) => MaybeAsync::some(value),
            Maybe::None => factory().into_maybe_async(),
        })
    }

    /// Converts into a [`ResultAsync`], failing with `error` when empty.
    pub fn to_result<E>(self, error: E) -> ResultAsync<T, E>
    where
        E: Send + 'static,
    {
        self.to_result_with(|| error)
    }

    /// Converts into a [`ResultAsync`], failing with `error_factory()` when
    /// empty.
    pub fn to_result_with<E, F>(self, error_factory: F) -> ResultAsync<T, E>
    where
        E: Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        match self {
            Self {
                state: MaybeAsyncState::Ready { maybe: Some(maybe) },
            } => ResultAsync::from_result(maybe.to_result_with(error_factory)),
            other => ResultAsync::from_future(async move {
                let settled: Maybe<T> = other.await;
                settled.to_result_with(error_factory)
            }),
        }
    }
}

// =============================================================================
// Terminal Operations
// =============================================================================

impl<T> MaybeAsync<T> {
    /// Waits for the settled [`Maybe`].
    pub async fn settle(self) -> Maybe<T> {
        self.await
    }

    /// Collapses the settled container by invoking exactly one branch.
    pub async fn fold<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        self.await.fold(on_some, on_none)
    }

    /// Returns `true` if the computation settles with a value.
    pub async fn has_value(self) -> bool {
        self.await.has_value()
    }

    /// Returns `true` if the computation settles empty.
    pub async fn has_no_value(self) -> bool {
        self.await.has_no_value()
    }

    /// Returns the value, or `default`.
    pub async fn get_value_or_default(self, default: T) -> T {
        self.await.get_value_or_default(default)
    }

    /// Returns the value, or `factory()`.
    pub async fn get_value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.get_value_or_else(factory)
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics if the computation settles empty.
    pub async fn get_value_or_panic(self) -> T {
        self.await.get_value_or_panic()
    }
}

// =============================================================================
// Memoization
// =============================================================================

impl<T: Clone + Send + 'static> MaybeAsync<T> {
    /// Converts into a cloneable handle whose settled value is computed once.
    pub fn shared(self) -> SharedMaybeAsync<T> {
        SharedMaybeAsync {
            inner: self.boxed().shared(),
        }
    }
}

/// A cloneable, memoized [`MaybeAsync`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[derive(Clone)]
pub struct SharedMaybeAsync<T> {
    inner: Shared<BoxFuture<'static, Maybe<T>>>,
}

impl<T: Clone> Future for SharedMaybeAsync<T> {
    type Output = Maybe<T>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(context)
    }
}

impl<T: Clone + Send + Sync + 'static> SharedMaybeAsync<T> {
    /// Starts a new chain from the memoized value.
    pub fn to_maybe_async(&self) -> MaybeAsync<T> {
        MaybeAsync::from_future(self.clone())
    }
}

impl<T> std::fmt::Debug for SharedMaybeAsync<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("SharedMaybeAsync(<future>)")
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Conversion into a [`MaybeAsync`].
///
/// Implemented by [`Maybe`] and by every `Send` future settling to a `Maybe`,
/// including `MaybeAsync` itself.
pub trait IntoMaybeAsync {
    /// The value type.
    type Value: Send + 'static;

    /// Converts into a [`MaybeAsync`].
    fn into_maybe_async(self) -> MaybeAsync<Self::Value>;
}

impl<T: Send + 'static> IntoMaybeAsync for Maybe<T> {
    type Value = T;

    fn into_maybe_async(self) -> MaybeAsync<T> {
        MaybeAsync::from_maybe(self)
    }
}

impl<F, T> IntoMaybeAsync for F
where
    F: Future<Output = Maybe<T>> + Send + 'static,
    T: Send + 'static,
{
    type Value = T;

    fn into_maybe_async(self) -> MaybeAsync<T> {
        MaybeAsync::from_future(self)
    }
}

// =============================================================================
// Maybe -> MaybeAsync Bridges
// =============================================================================

impl<T: Send + 'static> Maybe<T> {
    /// Lifts into a ready [`MaybeAsync`].
    pub const fn to_async(self) -> MaybeAsync<T> {
        MaybeAsync::from_maybe(self)
    }

    /// Transforms the value with an asynchronous projection.
    pub fn map_async<U, F, Fut>(self, projection: F) -> MaybeAsync<U>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        self.to_async().map_async(projection)
    }

    /// Chains a projection returning any [`IntoMaybeAsync`].
    pub fn bind_async<R, F>(self, projection: F) -> MaybeAsync<R::Value>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: IntoMaybeAsync,
    {
        self.to_async().bind(projection)
    }
}
