//! Deferred - a single value produced asynchronously, which may fail.
//!
//! `Deferred<T, E>` wraps a future resolving to `Result<T, E>`. It is the
//! asynchronous effect [`MaybeT`](super::MaybeT) lifts through: transforming
//! it attaches a continuation to the success path, so the computation is never
//! blocked on and a failure `E` reaches the caller unchanged.
//!
//! Scheduling belongs entirely to whoever awaits the `Deferred`; it owns no
//! runtime, timer or cancellation handle of its own.
//!
//! # Examples
//!
//! ```rust
//! use maybe_t::effect::Deferred;
//!
//! # futures::executor::block_on(async {
//! let deferred: Deferred<i32, String> = Deferred::resolved(20).then(|n| n + 1);
//! assert_eq!(deferred.await, Ok(21));
//!
//! let failed: Deferred<i32, String> = Deferred::rejected("boom".to_string());
//! assert_eq!(failed.then(|n| n + 1).await, Err("boom".to_string()));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{Effect, EffectKind, SlotFn, Transform};
use crate::typeclass::TypeConstructor;

/// A value of type `T` produced later, or a failure of type `E`.
///
/// Nothing runs until the `Deferred` is awaited.
pub struct Deferred<T, E> {
    future: BoxFuture<'static, Result<T, E>>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<T, E> Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Wraps an existing future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::effect::Deferred;
    ///
    /// let deferred: Deferred<&str, ()> = Deferred::new(async { Ok("hi") });
    /// assert_eq!(futures::executor::block_on(deferred), Ok("hi"));
    /// ```
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            future: future.boxed(),
        }
    }

    /// Creates a `Deferred` that succeeds with `value`.
    pub fn resolved(value: T) -> Self {
        Self::new(futures::future::ready(Ok(value)))
    }

    /// Creates a `Deferred` that fails with `error`.
    pub fn rejected(error: E) -> Self {
        Self::new(futures::future::ready(Err(error)))
    }

    /// Attaches a continuation run on the successful value.
    ///
    /// A failure skips `function` and is passed through as is.
    pub fn then<B, F>(self, function: F) -> Deferred<B, E>
    where
        F: FnOnce(T) -> B + Send + 'static,
        B: Send + 'static,
    {
        Deferred::new(self.future.map(move |result| result.map(function)))
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(context)
    }
}

impl<T, E> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Deferred").finish_non_exhaustive()
    }
}

// =============================================================================
// Effect Implementation
// =============================================================================

impl<T, E> TypeConstructor for Deferred<T, E> {
    type Inner = T;
    type WithType<B> = Deferred<B, E>;
}

impl<T, E> Effect for Deferred<T, E> {
    const KIND: EffectKind = EffectKind::Deferred;
}

impl<T, E, B, F> Transform<B, F> for Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    B: Send + 'static,
    F: SlotFn<T, B> + Send + 'static,
{
    #[inline]
    fn transform(self, mut function: F) -> Deferred<B, E> {
        self.then(move |value| function.call(value))
    }
}

static_assertions::assert_impl_all!(Deferred<i32, String>: Send, Unpin);
