//! `MaybeT` - Maybe Transformer.
//!
//! `MaybeT` lifts [`Maybe`] semantics through an outer effect whose values may
//! be absent, so those values can be manipulated without unwrapping the
//! effect first.
//!
//! # Overview
//!
//! `MaybeT<M>` wraps `M<Option<A>>`, where `M` is an [`Effect`] such as
//! `Vec` or [`Deferred`](super::Deferred). Every combinator forwards to the
//! effect's own [`Transform`] primitive: each slot is classified into a `Maybe`,
//! the corresponding `Maybe` combinator is applied, and the result is turned
//! back into a raw `Option`. The wrapped effect is never modified in place.
//!
//! For collections this happens element-wise: order and length are preserved
//! and absent slots stay where they were. For deferred values it happens in a
//! continuation, and a failure propagates to whoever awaits the result
//! unchanged.
//!
//! # Examples
//!
//! With a collection:
//!
//! ```rust
//! use maybe_t::effect::lift_effect;
//!
//! let lifted = lift_effect(vec![Some(1), Some(2), None, Some(5)]);
//! let incremented = lifted.map(|n| Some(n + 1)).as_nullable();
//! assert_eq!(incremented, vec![Some(2), Some(3), None, Some(6)]);
//! ```
//!
//! With a deferred value:
//!
//! ```rust
//! # #[cfg(feature = "async")]
//! # {
//! use maybe_t::effect::{lift_effect, Deferred};
//!
//! # futures::executor::block_on(async {
//! let deferred: Deferred<Option<i32>, String> = Deferred::resolved(Some(5));
//! let result = lift_effect(deferred).map(|n| Some(n + 1)).as_nullable().await;
//! assert_eq!(result, Ok(Some(6)));
//! # });
//! # }
//! ```

use std::any::{Any, type_name};
use std::fmt;

use super::{Effect, EffectKind, SlotFn, Transform, WrongEffectKindError};
use crate::maybe::{Matcher, NoneArm, SomeArm, maybe_of};

/// A monad transformer that adds optionality to the values of an effect.
///
/// # Type Parameters
///
/// - `M`: The wrapped effect, holding `Option<A>` values (e.g.
///   `Vec<Option<A>>`, `Deferred<Option<A>, E>`)
pub struct MaybeT<M> {
    /// The wrapped effect.
    inner: M,
}

/// Wraps `effect` in a [`MaybeT`].
///
/// # Examples
///
/// ```rust
/// use maybe_t::effect::lift_effect;
///
/// let raw = vec![Some(1), Some(2), None, None, Some(5)];
/// assert_eq!(lift_effect(raw.clone()).as_nullable(), raw);
/// ```
#[inline]
pub const fn lift_effect<M>(effect: M) -> MaybeT<M>
where
    M: Effect,
{
    MaybeT::new(effect)
}

impl<M> MaybeT<M> {
    /// Creates a new `MaybeT` from an effect.
    #[inline]
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Returns the wrapped effect unmodified.
    ///
    /// This is how the transformer is run: a collection comes back as is, a
    /// deferred value can then be awaited.
    #[inline]
    pub fn as_nullable(self) -> M {
        self.inner
    }

    /// Returns the wrapped effect as `K`.
    ///
    /// # Errors
    ///
    /// Returns [`WrongEffectKindError`] naming `K` if the wrapped effect is
    /// not of type `K`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::effect::lift_effect;
    /// use std::collections::VecDeque;
    ///
    /// let lifted = lift_effect(vec![Some("1"), Some("2"), None, Some("4")])
    ///     .map(|text| text.parse::<i32>().ok())
    ///     .map(|n| Some(n + 1));
    /// let narrowed = lifted.as_type::<Vec<Option<i32>>>();
    /// assert_eq!(narrowed, Ok(vec![Some(2), Some(3), None, Some(5)]));
    ///
    /// let wrong = lift_effect(vec![Some("hi")]).as_type::<VecDeque<Option<&str>>>();
    /// assert!(wrong.is_err());
    /// ```
    pub fn as_type<K>(self) -> Result<K, WrongEffectKindError>
    where
        M: 'static,
        K: 'static,
    {
        let boxed: Box<dyn Any> = Box::new(self.inner);
        boxed
            .downcast::<K>()
            .map(|effect| *effect)
            .map_err(|_| WrongEffectKindError {
                expected: type_name::<K>(),
                found: type_name::<M>(),
            })
    }
}

impl<M> MaybeT<M>
where
    M: Effect,
{
    /// Returns the family of the wrapped effect.
    #[inline]
    pub const fn kind(&self) -> EffectKind {
        M::KIND
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<M, A> MaybeT<M>
where
    M: Effect<Inner = Option<A>>,
{
    /// Applies `function` to every present value inside the effect.
    ///
    /// Absent values pass through without invoking `function`. A `None`
    /// returned by `function` leaves an absent value in that slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::effect::lift_effect;
    ///
    /// let doubled = lift_effect(vec![Some(1), None, Some(1)]).map(|n| Some(n * 2));
    /// assert_eq!(doubled.as_nullable(), vec![Some(2), None, Some(2)]);
    ///
    /// let filtered = lift_effect(vec![Some(1), Some(2)]).map(|n| (n > 1).then_some(n));
    /// assert_eq!(filtered.as_nullable(), vec![None, Some(2)]);
    /// ```
    pub fn map<U, F>(self, function: F) -> MaybeT<M::WithType<Option<U>>>
    where
        F: FnMut(A) -> Option<U>,
        M: Transform<Option<U>, MapSlot<F>>,
    {
        MaybeT::new(self.inner.transform(MapSlot(function)))
    }

    /// Pattern matches every value inside the effect.
    ///
    /// The matcher is cloned for each slot, so both arms must be `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::effect::lift_effect;
    /// use maybe_t::Matcher;
    ///
    /// let matched = lift_effect(vec![Some("1"), Some("2"), None, Some("4")]).case_of(
    ///     Matcher::new()
    ///         .some(|text: &str| text.parse::<i32>().ok())
    ///         .none(|| Some(3)),
    /// );
    /// assert_eq!(matched.as_nullable(), vec![Some(1), Some(2), Some(3), Some(4)]);
    /// ```
    pub fn case_of<R, S, N>(self, matcher: Matcher<S, N>) -> MaybeT<M::WithType<Option<R>>>
    where
        S: SomeArm<A, R> + Clone,
        N: NoneArm<R> + Clone,
        M: Transform<Option<R>, CaseOfSlot<S, N>>,
    {
        MaybeT::new(self.inner.transform(CaseOfSlot(matcher)))
    }

    /// Replaces every absent value inside the effect with `fallback`.
    ///
    /// The result is the bare effect, no longer wrapped in a transformer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::effect::lift_effect;
    ///
    /// assert_eq!(lift_effect(vec![Some(1), Some(2), None, Some(4)]).or_else(3), vec![1, 2, 3, 4]);
    /// ```
    pub fn or_else(self, fallback: A) -> M::WithType<A>
    where
        A: Clone,
        M: Transform<A, OrElseSlot<A>>,
    {
        self.inner.transform(OrElseSlot(fallback))
    }

    /// Replaces every absent value inside the effect with the result of
    /// calling `fallback`.
    ///
    /// `fallback` is invoked once per absent value and never for present ones.
    pub fn or_else_with<F>(self, fallback: F) -> M::WithType<A>
    where
        F: FnMut() -> A,
        M: Transform<A, OrElseWithSlot<F>>,
    {
        self.inner.transform(OrElseWithSlot(fallback))
    }
}

// =============================================================================
// Slot Functions
// =============================================================================

/// The per-slot function behind [`MaybeT::map`].
pub struct MapSlot<F>(F);

impl<A, U, F> SlotFn<Option<A>, Option<U>> for MapSlot<F>
where
    F: FnMut(A) -> Option<U>,
{
    #[inline]
    fn call(&mut self, slot: Option<A>) -> Option<U> {
        maybe_of(slot).map(&mut self.0).as_nullable()
    }
}

/// The per-slot function behind [`MaybeT::case_of`].
pub struct CaseOfSlot<S, N>(Matcher<S, N>);

impl<A, R, S, N> SlotFn<Option<A>, Option<R>> for CaseOfSlot<S, N>
where
    S: SomeArm<A, R> + Clone,
    N: NoneArm<R> + Clone,
{
    #[inline]
    fn call(&mut self, slot: Option<A>) -> Option<R> {
        maybe_of(slot).case_of(self.0.clone()).as_nullable()
    }
}

/// The per-slot function behind [`MaybeT::or_else`].
pub struct OrElseSlot<A>(A);

impl<A> SlotFn<Option<A>, A> for OrElseSlot<A>
where
    A: Clone,
{
    #[inline]
    fn call(&mut self, slot: Option<A>) -> A {
        maybe_of(slot).or_else(self.0.clone())
    }
}

/// The per-slot function behind [`MaybeT::or_else_with`].
pub struct OrElseWithSlot<F>(F);

impl<A, F> SlotFn<Option<A>, A> for OrElseWithSlot<F>
where
    F: FnMut() -> A,
{
    #[inline]
    fn call(&mut self, slot: Option<A>) -> A {
        maybe_of(slot).or_else_with(&mut self.0)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<M> Clone for MaybeT<M>
where
    M: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<M> fmt::Debug for MaybeT<M>
where
    M: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("MaybeT").field(&self.inner).finish()
    }
}
