//! The transform primitive an outer effect exposes to [`MaybeT`](super::MaybeT).
//!
//! An effect is a container or computation holding values it can rewrite
//! through its own native primitive: an ordered collection maps element-wise,
//! a deferred value attaches a continuation. [`MaybeT`](super::MaybeT) only
//! ever talks to an effect through [`Transform::transform`], so which
//! primitive runs is decided by the effect's type and never by a stored tag.

use std::collections::VecDeque;
use std::fmt;

use crate::typeclass::TypeConstructor;

/// The two families of effect [`MaybeT`](super::MaybeT) knows how to lift
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// An ordered collection; transforming maps every element in place.
    Collection,
    /// A single value produced later; transforming attaches a continuation.
    Deferred,
}

impl EffectKind {
    /// Returns a human-readable name for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Deferred => "deferred",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// An outer effect [`MaybeT`](super::MaybeT) can lift through.
///
/// # Examples
///
/// ```rust
/// use maybe_t::effect::{Effect, EffectKind};
///
/// assert_eq!(<Vec<Option<i32>> as Effect>::KIND, EffectKind::Collection);
/// ```
pub trait Effect: TypeConstructor + Sized {
    /// The family this effect belongs to.
    const KIND: EffectKind;
}

/// A function applied to every value held by an effect.
///
/// Every `FnMut(A) -> B` closure is a `SlotFn<A, B>`.
pub trait SlotFn<A, B> {
    /// Computes the replacement for one value.
    fn call(&mut self, value: A) -> B;
}

impl<A, B, F> SlotFn<A, B> for F
where
    F: FnMut(A) -> B,
{
    #[inline]
    fn call(&mut self, value: A) -> B {
        self(value)
    }
}

/// The transform primitive of an effect: rewrites every value it holds with
/// `F`, producing values of type `B`.
///
/// `transform` must preserve the effect's shape: collections keep their length
/// and order (no element is dropped, reordered or duplicated), deferred values
/// keep their failure path untouched.
///
/// Collections accept any function. Deferred effects run the function later,
/// when their value is produced, so they only implement `Transform` for
/// `Send + 'static` functions.
///
/// # Examples
///
/// ```rust
/// use maybe_t::effect::Transform;
///
/// let raw = vec![Some(1), None, Some(3)];
/// let flags = raw.transform(|slot: Option<i32>| slot.is_some());
/// assert_eq!(flags, vec![true, false, true]);
/// ```
pub trait Transform<B, F>: Effect {
    /// Rewrites every value held by the effect with `function`.
    fn transform(self, function: F) -> Self::WithType<B>;
}

impl<T> Effect for Vec<T> {
    const KIND: EffectKind = EffectKind::Collection;
}

impl<T, B, F> Transform<B, F> for Vec<T>
where
    F: SlotFn<T, B>,
{
    #[inline]
    fn transform(self, mut function: F) -> Vec<B> {
        self.into_iter().map(|value| function.call(value)).collect()
    }
}

impl<T> Effect for VecDeque<T> {
    const KIND: EffectKind = EffectKind::Collection;
}

impl<T, B, F> Transform<B, F> for VecDeque<T>
where
    F: SlotFn<T, B>,
{
    #[inline]
    fn transform(self, mut function: F) -> VecDeque<B> {
        self.into_iter().map(|value| function.call(value)).collect()
    }
}
