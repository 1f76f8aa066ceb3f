//! Applicative type class - applying functions within containers.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v) == v                               // Identity
//! pure(f).apply(pure(x)) == pure(f(x))                 // Homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)          // Interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_t::typeclass::Applicative;
//! use maybe_t::{none, some, Maybe};
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, some(42));
//!
//! let sum = some(3).map2(some(4), |x, y| x + y);
//! assert_eq!(sum, some(7));
//!
//! let missing = some(3).map2(none::<i32>(), |x, y| x + y);
//! assert!(missing.is_absent());
//! ```

use super::Functor;
use crate::maybe::Maybe;

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two applicative values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a wrapped function to a wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::typeclass::Applicative;
    /// use maybe_t::some;
    ///
    /// let function = some(|x: i32| x + 1);
    /// assert_eq!(function.apply(some(5)), some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            (Self::Some(_), Maybe::None) | (Self::None, Maybe::Some(_) | Maybe::None) => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
