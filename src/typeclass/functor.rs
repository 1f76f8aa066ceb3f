//! Functor type class - mapping over container values.
//!
//! `Functor::fmap` is the plain structure-preserving map. On [`Maybe`] it
//! differs from the inherent [`Maybe::map`]: the function's result is always
//! present and is not classified again.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_t::typeclass::Functor;
//! use maybe_t::{none, some, Maybe};
//!
//! let x: Maybe<i32> = some(5);
//! let y: Maybe<String> = x.fmap(|n| n.to_string());
//! assert_eq!(y, some("5".to_string()));
//!
//! let absent: Maybe<i32> = none();
//! assert_eq!(absent.fmap(|n| n + 1), none());
//! ```

use super::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can be mapped over.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value(s)
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::typeclass::Functor;
    /// use maybe_t::some;
    ///
    /// let x = some("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), some(5));
    /// // x is still available here
    /// assert!(!x.is_absent());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}
