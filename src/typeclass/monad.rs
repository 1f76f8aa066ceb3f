//! Monad type class - sequencing computations with dependency.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                  // Left Identity
//! m.flat_map(pure) == m                                        // Right Identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // Associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_t::typeclass::Monad;
//! use maybe_t::{none, some};
//!
//! let chained = some(5).and_then(|n| if n > 1 { some(n * 2) } else { none() });
//! assert_eq!(chained, some(10));
//! ```

use super::Applicative;
use crate::maybe::Maybe;

/// A type class for applicatives whose computations may depend on earlier
/// results.
pub trait Monad: Applicative {
    /// Applies a function returning a new monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`, following `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }
}
