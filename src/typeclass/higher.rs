//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types: a trait cannot abstract
//! over `Maybe<_>` or `Vec<_>` as type constructors. This module works around
//! that with a Generic Associated Type, which lets the type classes in this
//! crate and the [`Effect`](crate::effect::Effect) trait describe "the same
//! container, holding something else".
//!
//! # Example
//!
//! ```rust
//! use maybe_t::typeclass::TypeConstructor;
//! use maybe_t::Maybe;
//!
//! fn absent_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Maybe<String> = absent_like(Maybe::Some(42));
//! assert!(absent.is_absent());
//! ```

use std::collections::VecDeque;

use crate::maybe::Maybe;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// should be `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result a valid
    /// type constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for VecDeque<T> {
    type Inner = T;
    type WithType<B> = VecDeque<B>;
}
