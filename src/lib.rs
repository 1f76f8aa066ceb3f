//! # maybe-t
//!
//! An optional-value container with fluent combinators, and a transformer that
//! lifts it through collections and deferred computations.
//!
//! ## Overview
//!
//! - **Maybe**: [`Maybe<T>`] is either `Some(value)` or `None`. Combinators
//!   transform, chain, default and compare such values without manual checks.
//!   Raw `Option<T>` values are classified with [`maybe_of`].
//! - **Type Classes**: `Functor`, `Applicative` and `Monad` implementations for
//!   generic functional code.
//! - **Transformer**: [`MaybeT`](effect::MaybeT) applies the same combinators
//!   to the possibly-absent values inside an outer effect such as a `Vec` or a
//!   [`Deferred`](effect::Deferred) computation.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `effect`: The `MaybeT` transformer over collections
//! - `async`: The `Deferred` effect
//! - `serde`: Serialization of `Maybe` as an optional value
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_t::prelude::*;
//!
//! let greeting = some("hi ")
//!     .join(|left, right| Some(format!("{left}{right}")), some("there"))
//!     .or_else_with(|| "nobody here".to_string());
//! assert_eq!(greeting, "hi there");
//!
//! let defaults = lift_effect(vec![Some(1), None]).or_else(0);
//! assert_eq!(defaults, vec![1, 0]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybe_t::prelude::*;
/// ```
pub mod prelude {
    pub use crate::maybe::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;

pub use maybe::{
    DEFAULT_MISSING_MESSAGE, Fallback, Identical, Matcher, Maybe, MissingValueError, NoneArm,
    SomeArm, Unmatched, maybe_of, none, some,
};
