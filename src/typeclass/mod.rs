//! Type class traits for interoperating with generic functional code.
//!
//! [`Maybe`](crate::Maybe) already carries its own combinators; the traits in
//! this module expose it to code written against the usual algebraic
//! structures instead:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! They forward to the same semantics as the inherent combinators and add
//! nothing of their own.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to emulate them. The
//! transformer's [`Effect`](crate::effect::Effect) trait builds on it too.
//!
//! # Examples
//!
//! ```rust
//! use maybe_t::typeclass::{Applicative, Functor, Monad};
//! use maybe_t::{some, Maybe};
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(20);
//! let result = lifted
//!     .fmap(|n| n + 1)
//!     .and_then(|n| some(n * 2));
//! assert_eq!(result, some(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
