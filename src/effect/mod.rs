//! Lifting `Maybe` semantics through outer effects.
//!
//! This module provides [`MaybeT`], a transformer over any [`Effect`] whose
//! values may be absent, and the effects it knows how to lift through:
//!
//! - Ordered collections: `Vec<Option<A>>`, `VecDeque<Option<A>>`
//! - [`Deferred`] (feature `async`): a single value produced asynchronously
//!
//! # Examples
//!
//! ```rust
//! use maybe_t::effect::lift_effect;
//! use maybe_t::Matcher;
//!
//! let raw = vec![Some("1"), Some("2"), None, Some("4")];
//! let parsed = lift_effect(raw)
//!     .case_of(
//!         Matcher::new()
//!             .some(|text: &str| text.parse::<i32>().ok())
//!             .none(|| Some(0)),
//!     )
//!     .as_nullable();
//! assert_eq!(parsed, vec![Some(1), Some(2), Some(0), Some(4)]);
//! ```

mod capability;
mod error;
mod maybe_transformer;

#[cfg(feature = "async")]
mod deferred;

pub use capability::{Effect, EffectKind, SlotFn, Transform};
pub use error::WrongEffectKindError;
pub use maybe_transformer::{CaseOfSlot, MapSlot, MaybeT, OrElseSlot, OrElseWithSlot, lift_effect};

#[cfg(feature = "async")]
pub use deferred::Deferred;
