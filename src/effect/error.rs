//! Error types for the effect transformer.
//!
//! This module provides the error raised when a caller asserts that a
//! [`MaybeT`](super::MaybeT) wraps a different effect than it actually does.

/// Represents a failed assertion about the effect wrapped by a transformer.
///
/// # Examples
///
/// ```rust
/// use maybe_t::effect::WrongEffectKindError;
///
/// let error = WrongEffectKindError {
///     expected: "Deferred<Option<String>, String>",
///     found: "Vec<Option<String>>",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "Expected value to be instance of effect Deferred<Option<String>, String>, found Vec<Option<String>>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongEffectKindError {
    /// The name of the effect type the caller asserted.
    pub expected: &'static str,
    /// The name of the effect type actually wrapped.
    pub found: &'static str,
}

impl std::fmt::Display for WrongEffectKindError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Expected value to be instance of effect {}, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for WrongEffectKindError {}
