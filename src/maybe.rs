//! Maybe type - a value that is either present or absent.
//!
//! This module provides the `Maybe<T>` type, which represents either a present
//! value (`Some`) or its absence (`None`), together with a fluent set of
//! combinators for transforming, chaining, defaulting and comparing such values
//! without manual checks.
//!
//! The host's native nullable representation is `Option<T>`. Converting a raw
//! `Option<T>` into a `Maybe<T>` is called *classification* and always goes
//! through [`maybe_of`], which is also used by every combinator whose handler
//! may produce an absent value ([`Maybe::map`], [`Maybe::case_of`],
//! [`Maybe::join`]).
//!
//! # Examples
//!
//! ```rust
//! use maybe_t::{maybe_of, none, some, Maybe};
//!
//! let present = some(5);
//! let doubled = present.map(|value| Some(value * 2));
//! assert_eq!(doubled.expect(), Ok(10));
//!
//! // A handler returning an absent value collapses to None
//! let collapsed = some(5).map(|_| None::<i32>);
//! assert!(collapsed.is_absent());
//!
//! // Classification of a raw nullable value
//! let raw: Option<&str> = None;
//! assert!(maybe_of(raw).is_absent());
//!
//! // Defaulting
//! assert_eq!(none::<i32>().or_else(7), 7);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Message carried by a [`MissingValueError`] when the caller supplies none.
pub const DEFAULT_MISSING_MESSAGE: &str = "Expected Maybe to contain non-null value";

/// A value that is either present (`Some`) or absent (`None`).
///
/// A `Maybe` never changes variant after construction: every combinator
/// consumes the instance and builds a new one.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use maybe_t::Maybe;
///
/// let present: Maybe<i32> = Maybe::Some(42);
/// let absent: Maybe<i32> = Maybe::None;
///
/// assert!(!present.is_absent());
/// assert!(absent.is_absent());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// Holds exactly one present value.
    Some(T),
    /// Holds no value.
    None,
}

// =============================================================================
// Constructors
// =============================================================================

/// Creates a `Maybe` holding `value`.
///
/// # Examples
///
/// ```rust
/// use maybe_t::some;
///
/// assert_eq!(some("merp").as_nullable(), Some("merp"));
/// ```
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// Creates an absent `Maybe`.
///
/// # Examples
///
/// ```rust
/// use maybe_t::none;
///
/// assert!(none::<String>().is_absent());
/// ```
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::None
}

/// Classifies a raw nullable value.
///
/// Returns `Some(value)` when the raw value is present and `None` otherwise.
/// This is the only place that decides what counts as absent.
///
/// # Examples
///
/// ```rust
/// use maybe_t::maybe_of;
///
/// assert!(!maybe_of(Some(0)).is_absent());
/// assert!(!maybe_of(Some("")).is_absent());
/// assert!(maybe_of(None::<i32>).is_absent());
/// ```
#[inline]
pub fn maybe_of<T>(raw: Option<T>) -> Maybe<T> {
    match raw {
        Some(value) => Maybe::Some(value),
        None => Maybe::None,
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(raw: Option<T>) -> Self {
        maybe_of(raw)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.as_nullable()
    }
}

impl<T> Maybe<T> {
    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some};
    ///
    /// assert!(none::<i32>().is_absent());
    /// assert!(!some(0).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns an iterator over the contained value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().as_nullable().into_iter()
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value, or a [`MissingValueError`] carrying the
    /// default message.
    ///
    /// # Errors
    ///
    /// Returns [`MissingValueError`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some, MissingValueError};
    ///
    /// assert_eq!(some("hey").expect(), Ok("hey"));
    /// assert_eq!(none::<i32>().expect(), Err(MissingValueError::default()));
    /// ```
    #[inline]
    pub fn expect(self) -> Result<T, MissingValueError> {
        self.expect_or(MissingValueError::default())
    }

    /// Returns the contained value, or a [`MissingValueError`] carrying
    /// `message`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingValueError`] with the given message if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::none;
    ///
    /// let error = none::<i32>().expect_with("oops....").unwrap_err();
    /// assert_eq!(error.to_string(), "oops....");
    /// ```
    #[inline]
    pub fn expect_with<M>(self, message: M) -> Result<T, MissingValueError>
    where
        M: Into<Cow<'static, str>>,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(MissingValueError::new(message)),
        }
    }

    /// Returns the contained value, or `error` unchanged.
    ///
    /// The supplied error is propagated verbatim; it is never wrapped in a
    /// [`MissingValueError`].
    ///
    /// # Errors
    ///
    /// Returns `error` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::none;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct UhOh;
    ///
    /// assert_eq!(none::<i32>().expect_or(UhOh), Err(UhOh));
    /// ```
    #[inline]
    pub fn expect_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error),
        }
    }

    /// Returns the contained value, or `fallback` if this is `None`.
    ///
    /// `fallback` is always taken literally, even when it is itself callable.
    /// Use [`Maybe::or_else_with`] to compute the fallback lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some};
    ///
    /// assert_eq!(some("hey there").or_else("other value"), "hey there");
    /// assert_eq!(none().or_else("hi"), "hi");
    /// ```
    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the contained value, or the result of calling `fallback`.
    ///
    /// `fallback` takes no arguments and is only invoked if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some};
    ///
    /// assert_eq!(none().or_else_with(|| "hi"), "hi");
    /// assert_eq!(some(1).or_else_with(|| unreachable!()), 1);
    /// ```
    #[inline]
    pub fn or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    /// Converts back to the host's nullable representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some};
    ///
    /// assert_eq!(some(3).as_nullable(), Some(3));
    /// assert_eq!(none::<i32>().as_nullable(), None);
    /// ```
    #[inline]
    pub fn as_nullable(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Pattern matches on the variant and classifies the handler's result.
    ///
    /// Exactly one arm of `matcher` is invoked. An omitted arm passes the
    /// instance through unchanged: an omitted `some` arm keeps the contained
    /// value, an omitted `none` arm keeps the absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some, Matcher};
    ///
    /// let matched = some("2").case_of(
    ///     Matcher::new()
    ///         .some(|value: &str| value.parse::<i32>().ok())
    ///         .none(|| Some(3)),
    /// );
    /// assert_eq!(matched.as_nullable(), Some(2));
    ///
    /// let defaulted = none::<i32>().case_of(Matcher::new().none(|| Some(3)));
    /// assert_eq!(defaulted.as_nullable(), Some(3));
    /// ```
    #[inline]
    pub fn case_of<R, S, N>(self, matcher: Matcher<S, N>) -> Maybe<R>
    where
        S: SomeArm<T, R>,
        N: NoneArm<R>,
    {
        match self {
            Self::Some(value) => matcher.some.invoke(value),
            Self::None => matcher.none.invoke(),
        }
    }

    /// Applies `function` to the contained value and classifies its result.
    ///
    /// `function` is never invoked on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some};
    ///
    /// assert_eq!(some(2).map(|value| Some(value + 1)).as_nullable(), Some(3));
    /// assert!(some(2).map(|_| None::<i32>).is_absent());
    /// assert!(none::<i32>().map(|_| -> Option<i32> { unreachable!() }).is_absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => maybe_of(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Invokes `function` on the contained value for its side effect only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::some;
    ///
    /// let mut seen = Vec::new();
    /// let same = some(1).tap(|value| seen.push(*value)).tap(|value| seen.push(*value));
    /// assert_eq!(same.as_nullable(), Some(1));
    /// assert_eq!(seen, vec![1, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Applies `function` to the contained value and returns its result
    /// directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some};
    ///
    /// assert_eq!(some(2).flat_map(|value| some(value * 10)).as_nullable(), Some(20));
    /// assert!(some(2).flat_map(|_| none::<i32>()).is_absent());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns `self` if present, otherwise the fallback.
    ///
    /// The fallback is either a `Maybe<T>` or a zero-argument callable that
    /// produces one; the callable is only invoked if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some};
    ///
    /// assert_eq!(some("merp").or(some("other value")).as_nullable(), Some("merp"));
    /// assert_eq!(none().or(some("merp")).as_nullable(), Some("merp"));
    /// assert_eq!(none().or(|| some("merp")).as_nullable(), Some("merp"));
    /// ```
    #[inline]
    #[must_use]
    pub fn or<A>(self, fallback: A) -> Self
    where
        A: Fallback<T>,
    {
        match self {
            Self::Some(_) => self,
            Self::None => fallback.into_maybe(),
        }
    }

    /// Combines two present values with `function` and classifies the result.
    ///
    /// `function` is only invoked if both `self` and `other` are `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some};
    ///
    /// let joined = some("hi ").join(|left, right| Some(format!("{left}{right}")), some("there"));
    /// assert_eq!(joined.as_nullable(), Some("hi there".to_string()));
    ///
    /// let missing = none::<i32>().join(|left, right: i32| Some(left + right), some(1));
    /// assert!(missing.is_absent());
    /// ```
    #[inline]
    pub fn join<U, R, F>(self, function: F, other: Maybe<U>) -> Maybe<R>
    where
        F: FnOnce(T, U) -> Option<R>,
    {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => maybe_of(function(left, right)),
            (Self::Some(_) | Self::None, Maybe::Some(_) | Maybe::None) => Maybe::None,
        }
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Identity comparison.
    ///
    /// `None` is identical only to `None`. `Some` is identical to another
    /// `Some` whose contained value is the same object (see [`Identical`]);
    /// equal-shaped but distinct objects are not identical.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_t::{none, some};
    /// use std::rc::Rc;
    ///
    /// let shared = Rc::new(Vec::<i32>::new());
    /// assert!(some(Rc::clone(&shared)).identical(&some(Rc::clone(&shared))));
    /// assert!(!some(shared).identical(&some(Rc::new(Vec::new()))));
    /// assert!(none::<Rc<i32>>().identical(&none()));
    /// ```
    #[inline]
    pub fn identical(&self, other: &Self) -> bool
    where
        T: Identical,
    {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => left.identical(right),
            (Self::None, Self::None) => true,
            (Self::Some(_), Self::None) | (Self::None, Self::Some(_)) => false,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_nullable().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => write!(formatter, "None"),
        }
    }
}

// =============================================================================
// Pattern Matching
// =============================================================================

/// Marker for an arm that was left out of a [`Matcher`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unmatched;

/// The arms handed to [`Maybe::case_of`].
///
/// Both arms are optional. Closures passed to [`Matcher::some`] usually need
/// their argument type spelled out, since the matcher is built before it meets
/// the `Maybe` it is applied to.
///
/// # Examples
///
/// ```rust
/// use maybe_t::{some, Matcher};
///
/// let matcher = Matcher::new()
///     .some(|value: i32| Some(value * 2))
///     .none(|| Some(0));
/// assert_eq!(some(4).case_of(matcher).as_nullable(), Some(8));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher<S = Unmatched, N = Unmatched> {
    some: S,
    none: N,
}

impl Matcher {
    /// Creates a matcher with both arms omitted.
    #[inline]
    pub const fn new() -> Self {
        Self {
            some: Unmatched,
            none: Unmatched,
        }
    }
}

impl<S, N> Matcher<S, N> {
    /// Sets the arm invoked with the contained value.
    #[inline]
    pub fn some<F>(self, handler: F) -> Matcher<F, N> {
        Matcher {
            some: handler,
            none: self.none,
        }
    }

    /// Sets the arm invoked when there is no value.
    #[inline]
    pub fn none<F>(self, handler: F) -> Matcher<S, F> {
        Matcher {
            some: self.some,
            none: handler,
        }
    }
}

/// The arm of a [`Matcher`] taken for `Some`.
pub trait SomeArm<T, R> {
    /// Runs the arm against the contained value.
    fn invoke(self, value: T) -> Maybe<R>;
}

impl<T> SomeArm<T, T> for Unmatched {
    #[inline]
    fn invoke(self, value: T) -> Maybe<T> {
        Maybe::Some(value)
    }
}

impl<T, R, F> SomeArm<T, R> for F
where
    F: FnOnce(T) -> Option<R>,
{
    #[inline]
    fn invoke(self, value: T) -> Maybe<R> {
        maybe_of(self(value))
    }
}

/// The arm of a [`Matcher`] taken for `None`.
pub trait NoneArm<R> {
    /// Runs the arm.
    fn invoke(self) -> Maybe<R>;
}

impl<R> NoneArm<R> for Unmatched {
    #[inline]
    fn invoke(self) -> Maybe<R> {
        Maybe::None
    }
}

impl<R, F> NoneArm<R> for F
where
    F: FnOnce() -> Option<R>,
{
    #[inline]
    fn invoke(self) -> Maybe<R> {
        maybe_of(self())
    }
}

// =============================================================================
// Fallback
// =============================================================================

/// A fallback accepted by [`Maybe::or`]: either a `Maybe<T>` itself or a
/// zero-argument callable producing one.
pub trait Fallback<T> {
    /// Produces the fallback value, invoking the callable form if needed.
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> Fallback<T> for Maybe<T> {
    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

impl<T, F> Fallback<T> for F
where
    F: FnOnce() -> Maybe<T>,
{
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        self()
    }
}

// =============================================================================
// Identity Comparison
// =============================================================================

/// Identity equality used by [`Maybe::identical`].
///
/// Shared handles (`&T`, `Rc<T>`, `Arc<T>`) are identical only when they
/// point at the same allocation. Scalars and strings have no identity apart
/// from their value and compare by value.
pub trait Identical {
    /// Returns `true` if `self` and `other` are the same object.
    fn identical(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identical for &T {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identical for Rc<T> {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identical for Arc<T> {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

macro_rules! impl_identical_by_value {
    ($($type:ty),* $(,)?) => {
        $(
            impl Identical for $type {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn identical(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_identical_by_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String,
);

// =============================================================================
// Errors
// =============================================================================

/// Represents an attempt to extract a value from an absent `Maybe`.
///
/// # Examples
///
/// ```rust
/// use maybe_t::MissingValueError;
///
/// let error = MissingValueError::default();
/// assert_eq!(
///     format!("{error}"),
///     "Expected Maybe to contain non-null value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingValueError {
    message: Cow<'static, str>,
}

impl MissingValueError {
    /// Creates an error carrying `message`.
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for MissingValueError {
    fn default() -> Self {
        Self::new(DEFAULT_MISSING_MESSAGE)
    }
}

impl fmt::Display for MissingValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for MissingValueError {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(maybe_of)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(MissingValueError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    // =========================================================================
    // Classification
    // =========================================================================

    #[rstest]
    #[case(Some(0))]
    #[case(Some(-1))]
    #[case(Some(i32::MAX))]
    fn maybe_of_present_values_are_not_absent(#[case] raw: Option<i32>) {
        assert!(!maybe_of(raw).is_absent());
    }

    #[rstest]
    #[case(Some(String::new()))]
    #[case(Some("merp".to_string()))]
    fn maybe_of_empty_string_is_present(#[case] raw: Option<String>) {
        assert!(maybe_of(raw).is_present());
    }

    #[rstest]
    fn maybe_of_empty_collection_is_present() {
        assert!(maybe_of(Some(Vec::<i32>::new())).is_present());
    }

    #[rstest]
    fn maybe_of_none_is_absent() {
        assert!(maybe_of(None::<i32>).is_absent());
    }

    #[rstest]
    fn from_option_uses_classification() {
        let present: Maybe<i32> = Some(1).into();
        let absent: Maybe<i32> = None.into();
        assert_eq!(present, Maybe::Some(1));
        assert_eq!(absent, Maybe::None);
    }

    #[rstest]
    fn default_is_none() {
        assert!(Maybe::<i32>::default().is_absent());
    }

    // =========================================================================
    // expect
    // =========================================================================

    #[rstest]
    fn expect_returns_value_when_present() {
        assert_eq!(some("hey").expect(), Ok("hey"));
    }

    #[rstest]
    fn expect_uses_default_message() {
        let error = none::<i32>().expect().unwrap_err();
        assert_eq!(error.message(), DEFAULT_MISSING_MESSAGE);
    }

    #[rstest]
    fn expect_with_carries_caller_message() {
        let error = none::<i32>().expect_with(String::from("oops....")).unwrap_err();
        assert_eq!(error.to_string(), "oops....");
    }

    #[rstest]
    fn expect_or_propagates_error_verbatim() {
        let error = std::io::Error::other("uh-oh");
        let result = none::<i32>().expect_or(error);
        assert_eq!(result.unwrap_err().to_string(), "uh-oh");
    }

    // =========================================================================
    // case_of
    // =========================================================================

    #[rstest]
    fn case_of_invokes_only_some_arm() {
        let none_calls = Cell::new(0);
        let result = some(2).case_of(
            Matcher::new()
                .some(|value: i32| Some(value + 1))
                .none(|| {
                    none_calls.set(none_calls.get() + 1);
                    Some(0)
                }),
        );
        assert_eq!(result, Maybe::Some(3));
        assert_eq!(none_calls.get(), 0);
    }

    #[rstest]
    fn case_of_invokes_only_none_arm() {
        let some_calls = Cell::new(0);
        let result = none::<i32>().case_of(
            Matcher::new()
                .some(|value: i32| {
                    some_calls.set(some_calls.get() + 1);
                    Some(value)
                })
                .none(|| Some(9)),
        );
        assert_eq!(result, Maybe::Some(9));
        assert_eq!(some_calls.get(), 0);
    }

    #[rstest]
    fn case_of_without_some_arm_passes_value_through() {
        let result = some("hey").case_of(Matcher::new().none(|| Some("nope")));
        assert_eq!(result, Maybe::Some("hey"));
    }

    #[rstest]
    fn case_of_without_none_arm_stays_absent() {
        let result = none::<i32>().case_of(Matcher::new().some(|value: i32| Some(value * 2)));
        assert!(result.is_absent());
    }

    #[rstest]
    fn case_of_classifies_absent_handler_result() {
        let result = some(1).case_of(Matcher::new().some(|_: i32| None::<String>));
        assert!(result.is_absent());
    }

    // =========================================================================
    // map / tap / flat_map
    // =========================================================================

    #[rstest]
    fn map_does_not_invoke_function_on_none() {
        let calls = Cell::new(0);
        let result = none::<i32>().map(|value| {
            calls.set(calls.get() + 1);
            Some(value)
        });
        assert!(result.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn tap_returns_self_unchanged() {
        let calls = Cell::new(0);
        let result = some(5).tap(|_| calls.set(calls.get() + 1));
        assert_eq!(result, Maybe::Some(5));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn tap_is_noop_on_none() {
        let calls = Cell::new(0);
        let result = none::<i32>().tap(|_| calls.set(calls.get() + 1));
        assert!(result.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn flat_map_returns_function_result_directly() {
        assert_eq!(some(1).flat_map(|_| none::<u8>()), Maybe::None);
        assert_eq!(some(1).flat_map(|value| some(value * 3)), Maybe::Some(3));
    }

    // =========================================================================
    // or / or_else
    // =========================================================================

    #[rstest]
    fn or_does_not_evaluate_callable_when_present() {
        let calls = Cell::new(0);
        let result = some(1).or(|| {
            calls.set(calls.get() + 1);
            some(2)
        });
        assert_eq!(result, Maybe::Some(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn or_else_with_does_not_evaluate_when_present() {
        let calls = Cell::new(0);
        let result = some(1).or_else_with(|| {
            calls.set(calls.get() + 1);
            2
        });
        assert_eq!(result, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn or_else_returns_callable_literally() {
        fn seven() -> i32 {
            7
        }
        let fallback: fn() -> i32 = seven;
        let result = none::<fn() -> i32>().or_else(fallback);
        assert_eq!(result(), 7);
    }

    // =========================================================================
    // identical
    // =========================================================================

    #[rstest]
    fn identical_compares_references_by_address() {
        let first = vec![1];
        let second = vec![1];
        assert!(some(&first).identical(&some(&first)));
        assert!(!some(&first).identical(&some(&second)));
    }

    #[rstest]
    fn identical_compares_arc_by_allocation() {
        let shared = Arc::new(String::from("x"));
        assert!(some(Arc::clone(&shared)).identical(&some(Arc::clone(&shared))));
        assert!(!some(shared).identical(&some(Arc::new(String::from("x")))));
    }

    #[rstest]
    #[case(none(), none(), true)]
    #[case(none(), some(1), false)]
    #[case(some(1), none(), false)]
    #[case(some(1), some(1), true)]
    #[case(some(1), some(2), false)]
    fn identical_scalars(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: bool) {
        assert_eq!(left.identical(&right), expected);
    }

    // =========================================================================
    // join
    // =========================================================================

    #[rstest]
    #[case(none(), some(2))]
    #[case(some(1), none())]
    #[case(none(), none())]
    fn join_does_not_invoke_function_when_either_side_absent(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
    ) {
        let calls = Cell::new(0);
        let result = left.join(
            |first, second| {
                calls.set(calls.get() + 1);
                Some(first + second)
            },
            right,
        );
        assert!(result.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn join_classifies_result() {
        let result = some(1).join(|_, _: i32| None::<i32>, some(2));
        assert!(result.is_absent());
    }

    // =========================================================================
    // Display / iteration
    // =========================================================================

    #[rstest]
    fn display_formats_variants() {
        assert_eq!(format!("{}", some(3)), "Some(3)");
        assert_eq!(format!("{}", none::<i32>()), "None");
    }

    #[rstest]
    fn into_iter_yields_contained_value() {
        assert_eq!(some(3).into_iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!(none::<i32>().into_iter().count(), 0);
        assert_eq!((&some(4)).into_iter().copied().sum::<i32>(), 4);
    }

    #[rstest]
    fn as_mut_allows_in_place_edit_of_owned_binding() {
        let mut value = some(1);
        if let Maybe::Some(inner) = value.as_mut() {
            *inner += 1;
        }
        assert_eq!(value, Maybe::Some(2));
    }
}
