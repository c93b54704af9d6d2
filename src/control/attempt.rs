//! Try - computations that may raise.
//!
//! `Try<A>` is `Success(value)` or `Failure(cause)`. A failure never keeps a
//! live panic payload or error object around; it stores a [`Cause`], a plain
//! description made of a kind and a message, so a `Try` can be cloned,
//! compared and sent across threads.
//!
//! Panics raised while building a `Try` with [`Try::of`], or inside the
//! functions given to [`Try::map`] and [`Try::flat_map`], are caught and become
//! failures. [`Try::recover`] is the way back to a plain value.
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::Try;
//!
//! let parsed = Try::from_result("12".parse::<i32>()).map(|n| n * 2);
//! assert_eq!(parsed, Try::Success(24));
//!
//! let failed = Try::from_result("twelve".parse::<i32>());
//! assert_eq!(failed.cause().map(|cause| cause.message()), Some("invalid digit found in string"));
//!
//! let recovered = failed.recover(|_| 0);
//! assert_eq!(recovered, Try::Success(0));
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::typeclass::{Applicative, Fold, Functor, Monad, TypeConstructor};

/// The kind recorded for failures that come from a panic.
pub const PANIC_KIND: &str = "panic";

// =============================================================================
// Cause
// =============================================================================

/// Structured description of why a computation failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cause {
    kind: String,
    message: String,
}

impl Cause {
    /// Creates a cause from a kind and a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Cause;
    ///
    /// let cause = Cause::new("timeout", "no answer after 3 attempts");
    /// assert_eq!(cause.to_string(), "timeout: no answer after 3 attempts");
    /// ```
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Creates a cause describing a panic.
    pub fn panic(message: impl Into<String>) -> Self {
        Self::new(PANIC_KIND, message)
    }

    /// Describes an error value; the kind is the error's type name.
    pub fn from_error<E: Error>(error: &E) -> Self {
        Self::new(std::any::type_name::<E>(), error.to_string())
    }

    /// Describes the payload handed back by `catch_unwind`.
    ///
    /// `&str` and `String` payloads keep their text; anything else is
    /// reported as an unknown panic.
    pub fn from_panic_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Self::panic(message)
    }

    /// What kind of failure this is.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Human readable details.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` when the failure came from a panic.
    pub fn is_panic(&self) -> bool {
        self.kind == PANIC_KIND
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.kind, self.message)
    }
}

impl Error for Cause {}

/// Runs `computation`, turning a panic into a [`Cause`].
pub(crate) fn catch_panic<A, F>(computation: F) -> Result<A, Cause>
where
    F: FnOnce() -> A,
{
    catch_unwind(AssertUnwindSafe(computation)).map_err(|payload| Cause::from_panic_payload(&*payload))
}

// =============================================================================
// Try
// =============================================================================

/// The outcome of a computation that may raise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<A> {
    /// The computation returned a value.
    Success(A),
    /// The computation failed.
    Failure(Cause),
}

impl<A> Try<A> {
    /// Runs `computation` now, capturing a panic as a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Try;
    ///
    /// let boom: Try<i32> = Try::of(|| panic!("exploded"));
    /// assert_eq!(boom.cause().map(|c| c.message()), Some("exploded"));
    /// ```
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> A,
    {
        catch_panic(computation).into()
    }

    /// Converts a `Result`, describing its error as a [`Cause`].
    pub fn from_result<E: Error>(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Cause::from_error(&error)),
        }
    }

    /// Wraps a value.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Wraps a cause.
    #[inline]
    pub const fn failure(cause: Cause) -> Self {
        Self::Failure(cause)
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the cause of a failure.
    pub const fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Transforms the value; a panic in `function` becomes a failure.
    pub fn map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Try::of(|| function(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Chains a computation that may fail; a panic in `function` becomes a
    /// failure.
    pub fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        match self {
            Self::Success(value) => catch_panic(|| function(value)).unwrap_or_else(Try::Failure),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Alias for [`Try::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        self.flat_map(function)
    }

    /// Replaces a failure with a value computed from its cause.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Cause) -> A,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => Self::Success(function(cause)),
        }
    }

    /// Replaces a failure with another attempt computed from its cause.
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(Cause) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => function(cause),
        }
    }

    /// Runs `on_failure` with the cause or `on_success` with the value.
    pub fn fold<R, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> R
    where
        OnFailure: FnOnce(Cause) -> R,
        OnSuccess: FnOnce(A) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    /// Returns the value or `default`.
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value or computes one from the cause.
    pub fn unwrap_or_else<F>(self, function: F) -> A
    where
        F: FnOnce(Cause) -> A,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => function(cause),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the cause when called on `Failure`.
    #[track_caller]
    pub fn unwrap(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => panic!("called `Try::unwrap()` on a `Failure` value: {cause}"),
        }
    }

    /// Converts to a `Result` whose error is the cause.
    pub fn to_result(self) -> Result<A, Cause> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }

    /// Returns the value, discarding any cause.
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }
}

impl<A> From<Result<A, Cause>> for Try<A> {
    fn from(result: Result<A, Cause>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Try<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(cause) => write!(formatter, "Failure({cause})"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Try<A> {
    type Inner = A;
    type WithType<B> = Try<B>;
}

impl<A> Functor for Try<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Applicative for Try<A> {
    #[inline]
    fn pure<B>(value: B) -> Try<B> {
        Try::Success(value)
    }

    fn map2<B, C, F>(self, other: Try<B>, function: F) -> Try<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.flat_map(|first| other.map(|second| function(first, second)))
    }

    fn map3<B, C, D, F>(self, second: Try<B>, third: Try<C>, function: F) -> Try<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.flat_map(|a| second.flat_map(|b| third.map(|c| function(a, b, c))))
    }

    fn apply<B, Output>(self, other: Try<B>) -> Try<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<A> Monad for Try<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<A> Fold for Try<A> {
    type Failure = Cause;

    #[inline]
    fn fold<R, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> R
    where
        OnFailure: FnOnce(Cause) -> R,
        OnSuccess: FnOnce(A) -> R,
    {
        Self::fold(self, on_failure, on_success)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn try_strategy() -> impl Strategy<Value = Try<i32>> {
        prop_oneof![
            any::<i32>().prop_map(Try::success),
            "[a-z]{1,6}".prop_map(|message| Try::failure(Cause::new("test", message))),
        ]
    }

    proptest! {
        #[test]
        fn prop_functor_composition(input in try_strategy()) {
            let first = |x: i32| i64::from(x) * 2;
            let second = |x: i64| x.to_string();
            prop_assert_eq!(input.clone().map(first).map(second), input.map(|x| second(first(x))));
        }

        #[test]
        fn prop_left_identity(value in any::<i32>()) {
            let function = |x: i32| if x % 2 == 0 { Try::success(x / 2) } else { Try::failure(Cause::new("odd", x.to_string())) };
            prop_assert_eq!(Try::success(value).flat_map(function), function(value));
        }
    }
}
