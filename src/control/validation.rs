//! Validation - results that accumulate every error.
//!
//! `Validation<T, E>` is either `Valid(value)` or `Invalid(errors)` where
//! `errors` is a [`NonEmptyVec`]. Sequencing with [`Validation::flat_map`]
//! stops at the first failure like `Result` does, but the applicative path
//! ([`Validation::ap`], [`Validation::and`], `map2`, `map3` and collecting an
//! iterator) runs every check and concatenates the errors of both sides, left
//! operand first.
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::Validation;
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn validate_name(name: &str) -> Validation<String, String> {
//!     if name.is_empty() {
//!         Validation::invalid("name is empty".to_string())
//!     } else {
//!         Validation::valid(name.to_string())
//!     }
//! }
//!
//! fn validate_age(age: u32) -> Validation<u32, String> {
//!     if age >= 18 {
//!         Validation::valid(age)
//!     } else {
//!         Validation::invalid(format!("{age} is under 18"))
//!     }
//! }
//!
//! let rejected = validate_name("")
//!     .and(validate_age(12))
//!     .map(|(name, age)| User { name, age });
//!
//! assert_eq!(
//!     rejected.unwrap_errors().into_vec(),
//!     vec!["name is empty".to_string(), "12 is under 18".to_string()]
//! );
//! ```

use std::fmt;

use super::non_empty::NonEmptyVec;
use crate::typeclass::{Applicative, Fold, Functor, Monad, TypeConstructor};

/// A value that is either valid or carries one or more errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E> {
    /// The checked value.
    Valid(T),
    /// Every error found, in the order the checks were combined.
    Invalid(NonEmptyVec<E>),
}

impl<T, E> Validation<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a valid value.
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Builds an invalid result holding a single error.
    #[inline]
    pub const fn invalid(error: E) -> Self {
        Self::Invalid(NonEmptyVec::singleton(error))
    }

    /// Builds an invalid result from a list of errors.
    ///
    /// Returns `None` when `errors` is empty, since an invalid result must
    /// carry at least one error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Validation;
    ///
    /// assert!(Validation::<i32, &str>::invalid_many(vec![]).is_none());
    /// assert!(Validation::<i32, _>::invalid_many(vec!["a", "b"]).is_some());
    /// ```
    pub fn invalid_many(errors: Vec<E>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self::Invalid)
    }

    /// Converts a `Result`, turning its error into a one-element error list.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the valid value.
    pub fn map<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Transforms every error, keeping their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Validation;
    ///
    /// let marked = Validation::<i32, &str>::invalid("error").map_errors(|e| format!("! {e}"));
    /// assert_eq!(marked.unwrap_errors().into_vec(), vec!["! error".to_string()]);
    /// ```
    pub fn map_errors<F, G>(self, function: G) -> Validation<T, F>
    where
        G: FnMut(E) -> F,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.map(function)),
        }
    }

    /// Replaces the whole error list at once.
    pub fn map_error_list<F, G>(self, function: G) -> Validation<T, F>
    where
        G: FnOnce(NonEmptyVec<E>) -> NonEmptyVec<F>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(function(errors)),
        }
    }

    /// Sequences a dependent check, stopping at the first failure.
    ///
    /// Use [`Validation::and`] or [`Validation::ap`] to keep every error of
    /// independent checks.
    pub fn flat_map<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Alias for [`Validation::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        self.flat_map(function)
    }

    /// Pairs two independent results, accumulating errors from both.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Self::Valid(left), Validation::Valid(right)) => Validation::Valid((left, right)),
            (Self::Valid(_), Validation::Invalid(errors))
            | (Self::Invalid(errors), Validation::Valid(_)) => Validation::Invalid(errors),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.concat(right))
            }
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Runs `on_invalid` with the errors or `on_valid` with the value.
    pub fn fold<R, OnInvalid, OnValid>(self, on_invalid: OnInvalid, on_valid: OnValid) -> R
    where
        OnInvalid: FnOnce(NonEmptyVec<E>) -> R,
        OnValid: FnOnce(T) -> R,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Converts to a `Result` carrying only the first error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::{NonEmptyVec, Validation};
    ///
    /// let invalid: Validation<i32, &str> = Validation::Invalid(NonEmptyVec::new("a", vec!["b"]));
    /// assert_eq!(invalid.to_result(), Err("a"));
    /// ```
    pub fn to_result(self) -> Result<T, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors.into_head()),
        }
    }

    /// Converts to a `Result` carrying every error.
    pub fn into_result(self) -> Result<T, NonEmptyVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Returns the valid value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the valid value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => default,
        }
    }

    /// Returns the valid value or computes one from the errors.
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(NonEmptyVec<E>) -> T,
    {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => function(errors),
        }
    }

    /// Returns the error list.
    ///
    /// # Panics
    ///
    /// Panics when called on `Valid`.
    #[track_caller]
    pub fn unwrap_errors(self) -> NonEmptyVec<E> {
        match self {
            Self::Valid(_) => panic!("called `Validation::unwrap_errors()` on a `Valid` value"),
            Self::Invalid(errors) => errors,
        }
    }
}

impl<T, E: fmt::Debug> Validation<T, E> {
    /// Returns the valid value.
    ///
    /// # Panics
    ///
    /// Panics with the collected errors when called on `Invalid`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => {
                panic!("called `Validation::unwrap()` on an `Invalid` value: {errors:?}")
            }
        }
    }
}

impl<F, E> Validation<F, E> {
    /// Applies a validated function to a validated argument.
    ///
    /// When both sides are invalid the result holds the function's errors
    /// followed by the argument's errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Validation;
    ///
    /// let function: Validation<fn(i32) -> i32, &str> = Validation::invalid("e1");
    /// let merged = function.ap(Validation::invalid("e2"));
    /// assert_eq!(merged.unwrap_errors().into_vec(), vec!["e1", "e2"]);
    ///
    /// let add_one: Validation<fn(i32) -> i32, &str> = Validation::valid(|x| x + 1);
    /// assert_eq!(add_one.ap(Validation::valid(5)), Validation::valid(6));
    /// ```
    pub fn ap<A, B>(self, argument: Validation<A, E>) -> Validation<B, E>
    where
        F: FnOnce(A) -> B,
    {
        self.and(argument).map(|(function, value)| function(value))
    }
}

/// Collects every result, accumulating all errors in iteration order.
///
/// # Examples
///
/// ```rust
/// use effectual::control::Validation;
///
/// let checks = vec![Validation::valid(1), Validation::invalid("a"), Validation::invalid("b")];
/// let collected: Validation<Vec<i32>, &str> = checks.into_iter().collect();
/// assert_eq!(collected.unwrap_errors().into_vec(), vec!["a", "b"]);
/// ```
impl<T, E> FromIterator<Validation<T, E>> for Validation<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Validation<T, E>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .fold(Self::Valid(Vec::new()), |accumulated, next| {
                accumulated.and(next).map(|(mut values, value)| {
                    values.push(value);
                    values
                })
            })
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Validation<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => write!(formatter, "Valid({value})"),
            Self::Invalid(errors) => write!(formatter, "Invalid({errors})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor for Validation<T, E> {
    type Inner = T;
    type WithType<B> = Validation<B, E>;
}

impl<T, E> Functor for Validation<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Applicative for Validation<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Validation<B, E> {
        Validation::Valid(value)
    }

    fn map2<B, C, F>(self, other: Validation<B, E>, function: F) -> Validation<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        self.and(other).map(|(left, right)| function(left, right))
    }

    fn map3<B, C, D, F>(
        self,
        second: Validation<B, E>,
        third: Validation<C, E>,
        function: F,
    ) -> Validation<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.and(second)
            .and(third)
            .map(|((first, second), third)| function(first, second, third))
    }

    fn apply<B, Output>(self, other: Validation<B, E>) -> Validation<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<T, E> Monad for Validation<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Validation<B, E>
    where
        F: FnOnce(T) -> Validation<B, E>,
    {
        Self::flat_map(self, function)
    }
}

impl<T, E> Fold for Validation<T, E> {
    type Failure = NonEmptyVec<E>;

    #[inline]
    fn fold<R, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> R
    where
        OnFailure: FnOnce(NonEmptyVec<E>) -> R,
        OnSuccess: FnOnce(T) -> R,
    {
        Self::fold(self, on_failure, on_success)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn validation_strategy() -> impl Strategy<Value = Validation<i32, u8>> {
        prop_oneof![
            any::<i32>().prop_map(Validation::valid),
            prop::collection::vec(any::<u8>(), 1..4)
                .prop_map(|errors| Validation::invalid_many(errors).unwrap()),
        ]
    }

    proptest! {
        #[test]
        fn prop_functor_identity(validation in validation_strategy()) {
            prop_assert_eq!(validation.clone().map(|x| x), validation);
        }

        #[test]
        fn prop_error_count_is_additive(left in validation_strategy(), right in validation_strategy()) {
            let count = |v: &Validation<i32, u8>| match v {
                Validation::Valid(_) => 0,
                Validation::Invalid(errors) => errors.len(),
            };
            let expected = count(&left) + count(&right);
            let combined = left.and(right);
            prop_assert_eq!(count(&combined.map(|(a, _)| a)), expected);
        }

        #[test]
        fn prop_monad_associativity(validation in validation_strategy()) {
            let first = |x: i32| if x % 3 == 0 { Validation::invalid(3) } else { Validation::valid(x / 2) };
            let second = |x: i32| if x < 0 { Validation::invalid(0) } else { Validation::valid(x) };
            prop_assert_eq!(
                validation.clone().flat_map(first).flat_map(second),
                validation.flat_map(|x| first(x).flat_map(second))
            );
        }
    }
}
