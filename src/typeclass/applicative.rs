//! Applicative type class - combining independent computations.
//!
//! An applicative can lift a plain value (`pure`) and combine several
//! containers whose payloads do not depend on each other (`map2`, `map3`,
//! `apply`). For most containers this short-circuits on the first failure;
//! `Validation` uses the same entry points to accumulate errors instead.
//!
//! The free functions [`lift2`], [`lift3`] and [`zip`] are written once
//! against the trait and work for every container in the crate.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v)                == v                      (identity)
//! pure(f).apply(pure(x))           == pure(f(x))             (homomorphism)
//! u.apply(pure(y))                 == pure(|f| f(y)).apply(u) (interchange)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{lift2, Applicative};
//!
//! let sum = lift2(|a: i32, b: i32| a + b, Some(1), Some(2));
//! assert_eq!(sum, Some(3));
//!
//! let failed: Result<i32, &str> = lift2(|a: i32, b: i32| a + b, Ok(1), Err("no"));
//! assert_eq!(failed, Err("no"));
//! ```

use super::functor::Functor;

/// A functor that can lift values and combine independent containers.
pub trait Applicative: Functor {
    /// Lifts a plain value into the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Applicative;
    ///
    /// let lifted: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(lifted, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Applicative;
    ///
    /// assert_eq!(Some(2).map2(Some(3), |a, b| a * b), Some(6));
    /// assert_eq!(Some(2).map2(None::<i32>, |a, b| a * b), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the payloads of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Applies a wrapped function to a wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Applicative;
    ///
    /// let increment: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(increment.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Generic Combinators
// =============================================================================

/// Lifts a binary function over two containers of the same kind.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::lift2;
///
/// assert_eq!(lift2(|a: &str, b: usize| a.len() + b, Some("abc"), Some(2)), Some(5));
/// ```
#[inline]
pub fn lift2<FA, B, C, F>(function: F, first: FA, second: FA::WithType<B>) -> FA::WithType<C>
where
    FA: Applicative,
    F: FnOnce(FA::Inner, B) -> C,
{
    first.map2(second, function)
}

/// Lifts a ternary function over three containers of the same kind.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::lift3;
///
/// let total = lift3(|a: i32, b: i32, c: i32| a + b + c, Some(1), Some(2), Some(3));
/// assert_eq!(total, Some(6));
/// ```
#[inline]
pub fn lift3<FA, B, C, D, F>(
    function: F,
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
) -> FA::WithType<D>
where
    FA: Applicative,
    F: FnOnce(FA::Inner, B, C) -> D,
{
    first.map3(second, third, function)
}

/// Pairs two containers of the same kind.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::zip;
///
/// assert_eq!(zip(Some(1), Some("a")), Some((1, "a")));
/// assert_eq!(zip(Some(1), None::<&str>), None);
/// ```
#[inline]
pub fn zip<FA, B>(first: FA, second: FA::WithType<B>) -> FA::WithType<(FA::Inner, B)>
where
    FA: Applicative,
{
    first.product(second)
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(first), Some(second)) => Some(function(first, second)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    /// Short-circuits on the first `Err`, reading left to right.
    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        let first = self?;
        let second = other?;
        Ok(function(first, second))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Ok(function(self?, second?, third?))
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn result_map2_reports_first_error() {
        let left: Result<i32, &str> = Err("left");
        let right: Result<i32, &str> = Err("right");
        assert_eq!(left.map2(right, |a, b| a + b), Err("left"));
    }

    #[rstest]
    fn lift3_short_circuits_on_absent_value() {
        let combined = lift3(|a: i32, b: i32, c: i32| a * b * c, Some(2), None, Some(4));
        assert_eq!(combined, None);
    }

    #[rstest]
    fn option_interchange_law() {
        let function: Option<fn(i32) -> i32> = Some(|x| x * 10);
        let left = function.apply(Some(4));
        let right = <Option<()>>::pure(|f: fn(i32) -> i32| f(4)).apply(function);
        assert_eq!(left, right);
    }

    #[rstest]
    fn zip_pairs_results() {
        let paired: Result<(i32, char), String> = zip(Ok(1), Ok('x'));
        assert_eq!(paired, Ok((1, 'x')));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_option_identity(value in proptest::option::of(any::<i32>())) {
            let identity: Option<fn(i32) -> i32> = Some(|x| x);
            prop_assert_eq!(identity.apply(value), value);
        }

        #[test]
        fn prop_result_homomorphism(value in any::<i32>()) {
            let function = |x: i32| x.wrapping_mul(3);
            let left: Result<i32, ()> = Ok::<_, ()>(function).apply(Ok(value));
            prop_assert_eq!(left, Ok(function(value)));
        }
    }
}
