//! Functor type class - mapping over container values.
//!
//! `Functor::fmap` is the `map` operation of the container protocol: it
//! applies a function to the success payload only. Absent, failed and invalid
//! variants pass through untouched and the function is never called for them.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::Functor;
//!
//! let present: Option<i32> = Some(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let failed: Result<i32, &str> = Err("boom");
//! assert_eq!(failed.fmap(|n| n + 1), Err("boom"));
//! ```

use super::higher::TypeConstructor;

/// A type class for containers whose payload can be transformed.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::Functor;
///
/// let doubled: Option<i32> = Some(21).fmap(|n| n * 2);
/// assert_eq!(doubled, Some(42));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, leaving every other variant as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Functor;
    ///
    /// let nothing: Option<i32> = None;
    /// assert_eq!(nothing.fmap(|n| n * 2), None);
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the payload with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Functor;
    ///
    /// assert_eq!(Some(1).replace("one"), Some("one"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_fmap_doubles_only_present_values(
        #[case] input: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn result_fmap_never_calls_function_on_error() {
        let calls = Cell::new(0);
        let failed: Result<i32, &str> = Err("boom");

        let mapped = failed.fmap(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });

        assert_eq!(mapped, Err("boom"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn void_keeps_shape() {
        assert_eq!(Some("text").void(), Some(()));
        assert_eq!(Err::<i32, _>("e").void(), Err("e"));
    }
}
