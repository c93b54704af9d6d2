//! Monad type class - sequencing dependent computations.
//!
//! `Monad::flat_map` is the `bind` operation of the container protocol: the
//! next step is chosen from the payload of the previous one, and any absence
//! or failure short-circuits without calling the continuation.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::Monad;
//!
//! fn divide(dividend: i32, divisor: i32) -> Result<i32, String> {
//!     if divisor == 0 {
//!         Err("Division by zero".to_string())
//!     } else {
//!         Ok(dividend / divisor)
//!     }
//! }
//!
//! let chained = Ok::<_, String>(100)
//!     .flat_map(|x| divide(x, 5))
//!     .flat_map(|x| divide(x, 0));
//! assert_eq!(chained, Err("Division by zero".to_string()));
//! ```

use super::applicative::Applicative;

/// An applicative whose next step may depend on the previous payload.
pub trait Monad: Applicative {
    /// Feeds the payload into `function` and flattens one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(Some(5).flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Alias for [`Monad::flat_map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Monad;
    ///
    /// let chained = Ok::<i32, String>(100)
    ///     .bind(|x| Ok(x / 5))
    ///     .bind(|x| if x == 0 { Err("boom".to_string()) } else { Ok(x) });
    /// assert_eq!(chained, Ok(20));
    /// ```
    #[inline]
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the first payload.
    ///
    /// A failed `self` is propagated and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        match self {
            Ok(value) => function(value),
            Err(error) => Err(error),
        }
    }
}
