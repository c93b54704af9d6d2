//! Exhaustive two-branch elimination and the shared container protocol.
//!
//! [`Fold::fold`] is the sanctioned way to leave a container: the caller
//! supplies one handler for the failure or absence branch and one for the
//! success branch, and exactly one of them runs. [`Container`] bundles
//! `Monad` and `Fold` into the single protocol every error-context type
//! implements.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::Fold;
//!
//! let present = Some(3).fold(|()| "nothing".to_string(), |n| format!("got {n}"));
//! assert_eq!(present, "got 3");
//!
//! let failed: Result<i32, &str> = Err("bad input");
//! assert_eq!(failed.fold(|error| error.len(), |n| n as usize), 9);
//! ```

use super::higher::TypeConstructor;
use super::monad::Monad;

/// Total pattern match over a success branch and a failure branch.
pub trait Fold: TypeConstructor {
    /// What the failure branch carries: `()` for absence, the error payload
    /// otherwise.
    type Failure;

    /// Runs `on_failure` or `on_success` depending on the variant.
    fn fold<R, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> R
    where
        OnFailure: FnOnce(Self::Failure) -> R,
        OnSuccess: FnOnce(Self::Inner) -> R;
}

/// The full container protocol: `fmap`, `flat_map` and `fold`.
///
/// Implemented automatically for every type that is both a [`Monad`] and a
/// [`Fold`].
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::{Container, Fold, Functor};
///
/// fn describe<C>(container: C) -> String
/// where
///     C: Container<Inner = i32>,
///     C::Failure: std::fmt::Debug,
///     C::WithType<String>: Fold<Inner = String, Failure = C::Failure>,
/// {
///     container
///         .fmap(|n| n.to_string())
///         .fold(|failure| format!("failed: {failure:?}"), |text| text)
/// }
///
/// assert_eq!(describe(Some(7)), "7");
/// assert_eq!(describe(Err::<i32, &str>("no")), "failed: \"no\"");
/// ```
pub trait Container: Monad + Fold {}

impl<T: Monad + Fold> Container for T {}

impl<A> Fold for Option<A> {
    type Failure = ();

    #[inline]
    fn fold<R, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> R
    where
        OnFailure: FnOnce(()) -> R,
        OnSuccess: FnOnce(A) -> R,
    {
        match self {
            Some(value) => on_success(value),
            None => on_failure(()),
        }
    }
}

impl<T, E> Fold for Result<T, E> {
    type Failure = E;

    #[inline]
    fn fold<R, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> R
    where
        OnFailure: FnOnce(E) -> R,
        OnSuccess: FnOnce(T) -> R,
    {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }
}
