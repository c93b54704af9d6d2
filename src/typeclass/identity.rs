//! The identity container.
//!
//! `Identity<A>` wraps a value and adds no effect. It is the simplest lawful
//! container and is handy as a baseline when testing generic code written
//! against [`Container`](super::Container).

use std::convert::Infallible;
use std::fmt;

use super::applicative::Applicative;
use super::fold::Fold;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monad::Monad;

/// A container that always holds exactly one value.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::{Functor, Identity, Monad};
///
/// let result = Identity::new(20)
///     .fmap(|n| n + 1)
///     .flat_map(|n| Identity::new(n * 2));
/// assert_eq!(result.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

/// The failure branch can never be reached.
impl<A> Fold for Identity<A> {
    type Failure = Infallible;

    #[inline]
    fn fold<R, OnFailure, OnSuccess>(self, _on_failure: OnFailure, on_success: OnSuccess) -> R
    where
        OnFailure: FnOnce(Infallible) -> R,
        OnSuccess: FnOnce(A) -> R,
    {
        on_success(self.0)
    }
}
