//! Reader - computations that depend on a shared environment.
//!
//! A `Reader<R, A>` is a deferred function `&R -> A`. Composing readers
//! threads the same environment through every step without passing it by
//! hand; [`Reader::run`] supplies it once at the edge.
//!
//! The environment is only ever borrowed, so it needs no `Clone` bound.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Reader;
//!
//! struct Settings {
//!     host: String,
//!     port: u16,
//! }
//!
//! let host: Reader<Settings, String> = Reader::asks(|settings: &Settings| settings.host.clone());
//! let port: Reader<Settings, u16> = Reader::asks(|settings: &Settings| settings.port);
//! let address = host.map2(port, |host, port| format!("{host}:{port}"));
//!
//! let settings = Settings { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.run(&settings), "localhost:8080");
//! ```

use std::fmt;
use std::rc::Rc;

/// A deferred computation reading an environment of type `R`.
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    function: Rc<dyn Fn(&R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Wraps a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    pub fn run(&self, environment: &R) -> A {
        (self.function)(environment)
    }

    /// Ignores the environment and yields `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Yields a projection of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Transforms the value.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.function;
        Reader::new(move |environment| function(inner(environment)))
    }

    /// Chains a reader chosen from the current value; both read the same
    /// environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
    {
        let inner = self.function;
        Reader::new(move |environment| function(inner(environment)).run(environment))
    }

    /// Alias for [`Reader::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs `self`, discards its value and runs `next`.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        B: 'static,
    {
        let inner = self.function;
        Reader::new(move |environment| {
            inner(environment);
            next.run(environment)
        })
    }

    /// Combines the values of two readers over the same environment.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.function;
        let second = other.function;
        Reader::new(move |environment| function(first(environment), second(environment)))
    }

    /// Pairs the values of two readers.
    #[must_use]
    pub fn product<B>(self, other: Reader<R, B>) -> Reader<R, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |left, right| (left, right))
    }

    /// Runs this reader against a derived environment.
    ///
    /// The caller's environment is only read by `modifier`; the sub-computation
    /// sees `modifier(environment)` instead.
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let depth: Reader<u32, u32> = Reader::ask();
    /// let nested = depth.local(|depth: &u32| depth + 1);
    /// assert_eq!(nested.run(&1), 2);
    /// ```
    pub fn local<Outer, F>(self, modifier: F) -> Reader<Outer, A>
    where
        F: Fn(&Outer) -> R + 'static,
        Outer: 'static,
    {
        let inner = self.function;
        Reader::new(move |environment| inner(&modifier(environment)))
    }
}

impl<R> Reader<R, R>
where
    R: Clone + 'static,
{
    /// Yields the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(R::clone)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<R, A> fmt::Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Reader>")
    }
}

impl<R, A> fmt::Debug for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Reader").finish_non_exhaustive()
    }
}
