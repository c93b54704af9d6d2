//! Writer - values paired with an accumulated log.
//!
//! A `Writer<W, A>` holds a value and a log of type `W`. Sequencing two
//! writers keeps the second value and joins the logs with
//! [`Semigroup::combine`](crate::typeclass::Semigroup::combine); [`Writer::pure`] starts from [`Monoid::empty`].
//! Any monoid works as a log: `Vec` appends, `String` concatenates,
//! [`Sum`] adds, `BTreeSet` unions and `BTreeMap` merges.
//!
//! Unlike the deferred effect types, a writer is an ordinary value, so it
//! implements [`Functor`], [`Applicative`] and [`Monad`] directly.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::{Writer, log_text};
//!
//! let computation = log_text("parse;")
//!     .then(Writer::new(21, "double;".to_string()))
//!     .flat_map(|n| Writer::new(n * 2, "done".to_string()));
//!
//! assert_eq!(computation.run(), (42, "parse;double;done".to_string()));
//! ```
//!
//! Custom log types only need `Semigroup` and `Monoid`:
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use effectual::effect::Writer;
//!
//! let tags = Writer::tell(BTreeSet::from(["io"]))
//!     .then(Writer::tell(BTreeSet::from(["db", "io"])));
//! assert_eq!(tags.into_log(), BTreeSet::from(["db", "io"]));
//! ```

use crate::typeclass::{Applicative, Functor, Monad, Monoid, Sum, TypeConstructor};

/// A value together with the log produced while computing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Writer<W, A> {
    value: A,
    log: W,
}

/// A writer whose log is a list of entries.
pub type ListWriter<T, A> = Writer<Vec<T>, A>;

/// A writer whose log is concatenated text.
pub type StringWriter<A> = Writer<String, A>;

/// A writer whose log is a running total.
pub type SumWriter<N, A> = Writer<Sum<N>, A>;

impl<W: Monoid, A> Writer<W, A> {
    /// Pairs `value` with `log`.
    #[inline]
    pub const fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// A writer with an empty log.
    pub fn pure(value: A) -> Self {
        Self::new(value, W::empty())
    }

    /// Splits into value and log.
    pub fn run(self) -> (A, W) {
        (self.value, self.log)
    }

    /// Borrows the value.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Borrows the log.
    #[inline]
    pub const fn log(&self) -> &W {
        &self.log
    }

    /// Keeps only the value.
    pub fn into_value(self) -> A {
        self.value
    }

    /// Keeps only the log.
    pub fn into_log(self) -> W {
        self.log
    }

    /// Transforms the value; the log is unchanged.
    pub fn map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(function(self.value), self.log)
    }

    /// Continues with a writer built from the value; the logs are combined,
    /// this writer's entries first.
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.value);
        Writer::new(next.value, self.log.combine(next.log))
    }

    /// Keeps the value of `next` and both logs.
    #[must_use]
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        Writer::new(next.value, self.log.combine(next.log))
    }

    /// Exposes a copy of the log next to the value.
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let copy = self.log.clone();
        Writer::new((self.value, copy), self.log)
    }

    /// Rewrites the log.
    ///
    /// ```rust
    /// use effectual::effect::Writer;
    ///
    /// let quiet = Writer::new(1, vec!["debug", "error"])
    ///     .censor(|log| log.into_iter().filter(|entry| *entry != "debug").collect());
    /// assert_eq!(quiet.log(), &vec!["error"]);
    /// ```
    #[must_use]
    pub fn censor<F>(self, modifier: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self::new(self.value, modifier(self.log))
    }
}

impl<W: Monoid> Writer<W, ()> {
    /// Writes `log` without producing a value.
    pub const fn tell(log: W) -> Self {
        Self::new((), log)
    }
}

impl<W: Monoid, A, F> Writer<W, (A, F)>
where
    F: FnOnce(W) -> W,
{
    /// Applies the log rewrite carried next to the value.
    pub fn pass(self) -> Writer<W, A> {
        let (value, modifier) = self.value;
        Writer::new(value, modifier(self.log))
    }
}

/// Logs a single entry.
pub fn log_entry<T>(entry: T) -> ListWriter<T, ()> {
    Writer::tell(vec![entry])
}

/// Logs a piece of text.
pub fn log_text(text: impl Into<String>) -> StringWriter<()> {
    Writer::tell(text.into())
}

/// Logs `value` and yields it in one step.
///
/// ```rust
/// use effectual::effect::tell_value;
///
/// let traced = tell_value(3).flat_map(|n| tell_value(n * 2));
/// assert_eq!(traced.run(), (6, vec![3, 6]));
/// ```
pub fn tell_value<A: Clone>(value: A) -> ListWriter<A, A> {
    Writer::new(value.clone(), vec![value])
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<W: Monoid, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}

impl<W: Monoid, A> Functor for Writer<W, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<W: Monoid, A> Applicative for Writer<W, A> {
    fn pure<B>(value: B) -> Writer<W, B> {
        Writer::pure(value)
    }

    fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer::new(function(self.value, other.value), self.log.combine(other.log))
    }

    fn map3<B, C, D, F>(self, second: Writer<W, B>, third: Writer<W, C>, function: F) -> Writer<W, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Writer::new(
            function(self.value, second.value, third.value),
            self.log.combine(second.log).combine(third.log),
        )
    }

    fn apply<B, Output>(self, other: Writer<W, B>) -> Writer<W, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<W: Monoid, A> Monad for Writer<W, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Max, lift2};
    use rstest::rstest;
    use std::collections::{BTreeMap, BTreeSet};

    #[rstest]
    fn pure_starts_with_empty_log() {
        let writer: StringWriter<i32> = Writer::pure(5);
        assert_eq!(writer.run(), (5, String::new()));
    }

    #[rstest]
    fn flat_map_keeps_log_order() {
        let writer = log_entry("open")
            .then(log_entry("read"))
            .flat_map(|()| Writer::new(3, vec!["close"]));
        assert_eq!(writer.run(), (3, vec!["open", "read", "close"]));
    }

    #[rstest]
    fn sum_log_adds_costs() {
        let cost: SumWriter<u32, &str> = Writer::new("a", Sum::new(2))
            .then(Writer::new("b", Sum::new(5)));
        assert_eq!(cost.log().get(), &7);
    }

    #[rstest]
    fn set_log_uses_union() {
        let writer = Writer::tell(BTreeSet::from([1, 2])).then(Writer::new("x", BTreeSet::from([2, 3])));
        assert_eq!(writer.into_log(), BTreeSet::from([1, 2, 3]));
    }

    #[rstest]
    fn map_log_uses_merge() {
        let writer = Writer::tell(BTreeMap::from([("retries", 1)]))
            .then(Writer::tell(BTreeMap::from([("retries", 2), ("hits", 4)])));
        assert_eq!(writer.into_log(), BTreeMap::from([("hits", 4), ("retries", 2)]));
    }

    #[rstest]
    fn max_log_tracks_peak() {
        let peak = Writer::new((), Max::new(3))
            .then(Writer::new((), Max::new(9)))
            .then(Writer::new((), Max::new(4)));
        assert_eq!(peak.into_log().into_inner(), 9);
    }

    #[rstest]
    fn listen_exposes_log_without_consuming_it() {
        let ((value, seen), log) = log_text("hi").then(Writer::pure(1)).listen().run();
        assert_eq!(value, 1);
        assert_eq!(seen, "hi");
        assert_eq!(log, "hi");
    }

    #[rstest]
    fn pass_applies_carried_modifier() {
        let writer = Writer::new((7, |log: String| log.to_uppercase()), "warn".to_string()).pass();
        assert_eq!(writer.run(), (7, "WARN".to_string()));
    }

    #[rstest]
    fn lift2_combines_values_and_logs() {
        let combined = lift2(
            |a: i32, b: i32| a + b,
            Writer::new(1, vec!["one"]),
            Writer::new(2, vec!["two"]),
        );
        assert_eq!(combined.run(), (3, vec!["one", "two"]));
    }
}
