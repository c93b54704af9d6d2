//! IO - deferred side effects.
//!
//! An `IO<A>` describes a computation without performing it. `fmap`,
//! `flat_map` and the other combinators build a bigger description; only
//! [`IO::unsafe_run`] executes it, and every call executes it again. Nothing
//! is cached: use [`Task`](super::Task) for run-once semantics.
//!
//! A failure is a panic raised while running. [`IO::recover`] turns it into a
//! replacement value, [`IO::attempt`] into a [`Try`], and [`IO::retry`] runs
//! the computation again a bounded number of times.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use effectual::effect::IO;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//! let io = IO::new(move || {
//!     counter.set(counter.get() + 1);
//!     10
//! })
//! .fmap(|n| n * 2)
//! .flat_map(|n| IO::pure(n + 1));
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(io.unsafe_run(), 21);
//! assert_eq!(io.unsafe_run(), 21);
//! assert_eq!(runs.get(), 2);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use std::rc::Rc;

use crate::control::{Cause, Try, catch_panic};

/// A description of a side-effecting computation.
pub struct IO<A>
where
    A: 'static,
{
    action: Rc<dyn Fn() -> A>,
}

impl<A> IO<A>
where
    A: 'static,
{
    /// Describes `action` without running it.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            action: Rc::new(action),
        }
    }

    /// A computation that yields `value` and does nothing else.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Executes the computation.
    ///
    /// # Panics
    ///
    /// Propagates any panic raised by the computation.
    pub fn unsafe_run(&self) -> A {
        (self.action)()
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let action = self.action;
        IO::new(move || function(action()))
    }

    /// Runs the computation chosen from the result.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        let action = self.action;
        IO::new(move || function(action()).unsafe_run())
    }

    /// Alias for [`IO::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs `self`, discards its result and runs `next`.
    #[must_use]
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        let action = self.action;
        IO::new(move || {
            action();
            next.unsafe_run()
        })
    }

    /// Runs both computations in order and combines their results.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.action;
        let second = other.action;
        IO::new(move || {
            let left = first();
            let right = second();
            function(left, right)
        })
    }

    /// Runs both computations in order and pairs their results.
    #[must_use]
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |left, right| (left, right))
    }

    /// Replaces a failure raised while running with `handler(cause)`.
    ///
    /// ```rust
    /// use effectual::effect::IO;
    ///
    /// let io: IO<String> = IO::new(|| panic!("socket closed"));
    /// let safe = io.recover(|cause| format!("fallback after {}", cause.message()));
    /// assert_eq!(safe.unsafe_run(), "fallback after socket closed");
    /// ```
    #[must_use]
    pub fn recover<F>(self, handler: F) -> Self
    where
        F: Fn(Cause) -> A + 'static,
    {
        let action = self.action;
        Self::new(move || catch_panic(|| action()).unwrap_or_else(|cause| handler(cause)))
    }

    /// Runs the computation once, then up to `retries` more times while it
    /// fails.
    ///
    /// The first success is returned. If every attempt fails, the last
    /// failure is raised again.
    #[must_use]
    pub fn retry(self, retries: usize) -> Self {
        let action = self.action;
        Self::new(move || {
            let mut remaining = retries;
            loop {
                match catch_unwind(AssertUnwindSafe(|| action())) {
                    Ok(value) => return value,
                    Err(payload) if remaining == 0 => resume_unwind(payload),
                    Err(_) => remaining -= 1,
                }
            }
        })
    }

    /// Captures the outcome of each run as a [`Try`] instead of panicking.
    pub fn attempt(self) -> IO<Try<A>> {
        let action = self.action;
        IO::new(move || Try::of(|| action()))
    }

    /// Enters `span` for the duration of every run.
    #[cfg(feature = "tracing")]
    #[must_use]
    pub fn instrument(self, span: tracing::Span) -> Self {
        let action = self.action;
        Self::new(move || {
            let _entered = span.enter();
            action()
        })
    }
}

impl IO<()> {
    /// Writes `message` and a newline to standard output when run.
    pub fn print_line<M>(message: M) -> Self
    where
        M: fmt::Display + 'static,
    {
        Self::new(move || println!("{message}"))
    }
}

impl<A> Clone for IO<A>
where
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            action: Rc::clone(&self.action),
        }
    }
}

/// Two values are equal when they are the same description; comparing never
/// runs either computation.
impl<A> PartialEq for IO<A>
where
    A: 'static,
{
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.action, &other.action)
    }
}

impl<A> Eq for IO<A> where A: 'static {}

impl<A> Hash for IO<A>
where
    A: 'static,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.action).cast::<()>(), state);
    }
}

impl<A> fmt::Display for IO<A>
where
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<IO>")
    }
}

impl<A> fmt::Debug for IO<A>
where
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn flaky(failures: u32, runs: Rc<Cell<u32>>) -> IO<&'static str> {
        IO::new(move || {
            runs.set(runs.get() + 1);
            if runs.get() <= failures {
                panic!("attempt {} failed", runs.get());
            }
            "ok"
        })
    }

    #[rstest]
    fn construction_and_composition_do_not_run() {
        let runs = Rc::new(Cell::new(0));
        let io = flaky(0, Rc::clone(&runs)).fmap(str::len).product(IO::pure(1));
        assert_eq!(runs.get(), 0);
        assert_eq!(io.unsafe_run(), (2, 1));
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn equality_never_runs_the_computation() {
        let runs = Rc::new(Cell::new(0));
        let first = flaky(0, Rc::clone(&runs));
        let second = flaky(0, Rc::clone(&runs));

        assert_ne!(first, second);
        assert_eq!(first, first.clone());
        assert_eq!(runs.get(), 0);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(2, 3)]
    #[case(3, 4)]
    fn retry_stops_at_first_success(#[case] failures: u32, #[case] expected_runs: u32) {
        let runs = Rc::new(Cell::new(0));
        let io = flaky(failures, Rc::clone(&runs)).retry(3);
        assert_eq!(io.unsafe_run(), "ok");
        assert_eq!(runs.get(), expected_runs);
    }

    #[rstest]
    fn retry_raises_last_failure_when_exhausted() {
        let runs = Rc::new(Cell::new(0));
        let io = flaky(10, Rc::clone(&runs)).retry(2).attempt();

        let outcome = io.unsafe_run();
        assert_eq!(outcome.cause().map(Cause::message), Some("attempt 3 failed"));
        assert_eq!(runs.get(), 3);
    }

    #[rstest]
    fn recover_substitutes_value() {
        let io = flaky(1, Rc::new(Cell::new(0))).recover(|_| "recovered");
        assert_eq!(io.unsafe_run(), "recovered");
        assert_eq!(io.unsafe_run(), "ok");
    }

    #[rstest]
    fn then_runs_in_order() {
        let trail = Rc::new(std::cell::RefCell::new(Vec::new()));
        let first = Rc::clone(&trail);
        let second = Rc::clone(&trail);
        let io = IO::new(move || first.borrow_mut().push("first"))
            .then(IO::new(move || second.borrow_mut().push("second")));

        io.unsafe_run();
        assert_eq!(*trail.borrow(), vec!["first", "second"]);
    }

    #[rstest]
    #[should_panic(expected = "boom")]
    fn unsafe_run_propagates_panic() {
        let io: IO<i32> = IO::new(|| panic!("boom"));
        io.unsafe_run();
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_left_identity(value in any::<i32>()) {
            let function = |x: i32| IO::pure(x.wrapping_mul(3));
            prop_assert_eq!(IO::pure(value).flat_map(function).unsafe_run(), function(value).unsafe_run());
        }

        #[test]
        fn prop_functor_composition(value in any::<i32>()) {
            let first = |x: i32| i64::from(x) - 4;
            let second = |x: i64| x.to_string();
            prop_assert_eq!(
                IO::pure(value).fmap(first).fmap(second).unsafe_run(),
                IO::pure(value).fmap(move |x| second(first(x))).unsafe_run()
            );
        }
    }
}
