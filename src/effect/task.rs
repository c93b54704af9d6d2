//! Task - deferred computations that run at most once.
//!
//! A `Task<A>` starts `Unevaluated`. The first [`Task::run`] executes the
//! computation and stores the value in a single memo cell; from then on the
//! task is `Evaluated` and every run, from any clone and any thread, returns
//! the stored value.
//!
//! Clones share the memo cell. The transition to `Evaluated` is guarded by a
//! lock, so concurrent first runs still execute the computation exactly once.
//!
//! A computation that panics poisons the task: [`Task::try_run`] reports a
//! [`TaskPoisonedError`] and [`Task::run`] panics with it, and the computation
//! is never retried.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use effectual::effect::Task;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//! let task = Task::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     "expensive"
//! });
//!
//! assert_eq!(task.peek(), None);
//! assert_eq!(*task.run(), "expensive");
//! assert_eq!(*task.clone().run(), "expensive");
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! assert_eq!(task.peek(), Some(&"expensive"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use super::error::TaskPoisonedError;
use crate::control::{Cause, catch_panic};

type Computation<A> = Box<dyn FnOnce() -> A + Send>;

struct MemoCell<A> {
    value: OnceLock<A>,
    computation: Mutex<Option<Computation<A>>>,
    poison: OnceLock<Cause>,
}

/// A memoized deferred computation.
pub struct Task<A> {
    cell: Arc<MemoCell<A>>,
}

impl<A> Task<A> {
    /// Defers `computation` until the first run.
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self {
            cell: Arc::new(MemoCell {
                value: OnceLock::new(),
                computation: Mutex::new(Some(Box::new(computation))),
                poison: OnceLock::new(),
            }),
        }
    }

    /// An already evaluated task.
    pub fn pure(value: A) -> Self {
        Self {
            cell: Arc::new(MemoCell {
                value: OnceLock::from(value),
                computation: Mutex::new(None),
                poison: OnceLock::new(),
            }),
        }
    }

    /// Returns the value, running the computation if this is the first run.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPoisonedError`] if the computation panicked, now or on an
    /// earlier run.
    ///
    /// # Deadlocks
    ///
    /// The computation runs while this task's lock is held. A computation that
    /// runs its own task, directly or through a cycle of tasks, never returns.
    /// Running other, independent tasks from inside is fine.
    pub fn try_run(&self) -> Result<&A, TaskPoisonedError> {
        if let Some(value) = self.cell.value.get() {
            return Ok(value);
        }

        let mut slot = self.cell.computation.lock();
        if let Some(value) = self.cell.value.get() {
            return Ok(value);
        }
        let Some(computation) = slot.take() else {
            return Err(self.poisoned());
        };

        match catch_panic(computation) {
            Ok(value) => {
                let stored = self.cell.value.get_or_init(|| value);
                #[cfg(feature = "tracing")]
                tracing::trace!(target: "effectual::task", "memo cell filled");
                Ok(stored)
            }
            Err(cause) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "effectual::task", cause = %cause, "task poisoned");
                let error = TaskPoisonedError::new(cause.clone());
                let _ = self.cell.poison.set(cause);
                Err(error)
            }
        }
    }

    /// Returns the value, running the computation if this is the first run.
    ///
    /// # Panics
    ///
    /// Panics if the computation panicked, now or on an earlier run.
    ///
    /// # Deadlocks
    ///
    /// The computation runs while this task's lock is held. A computation that
    /// runs its own task, directly or through a cycle of tasks, never returns.
    /// Running other, independent tasks from inside is fine.
    #[track_caller]
    pub fn run(&self) -> &A {
        match self.try_run() {
            Ok(value) => value,
            Err(error) => panic!("called `Task::run()` on a poisoned task: {error}"),
        }
    }

    /// The stored value, without forcing the computation.
    pub fn peek(&self) -> Option<&A> {
        self.cell.value.get()
    }

    /// Returns `true` once the memo cell holds a value.
    pub fn is_evaluated(&self) -> bool {
        self.cell.value.get().is_some()
    }

    /// Returns `true` if the computation panicked.
    pub fn is_poisoned(&self) -> bool {
        self.cell.poison.get().is_some()
    }

    fn poisoned(&self) -> TaskPoisonedError {
        let cause = self
            .cell
            .poison
            .get()
            .cloned()
            .unwrap_or_else(|| Cause::panic("computation unavailable"));
        TaskPoisonedError::new(cause)
    }
}

impl<A> Task<A>
where
    A: Send + Sync + 'static,
{
    /// A task computing `function(value)` from this task's value.
    ///
    /// The new task has its own memo cell; running it runs `self` at most once.
    pub fn fmap<B, F>(&self, function: F) -> Task<B>
    where
        F: FnOnce(&A) -> B + Send + 'static,
    {
        let source = self.clone();
        Task::new(move || function(source.run()))
    }

    /// A task that runs the task chosen from this task's value.
    pub fn flat_map<B, F>(&self, function: F) -> Task<B>
    where
        F: FnOnce(&A) -> Task<B> + Send + 'static,
        B: Clone + Send + Sync + 'static,
    {
        let source = self.clone();
        Task::new(move || function(source.run()).run().clone())
    }

    /// A task pairing both values; each side still runs at most once.
    pub fn zip<B>(&self, other: &Task<B>) -> Task<(A, B)>
    where
        A: Clone,
        B: Clone + Send + Sync + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        Task::new(move || (left.run().clone(), right.run().clone()))
    }

    /// Enters `span` while the pending computation runs.
    ///
    /// Applies to every clone sharing this memo cell. An evaluated task is
    /// returned as is.
    #[cfg(feature = "tracing")]
    #[must_use]
    pub fn instrument(self, span: tracing::Span) -> Self {
        let mut slot = self.cell.computation.lock();
        if let Some(computation) = slot.take() {
            *slot = Some(Box::new(move || {
                let _entered = span.enter();
                computation()
            }));
        }
        drop(slot);
        self
    }
}

impl<A> Clone for Task<A> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

/// Tasks are equal when they share a memo cell; comparing never runs them.
impl<A> PartialEq for Task<A> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<A> Eq for Task<A> {}

impl<A> Hash for Task<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.cell), state);
    }
}

impl<A: fmt::Debug> fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            Some(value) => formatter.debug_tuple("Task").field(value).finish(),
            None => formatter.write_str("Task(<unevaluated>)"),
        }
    }
}

impl<A> fmt::Display for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Task>")
    }
}

static_assertions::assert_impl_all!(Task<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Task<String>: Send, Sync);
