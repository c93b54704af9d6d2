//! Deferred and context-carrying computations.
//!
//! # Context-Carrying Monads
//!
//! - [`State`]: threads a state value through a chain of transitions
//! - [`Reader`]: reads a shared environment
//! - [`Writer`]: accumulates a log in any [`Monoid`](crate::typeclass::Monoid)
//!
//! # Effect Monads
//!
//! - [`IO`]: a described side effect, executed again on every run
//! - [`Task`]: a deferred computation that runs at most once and memoizes
//!   its value
//! - [`Memoized`]: a bounded least-recently-used cache of results keyed by
//!   argument
//!
//! Running is always explicit: [`State::run`], [`Reader::run`],
//! [`IO::unsafe_run`] and [`Task::run`]. Building and composing never
//! executes anything.
//!
//! ```rust
//! use effectual::effect::{IO, State, Task};
//!
//! let counter: State<u32, u32> = State::modify(|n| n + 1).then(State::get());
//! assert_eq!(counter.run(0), (1, 1));
//!
//! let io = IO::pure(10).fmap(|x| x * 2).flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.unsafe_run(), 21);
//!
//! let task = Task::new(|| 6 * 7);
//! let doubled = task.fmap(|n| n * 2);
//! assert_eq!(*doubled.run(), 84);
//! assert!(task.is_evaluated());
//! ```

mod error;
mod io;
mod memo;
mod reader;
mod state;
mod task;
mod writer;

pub use error::TaskPoisonedError;
pub use io::IO;
pub use memo::{CacheStats, Memoized, memoize};
pub use reader::Reader;
pub use state::State;
pub use task::Task;
pub use writer::{ListWriter, StringWriter, SumWriter, Writer, log_entry, log_text, tell_value};
