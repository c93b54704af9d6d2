//! Error types for the effect system.

use std::fmt;

use crate::control::Cause;

/// A [`Task`](super::Task) whose computation panicked.
///
/// The memo cell of a poisoned task never fills; every later run reports the
/// same cause instead of executing the computation again.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::Task;
///
/// let task: Task<i32> = Task::new(|| panic!("no config"));
/// let error = task.try_run().unwrap_err();
/// assert_eq!(error.cause().message(), "no config");
/// assert_eq!(error.to_string(), "Task poisoned by an earlier failure: panic: no config");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPoisonedError {
    cause: Cause,
}

impl TaskPoisonedError {
    pub(crate) const fn new(cause: Cause) -> Self {
        Self { cause }
    }

    /// Why the computation failed.
    pub const fn cause(&self) -> &Cause {
        &self.cause
    }
}

impl fmt::Display for TaskPoisonedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Task poisoned by an earlier failure: {}", self.cause)
    }
}

impl std::error::Error for TaskPoisonedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
