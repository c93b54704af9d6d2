//! Success/failure containers.
//!
//! This module gathers the containers whose failure branch carries
//! information of a different shape:
//!
//! - `Option<T>` ([`some`], [`nothing`]): failure carries nothing
//! - `Result<T, E>` ([`ok`], [`error`], [`ResultExt`]): one error payload
//! - [`Validation`]: every error, accumulated in a [`NonEmptyVec`]
//! - [`Try`]: a [`Cause`] describing a raised failure
//!
//! All of them implement [`Container`](crate::typeclass::Container), so code
//! written against `Functor`, `Monad` and `Fold` works with any of them.
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::{Validation, error, ok};
//! use effectual::typeclass::{Fold, Monad};
//!
//! let divided: Result<i32, String> = ok(100).bind(|x| ok(x / 5));
//! assert_eq!(divided.fold(|_| -1, |n| n), 20);
//!
//! let failed: Result<i32, &str> = error("Division by zero");
//! assert_eq!(failed.bind(|x| ok(x + 1)), Err("Division by zero"));
//!
//! let both = Validation::<i32, &str>::invalid("e1").and(Validation::<i32, &str>::invalid("e2"));
//! assert_eq!(both.unwrap_errors().into_vec(), vec!["e1", "e2"]);
//! ```

mod attempt;
mod maybe;
mod non_empty;
mod result;
mod validation;

pub use attempt::{Cause, PANIC_KIND, Try};
#[cfg_attr(not(feature = "effect"), allow(unused_imports))]
pub(crate) use attempt::catch_panic;
pub use maybe::{nothing, some};
pub use non_empty::NonEmptyVec;
pub use result::{ResultExt, error, ok};
pub use validation::Validation;
