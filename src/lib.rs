//! # effectual
//!
//! Algebraic containers for effects, errors and state, plus immutable
//! collections with structural sharing.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Fold`, `Semigroup`, `Monoid`
//! - **Error Contexts**: `Option`/`Result` extensions, `Validation`, `Try`
//! - **Effects**: `State`, `Reader`, `Writer`, `IO`, `Task`, bounded memoization
//! - **Persistent Collections**: `PersistentList`, `PersistentMap`, `PersistentSet`
//! - **Function Composition**: `compose!`, `pipe!`, `curry2!`..`curry4!`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function composition utilities
//! - `control`: Error-context containers (Validation, Try)
//! - `persistent`: Persistent data structures
//! - `effect`: Deferred and context-carrying computations
//! - `arc`: Thread-safe persistent collections backed by `Arc`
//! - `serde`: Serialization for collections and `Validation`
//! - `tracing`: Spans and trace events for effect execution
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effectual::prelude::*;
//!
//! let checked: Validation<i32, &str> = Validation::valid(|a: i32| move |b: i32| a + b)
//!     .ap(Validation::invalid("first"))
//!     .ap(Validation::invalid("second"));
//!
//! assert_eq!(checked.unwrap_errors().into_vec(), vec!["first", "second"]);
//!
//! let list = PersistentList::from_slice(&[1, 2, 3]).prepend(0);
//! assert_eq!(list.get(-1), Some(&3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use effectual::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "effect")]
pub mod effect;
