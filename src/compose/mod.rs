//! Function composition utilities.
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right application, `pipe!(x, f, g) == g(f(x))`
//! - [`curry2!`], [`curry3!`], [`curry4!`]: one argument at a time
//! - [`identity`], [`constant`], [`flip`]: small combinators
//!
//! Composition is associative and has [`identity`] on both sides.
//!
//! ```
//! use effectual::{compose, curry2, pipe};
//! use effectual::compose::flip;
//!
//! let add = curry2!(|a: i32, b: i32| a + b);
//! let add_then_double = compose!(|x: i32| x * 2, add(1));
//! assert_eq!(add_then_double(4), 10);
//!
//! let divide = |a: f64, b: f64| a / b;
//! assert_eq!(pipe!(8.0, |x| flip(divide)(2.0, x)), 4.0);
//! ```

mod combinators;
mod composition;
mod curry;

pub use combinators::{constant, flip, identity};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::pipe;
