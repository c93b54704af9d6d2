//! Type class traits for the container protocol.
//!
//! - [`Functor`]: `fmap`, the protocol's `map`
//! - [`Applicative`]: lifting and combining independent containers
//! - [`Monad`]: `flat_map`, the protocol's `bind`
//! - [`Fold`]: exhaustive two-branch elimination
//! - [`Container`]: `Monad + Fold`, implemented automatically
//! - [`Semigroup`] / [`Monoid`]: associative combination with identity
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types, so [`TypeConstructor`] uses generic
//! associated types to let a trait talk about "the same container holding a
//! different type".
//!
//! ## Foundation Types
//!
//! - [`Identity`]: the effect-free container
//! - [`Sum`], [`Product`], [`Max`], [`Min`], [`First`], [`Last`]: monoid selectors
//! - [`Bounded`]: types with least and greatest values
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Fold, Functor, Monad};
//!
//! let parsed = "21"
//!     .parse::<i32>()
//!     .fmap(|n| n * 2)
//!     .flat_map(|n| if n > 40 { Ok(n) } else { "0".parse::<i32>() })
//!     .fold(|error| error.to_string(), |n| n.to_string());
//!
//! assert_eq!(parsed, "42");
//! ```

mod applicative;
mod fold;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::{Applicative, lift2, lift3, zip};
pub use fold::{Container, Fold};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, First, Last, Max, Min, Product, Sum};
