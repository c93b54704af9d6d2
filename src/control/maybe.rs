//! Optional values.
//!
//! `Option<T>` already is the two-state container: `Some(value)` or `None`.
//! Its protocol operations come from the type classes (`Functor::fmap`,
//! `Monad::bind`, `Fold::fold`); this module only adds named factories.
//!
//! A present value that is itself "empty" stays distinct from absence:
//! `Some(None)` is a different value from `None` in `Option<Option<T>>`, so no
//! nullable conversion is needed.
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::{nothing, some};
//! use effectual::typeclass::{Fold, Monad};
//!
//! let halved = some(10).bind(|n| if n % 2 == 0 { some(n / 2) } else { nothing() });
//! assert_eq!(halved.fold(|()| 0, |n| n), 5);
//!
//! let nested: Option<Option<i32>> = some(nothing());
//! assert!(nested.is_some());
//! ```

/// Wraps a present value.
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// The absent value.
#[inline]
pub const fn nothing<T>() -> Option<T> {
    None
}
