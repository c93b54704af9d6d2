//! Newtype wrappers selecting a particular monoid for a type.
//!
//! A number can be combined by addition, multiplication, maximum or minimum;
//! any value can be combined by keeping the first or the last occurrence. Each
//! wrapper picks one of those operations so the same payload type can serve as
//! several different logs in a `Writer`.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Monoid, Product, Sum};
//!
//! assert_eq!(Sum::combine_all([1, 2, 3].map(Sum::new)).into_inner(), 6);
//! assert_eq!(Product::combine_all([2, 3, 4].map(Product::new)).into_inner(), 24);
//! ```

use std::fmt;

macro_rules! define_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Borrows the wrapped value.
            #[inline]
            pub const fn get(&self) -> &A {
                &self.0
            }

            /// Unwraps the value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }
        }

        impl<A: fmt::Display> fmt::Display for $name<A> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_wrapper!(
    /// Combines by addition; the identity is zero.
    Sum
);
define_wrapper!(
    /// Combines by multiplication; the identity is one.
    Product
);
define_wrapper!(
    /// Keeps the larger value; the identity is the type's minimum.
    Max
);
define_wrapper!(
    /// Keeps the smaller value; the identity is the type's maximum.
    Min
);
define_wrapper!(
    /// Keeps the earliest value.
    First
);
define_wrapper!(
    /// Keeps the latest value.
    Last
);

/// Types with a least and a greatest value.
pub trait Bounded {
    /// The least value of the type.
    const MIN_VALUE: Self;
    /// The greatest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_names_the_wrapper() {
        assert_eq!(Sum::new(3).to_string(), "Sum(3)");
        assert_eq!(Last::new("x").to_string(), "Last(x)");
    }

    #[rstest]
    fn bounded_matches_primitive_limits() {
        assert_eq!(<u8 as Bounded>::MAX_VALUE, 255);
        assert_eq!(<i16 as Bounded>::MIN_VALUE, i16::MIN);
        assert_eq!(<char as Bounded>::MAX_VALUE, char::MAX);
    }
}
