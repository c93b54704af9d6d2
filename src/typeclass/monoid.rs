//! Monoid type class - a semigroup with an identity element.
//!
//! Monoids are the log types of `Writer`: `empty` starts a log and `combine`
//! appends to it. Nothing here assumes an addition operator; numbers pick
//! their operation through the [`Sum`], [`Product`], [`Max`] and [`Min`]
//! wrappers.
//!
//! # Laws
//!
//! ```text
//! empty().combine(a) == a                                  (left identity)
//! a.combine(empty()) == a                                  (right identity)
//! a.combine(b).combine(c) == a.combine(b.combine(c))       (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Monoid, Semigroup};
//!
//! let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
//! assert_eq!(String::combine_all(words), "abc");
//! assert!(String::empty().is_empty_value());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Add;

use super::identity::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for `combine`.
    fn empty() -> Self;

    /// Combines every value of the iterator, starting from `empty()`.
    fn combine_all<I>(iterator: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }

    /// Returns `true` when `self` equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

impl<K: Ord, V> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Ord> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self::new(T::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self::new(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self::new($one)
                }
            }
        )*
    };
}

impl_product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self::new(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self::new(A::MAX_VALUE)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_vec_identity(values in prop::collection::vec(any::<i32>(), 0..10)) {
            prop_assert_eq!(Vec::empty().combine(values.clone()), values.clone());
            prop_assert_eq!(values.clone().combine(Vec::empty()), values);
        }

        #[test]
        fn prop_sum_identity(value in any::<i64>()) {
            prop_assert_eq!(Sum::empty().combine(Sum::new(value)), Sum::new(value));
            prop_assert_eq!(Sum::new(value).combine(Sum::empty()), Sum::new(value));
        }

        #[test]
        fn prop_max_identity(value in any::<u16>()) {
            prop_assert_eq!(Max::empty().combine(Max::new(value)), Max::new(value));
            prop_assert_eq!(Max::new(value).combine(Max::empty()), Max::new(value));
        }

        #[test]
        fn prop_string_identity(text in "\\PC{0,12}") {
            prop_assert_eq!(String::empty().combine(text.clone()), text.clone());
            prop_assert_eq!(text.clone().combine(String::empty()), text);
        }

        #[test]
        fn prop_btree_map_identity(entries in prop::collection::btree_map(any::<u8>(), any::<i32>(), 0..12)) {
            prop_assert_eq!(BTreeMap::empty().combine(entries.clone()), entries.clone());
            prop_assert_eq!(entries.clone().combine(BTreeMap::empty()), entries);
        }
    }
}
