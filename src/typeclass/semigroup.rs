//! Semigroup type class - associative combination.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(String::from("ab").combine(String::from("cd")), "abcd");
//! assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Add, Mul};

use super::identity::Identity;
use super::wrappers::{First, Last, Max, Min, Product, Sum};

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values; must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, cloning them first.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Folds a non-empty run of values; `None` when the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Max, Semigroup};
    ///
    /// let largest = Max::reduce_all([Max::new(3), Max::new(9), Max::new(4)]);
    /// assert_eq!(largest, Some(Max::new(9)));
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is neutral; two present values combine their payloads.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

/// Union where entries of `other` win on shared keys.
impl<K: Ord, V> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self::new(self.into_inner().combine(other.into_inner()))
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self::new(self.into_inner() + other.into_inner())
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self::new(self.into_inner() * other.into_inner())
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.get() > self.get() { other } else { self }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if other.get() < self.get() { other } else { self }
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        other
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_string_associativity(first in "\\PC{0,8}", second in "\\PC{0,8}", third in "\\PC{0,8}") {
            let left = first.clone().combine(second.clone()).combine(third.clone());
            let right = first.combine(second.combine(third));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_vec_associativity(
            first in prop::collection::vec(any::<u8>(), 0..8),
            second in prop::collection::vec(any::<u8>(), 0..8),
            third in prop::collection::vec(any::<u8>(), 0..8)
        ) {
            let left = first.clone().combine(second.clone()).combine(third.clone());
            let right = first.combine(second.combine(third));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_btree_map_associativity(
            first in prop::collection::btree_map(0u8..20, any::<i32>(), 0..10),
            second in prop::collection::btree_map(0u8..20, any::<i32>(), 0..10),
            third in prop::collection::btree_map(0u8..20, any::<i32>(), 0..10)
        ) {
            let left = first.clone().combine(second.clone()).combine(third.clone());
            let right = first.combine(second.combine(third));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_min_associativity(first in any::<i64>(), second in any::<i64>(), third in any::<i64>()) {
            let left = Min::new(first).combine(Min::new(second)).combine(Min::new(third));
            let right = Min::new(first).combine(Min::new(second).combine(Min::new(third)));
            prop_assert_eq!(left, right);
        }
    }
}
