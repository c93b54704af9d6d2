//! Persistent ordered set.
//!
//! [`PersistentSet`] is a [`PersistentMap`] with unit values, so it shares the
//! same balanced tree, path copying and ascending iteration order.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::map::{PersistentMap, PersistentMapIterator};
use crate::typeclass::{Monoid, Semigroup};

/// An immutable ordered set with structural sharing.
///
/// # Examples
///
/// ```rust
/// use effectual::persistent::PersistentSet;
///
/// let evens: PersistentSet<u32> = (0..10).filter(|n| n % 2 == 0).collect();
/// let small: PersistentSet<u32> = (0..5).collect();
///
/// assert_eq!(evens.intersection(&small).to_vec(), vec![0, 2, 4]);
/// assert_eq!(small.difference(&evens).to_vec(), vec![1, 3]);
/// assert!(!evens.is_disjoint(&small));
/// ```
pub struct PersistentSet<T> {
    entries: PersistentMap<T, ()>,
}

impl<T> PersistentSet<T> {
    /// The empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: PersistentMap::new(),
        }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the set has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> PersistentSetIterator<'_, T> {
        PersistentSetIterator {
            inner: self.entries.iter(),
        }
    }

    /// The smallest element.
    pub fn first(&self) -> Option<&T> {
        self.entries.min().map(|(element, ())| element)
    }

    /// The largest element.
    pub fn last(&self) -> Option<&T> {
        self.entries.max().map(|(element, ())| element)
    }
}

impl<T: Ord> PersistentSet<T> {
    /// Returns `true` if `element` is in the set.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(element)
    }

    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the sets share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        !smaller.iter().any(|element| larger.contains(element))
    }
}

impl<T: Ord + Clone> PersistentSet<T> {
    /// A one-element set.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().insert(element)
    }

    /// A new set containing `element`.
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        Self {
            entries: self.entries.insert(element, ()),
        }
    }

    /// A new set without `element`.
    #[must_use]
    pub fn remove<Q>(&self, element: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self {
            entries: self.entries.remove(element),
        }
    }

    /// Elements in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            entries: self.entries.merge(&other.entries),
        }
    }

    /// Elements in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.filter(|element| other.contains(element))
    }

    /// Elements of `self` not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.filter(|element| !other.contains(element))
    }

    /// Elements in exactly one of the sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Applies `function` to every element; equal images collapse into one.
    pub fn map<U, F>(&self, function: F) -> PersistentSet<U>
    where
        U: Ord + Clone,
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// The elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            entries: self.entries.filter(|element, ()| predicate(element)),
        }
    }

    /// Copies the elements, in ascending order, into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for PersistentSet<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> Default for PersistentSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order iterator over a [`PersistentSet`].
pub struct PersistentSetIterator<'a, T> {
    inner: PersistentMapIterator<'a, T, ()>,
}

impl<'a, T> Iterator for PersistentSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for PersistentSetIterator<'_, T> {}

impl<'a, T> IntoIterator for &'a PersistentSet<T> {
    type Item = &'a T;
    type IntoIter = PersistentSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + Clone> FromIterator<T> for PersistentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            entries: iterator.into_iter().map(|element| (element, ())).collect(),
        }
    }
}

impl<T: PartialEq> PartialEq for PersistentSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for PersistentSet<T> {}

impl<T: Hash> Hash for PersistentSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl<T: Ord + Clone> Semigroup for PersistentSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }
}

impl<T: Ord + Clone> Monoid for PersistentSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentSet<T>
where
    T: serde::Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements: Vec<T> = Vec::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}
