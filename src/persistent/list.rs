//! Persistent singly linked list.
//!
//! [`PersistentList`] is an immutable cons list. Every operation returns a
//! new list and leaves the receiver valid and unchanged; suffixes are shared
//! between versions through reference-counted nodes.
//!
//! | Operation | Time | New nodes |
//! |-----------|------|-----------|
//! | `prepend`, `head`, `tail`, `len` | O(1) | 0 or 1 |
//! | `get(i)` | O(i) | 0 |
//! | `drop_first(n)` | O(n) | 0 |
//! | `take(n)` | O(n) | n |
//! | `append`, `reverse`, `map`, `filter` | O(n) | n |
//! | `concat(other)` | O(len(self)) | len(self), `other` is shared |
//!
//! The length is cached in every list value, so `drop_first` derives the
//! length of the remaining chain as `len - n` without counting it.
//!
//! # Examples
//!
//! ```rust
//! use effectual::persistent::PersistentList;
//!
//! let base = PersistentList::from_slice(&[2, 3]);
//! let extended = base.prepend(1);
//!
//! assert_eq!(base.to_vec(), vec![2, 3]);
//! assert_eq!(extended.to_vec(), vec![1, 2, 3]);
//! assert_eq!(extended.get(-1), Some(&3));
//! assert_eq!(extended.drop_first(1), base);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::ReferenceCounter;
use crate::typeclass::{Monoid, Semigroup};

struct Node<T> {
    element: T,
    next: Link<T>,
}

type Link<T> = Option<ReferenceCounter<Node<T>>>;

/// An immutable singly linked list with structural sharing.
pub struct PersistentList<T> {
    head: Link<T>,
    length: usize,
}

impl<T> PersistentList<T> {
    /// The empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// A one-element list.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().prepend(element)
    }

    fn from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Link<T> = None;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node { element, next: head }));
        }
        Self { head, length }
    }

    /// A new list with `element` in front; the receiver becomes its tail.
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Alias for [`PersistentList::prepend`].
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        self.prepend(element)
    }

    /// The first element.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Everything after the first element, sharing the existing chain.
    ///
    /// The tail of the empty list is the empty list.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// The first element and the rest, or `None` when empty.
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let rest = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, rest)
        })
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` for the empty list.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Element at `index`, counting from the end when negative.
    ///
    /// `-1` is the last element. Any index outside the list, on either side,
    /// yields `None`.
    ///
    /// ```rust
    /// use effectual::persistent::PersistentList;
    ///
    /// let list = PersistentList::from_slice(&[1, 2, 3, 4, 5]);
    /// assert_eq!(list.get(-2), Some(&4));
    /// assert_eq!(list.get(5), None);
    /// assert_eq!(list.get(-6), None);
    /// ```
    pub fn get(&self, index: isize) -> Option<&T> {
        let position = if index < 0 {
            self.length.checked_sub(index.unsigned_abs())?
        } else {
            usize::try_from(index).ok()?
        };
        self.iter().nth(position)
    }

    /// The list after the first `count` elements.
    ///
    /// Walks `count` links and shares the remaining chain; no node is copied.
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let skipped = count.min(self.length);
        let mut current = self.head.as_ref();
        for _ in 0..skipped {
            current = current.and_then(|node| node.next.as_ref());
        }
        Self {
            head: current.cloned(),
            length: self.length - skipped,
        }
    }

    /// Iterates from head to tail.
    #[inline]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// A new list with `function` applied to each element, in order.
    pub fn map<B, F>(&self, function: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        PersistentList::from_vec(self.iter().map(function).collect())
    }

    /// Folds from head to tail.
    ///
    /// ```rust
    /// use effectual::persistent::PersistentList;
    ///
    /// let list = PersistentList::from_slice(&["a", "b", "c"]);
    /// assert_eq!(list.reduce(String::new(), |acc, s| acc + *s), "abc");
    /// ```
    pub fn reduce<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, function)
    }

    /// Returns `true` if both lists are the same chain.
    fn shares_chain_with(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Builds a list with the elements of `slice` in order.
    pub fn from_slice(slice: &[T]) -> Self {
        let mut list = Self::new();
        for element in slice.iter().rev() {
            list = list.prepend(element.clone());
        }
        list
    }

    /// A new list with `element` at the end.
    ///
    /// Every existing node precedes the change, so all of them are copied:
    /// O(n) time, an O(n) transient buffer, and no shared suffix.
    #[must_use]
    pub fn append(&self, element: T) -> Self {
        self.rebuild_onto(Self::singleton(element))
    }

    /// A new list with the elements of `other` after those of `self`.
    ///
    /// `other` is shared as the tail of the result.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        self.rebuild_onto(other.clone())
    }

    /// The first `count` elements.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.length {
            return self.clone();
        }
        Self::from_vec(self.iter().take(count).cloned().collect())
    }

    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, element| reversed.prepend(element.clone()))
    }

    /// The elements satisfying `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(self.iter().filter(|element| predicate(element)).cloned().collect())
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn rebuild_onto(&self, tail: Self) -> Self {
        let prefix: Vec<&T> = self.iter().collect();
        prefix
            .into_iter()
            .rev()
            .fold(tail, |list, element| list.prepend(element.clone()))
    }
}

impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        // `into_inner` hands the node to exactly one of two racing droppers.
        while let Some(node) = link {
            match ReferenceCounter::into_inner(node) {
                Some(mut node) => link = node.next.take(),
                None => break,
            }
        }
    }
}

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for PersistentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

/// Owning iterator over a [`PersistentList`].
///
/// Elements of nodes no other list shares are moved out; shared ones are
/// cloned.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.head.take()?;
        self.list.length -= 1;
        match ReferenceCounter::try_unwrap(node) {
            Ok(mut node) => {
                self.list.head = node.next.take();
                Some(node.element)
            }
            Err(shared) => {
                self.list.head = shared.next.clone();
                Some(shared.element.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentListIntoIterator<T> {}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from_vec(iterator.into_iter().collect())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && (self.shares_chain_with(other) || self.iter().eq(other.iter()))
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T: Clone> Semigroup for PersistentList<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(&other)
    }
}

impl<T: Clone> Monoid for PersistentList<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct PersistentListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(sequence.size_hint().unwrap_or(0));
        while let Some(element) = sequence.next_element()? {
            elements.push(element);
        }
        Ok(PersistentList::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<i32>: Send, Sync);


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_round_trip(elements in prop::collection::vec(any::<i32>(), 0..50)) {
            let list: PersistentList<i32> = elements.iter().copied().collect();
            prop_assert_eq!(list.to_vec(), elements);
        }

        #[test]
        fn prop_negative_index_mirrors_positive(elements in prop::collection::vec(any::<i8>(), 1..30), offset in 0usize..30) {
            let list = PersistentList::from_slice(&elements);
            let length = elements.len();
            let position = offset % length;
            let negative = -isize::try_from(length - position).unwrap();
            prop_assert_eq!(list.get(negative), elements.get(position));
        }

        #[test]
        fn prop_take_then_drop_restores(elements in prop::collection::vec(any::<u16>(), 0..40), count in 0usize..45) {
            let list = PersistentList::from_slice(&elements);
            prop_assert_eq!(list.take(count).concat(&list.drop_first(count)), list);
        }

        #[test]
        fn prop_map_composition(elements in prop::collection::vec(any::<i32>(), 0..30)) {
            let list = PersistentList::from_slice(&elements);
            let first = |x: &i32| i64::from(*x) * 3;
            let second = |x: &i64| x - 1;
            prop_assert_eq!(list.map(first).map(second), list.map(|x| second(&first(x))));
        }

        #[test]
        fn prop_monoid_identity(elements in prop::collection::vec(any::<i32>(), 0..30)) {
            let list = PersistentList::from_slice(&elements);
            prop_assert_eq!(PersistentList::empty().combine(list.clone()), list.clone());
            prop_assert_eq!(list.clone().combine(PersistentList::empty()), list);
        }

        #[test]
        fn prop_monoid_associativity(
            first in prop::collection::vec(any::<i32>(), 0..12),
            second in prop::collection::vec(any::<i32>(), 0..12),
            third in prop::collection::vec(any::<i32>(), 0..12)
        ) {
            let (first, second, third) = (
                PersistentList::from_slice(&first),
                PersistentList::from_slice(&second),
                PersistentList::from_slice(&third),
            );
            let left = first.clone().combine(second.clone()).combine(third.clone());
            let right = first.combine(second.combine(third));
            prop_assert_eq!(left, right);
        }
    }
}
