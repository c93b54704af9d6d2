//! Persistent ordered map.
//!
//! [`PersistentMap`] is an AVL tree with path copying. `insert` and `remove`
//! copy only the O(log n) nodes on the path to the key and share every other
//! subtree with the original map, which stays valid and unchanged.
//!
//! Iteration is in ascending key order.
//!
//! # Re-keying
//!
//! [`PersistentMap::map_keys`] can send two source keys to the same new key.
//! Each variant picks an explicit policy for that case:
//!
//! | Method | On collision |
//! |--------|--------------|
//! | `map_keys` | last wins, in ascending source-key order |
//! | `map_keys_collect` | every value kept, in ascending source-key order |
//! | `try_map_keys` | fails with [`KeyCollisionError`] |
//! | `map_keys_with` | a caller-supplied resolver combines the values |
//!
//! ```rust
//! use effectual::persistent::{PersistentList, PersistentMap};
//!
//! let letters: PersistentMap<i32, char> = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
//!
//! let last_wins = letters.map_keys(|key| key / 2);
//! assert_eq!(last_wins.to_vec(), vec![(0, 'a'), (1, 'c')]);
//!
//! let collected = letters.map_keys_collect(|key| key / 2);
//! assert_eq!(collected.get(&0), Some(&PersistentList::from_slice(&['a'])));
//! assert_eq!(collected.get(&1), Some(&PersistentList::from_slice(&['b', 'c'])));
//!
//! assert!(letters.try_map_keys(|key| key / 2).is_err());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ReferenceCounter;
use super::list::PersistentList;
use crate::typeclass::{Monoid, Semigroup};

// =============================================================================
// KeyCollisionError
// =============================================================================

/// Two source keys were re-keyed to the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollisionError<K> {
    key: K,
}

impl<K> KeyCollisionError<K> {
    /// The key produced more than once.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the error, returning the key.
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Debug> fmt::Display for KeyCollisionError<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "key {:?} produced by more than one source key", self.key)
    }
}

impl<K: fmt::Debug> std::error::Error for KeyCollisionError<K> {}

// =============================================================================
// Tree nodes
// =============================================================================

struct Node<K, V> {
    key: K,
    value: V,
    height: usize,
    left: Link<K, V>,
    right: Link<K, V>,
}

type Link<K, V> = Option<ReferenceCounter<Node<K, V>>>;

fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn make<K, V>(key: K, value: V, left: Link<K, V>, right: Link<K, V>) -> ReferenceCounter<Node<K, V>> {
    let height = height(&left).max(height(&right)) + 1;
    ReferenceCounter::new(Node {
        key,
        value,
        height,
        left,
        right,
    })
}

/// Builds a node whose subtrees differ in height by at most two, rotating
/// once or twice to restore the AVL invariant.
fn balance<K: Clone, V: Clone>(
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
) -> ReferenceCounter<Node<K, V>> {
    let left_height = height(&left);
    let right_height = height(&right);

    if left_height > right_height + 1 {
        if let Some(pivot) = &left {
            if height(&pivot.left) >= height(&pivot.right) {
                return make(
                    pivot.key.clone(),
                    pivot.value.clone(),
                    pivot.left.clone(),
                    Some(make(key, value, pivot.right.clone(), right)),
                );
            }
            if let Some(inner) = &pivot.right {
                return make(
                    inner.key.clone(),
                    inner.value.clone(),
                    Some(make(pivot.key.clone(), pivot.value.clone(), pivot.left.clone(), inner.left.clone())),
                    Some(make(key, value, inner.right.clone(), right)),
                );
            }
        }
    } else if right_height > left_height + 1 {
        if let Some(pivot) = &right {
            if height(&pivot.right) >= height(&pivot.left) {
                return make(
                    pivot.key.clone(),
                    pivot.value.clone(),
                    Some(make(key, value, left, pivot.left.clone())),
                    pivot.right.clone(),
                );
            }
            if let Some(inner) = &pivot.left {
                return make(
                    inner.key.clone(),
                    inner.value.clone(),
                    Some(make(key, value, left, inner.left.clone())),
                    Some(make(pivot.key.clone(), pivot.value.clone(), inner.right.clone(), pivot.right.clone())),
                );
            }
        }
    }

    make(key, value, left, right)
}

/// Returns the new subtree and whether the key was new.
fn insert_into<K: Ord + Clone, V: Clone>(
    link: &Link<K, V>,
    key: K,
    value: V,
) -> (ReferenceCounter<Node<K, V>>, bool) {
    let Some(node) = link else {
        return (make(key, value, None, None), true);
    };
    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, added) = insert_into(&node.left, key, value);
            let rebuilt = balance(node.key.clone(), node.value.clone(), Some(left), node.right.clone());
            (rebuilt, added)
        }
        Ordering::Greater => {
            let (right, added) = insert_into(&node.right, key, value);
            let rebuilt = balance(node.key.clone(), node.value.clone(), node.left.clone(), Some(right));
            (rebuilt, added)
        }
        Ordering::Equal => (make(key, value, node.left.clone(), node.right.clone()), false),
    }
}

/// Returns the new subtree, or `None` when the key is absent.
fn remove_from<K, V, Q>(link: &Link<K, V>, key: &Q) -> Option<Link<K, V>>
where
    K: Borrow<Q> + Clone,
    V: Clone,
    Q: Ord + ?Sized,
{
    let node = link.as_ref()?;
    match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let left = remove_from(&node.left, key)?;
            Some(Some(balance(node.key.clone(), node.value.clone(), left, node.right.clone())))
        }
        Ordering::Greater => {
            let right = remove_from(&node.right, key)?;
            Some(Some(balance(node.key.clone(), node.value.clone(), node.left.clone(), right)))
        }
        Ordering::Equal => Some(match (&node.left, &node.right) {
            (None, _) => node.right.clone(),
            (_, None) => node.left.clone(),
            (Some(_), Some(right)) => {
                let (successor_key, successor_value, rest) = remove_min(right);
                Some(balance(successor_key, successor_value, node.left.clone(), rest))
            }
        }),
    }
}

fn remove_min<K: Clone, V: Clone>(node: &ReferenceCounter<Node<K, V>>) -> (K, V, Link<K, V>) {
    match &node.left {
        None => (node.key.clone(), node.value.clone(), node.right.clone()),
        Some(left) => {
            let (key, value, rest) = remove_min(left);
            let rebuilt = balance(node.key.clone(), node.value.clone(), rest, node.right.clone());
            (key, value, Some(rebuilt))
        }
    }
}

fn map_values_of<K: Clone, V, W, F>(link: &Link<K, V>, function: &mut F) -> Link<K, W>
where
    F: FnMut(&V) -> W,
{
    link.as_ref().map(|node| {
        let left = map_values_of(&node.left, function);
        let value = function(&node.value);
        let right = map_values_of(&node.right, function);
        ReferenceCounter::new(Node {
            key: node.key.clone(),
            value,
            height: node.height,
            left,
            right,
        })
    })
}

// =============================================================================
// PersistentMap
// =============================================================================

/// An immutable ordered map with structural sharing.
pub struct PersistentMap<K, V> {
    root: Link<K, V>,
    length: usize,
}

impl<K, V> PersistentMap<K, V> {
    /// The empty map.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, length: 0 }
    }

    /// Number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` when the map has no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> PersistentMapIterator<'_, K, V> {
        let mut iterator = PersistentMapIterator {
            stack: Vec::new(),
            remaining: self.length,
        };
        iterator.descend_left(self.root.as_deref());
        iterator
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// The entry with the smallest key.
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// The entry with the largest key.
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Height of the tree; at most about 1.44 log2(n + 2).
    #[cfg(test)]
    fn height(&self) -> usize {
        height(&self.root)
    }
}

impl<K: Ord, V> PersistentMap<K, V> {
    /// The value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns `true` if `key` has an entry.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<K: Ord + Clone, V: Clone> PersistentMap<K, V> {
    /// A one-entry map.
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self::new().insert(key, value)
    }

    /// A new map with `key` bound to `value`.
    ///
    /// ```rust
    /// use effectual::persistent::PersistentMap;
    ///
    /// let original = PersistentMap::singleton("a", 1);
    /// let updated = original.insert("a", 2).insert("b", 3);
    ///
    /// assert_eq!(original.get("a"), Some(&1));
    /// assert_eq!(updated.get("a"), Some(&2));
    /// assert_eq!(updated.len(), 2);
    /// ```
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let (root, added) = insert_into(&self.root, key, value);
        Self {
            root: Some(root),
            length: self.length + usize::from(added),
        }
    }

    /// A new map without `key`. An absent key returns a map sharing the whole
    /// tree.
    #[must_use]
    pub fn remove<Q>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        remove_from(&self.root, key).map_or_else(
            || self.clone(),
            |root| Self {
                root,
                length: self.length - 1,
            },
        )
    }

    /// Transforms every value; keys and tree shape are kept.
    pub fn map_values<W, F>(&self, mut function: F) -> PersistentMap<K, W>
    where
        F: FnMut(&V) -> W,
    {
        PersistentMap {
            root: map_values_of(&self.root, &mut function),
            length: self.length,
        }
    }

    /// Re-keys every entry; when keys collide the value of the greatest
    /// source key wins.
    pub fn map_keys<K2, F>(&self, mut function: F) -> PersistentMap<K2, V>
    where
        K2: Ord + Clone,
        F: FnMut(&K) -> K2,
    {
        self.iter().fold(PersistentMap::new(), |map, (key, value)| {
            map.insert(function(key), value.clone())
        })
    }

    /// Re-keys every entry, keeping all colliding values in ascending
    /// source-key order.
    pub fn map_keys_collect<K2, F>(&self, mut function: F) -> PersistentMap<K2, PersistentList<V>>
    where
        K2: Ord + Clone,
        F: FnMut(&K) -> K2,
    {
        let mut groups: BTreeMap<K2, Vec<V>> = BTreeMap::new();
        for (key, value) in self {
            groups.entry(function(key)).or_default().push(value.clone());
        }
        groups
            .into_iter()
            .map(|(key, values)| (key, values.into_iter().collect()))
            .collect()
    }

    /// Re-keys every entry, failing on the first collision.
    ///
    /// # Errors
    ///
    /// Returns [`KeyCollisionError`] naming the first new key produced twice.
    pub fn try_map_keys<K2, F>(&self, mut function: F) -> Result<PersistentMap<K2, V>, KeyCollisionError<K2>>
    where
        K2: Ord + Clone,
        F: FnMut(&K) -> K2,
    {
        let mut result = PersistentMap::new();
        for (key, value) in self {
            let new_key = function(key);
            if result.contains_key(&new_key) {
                return Err(KeyCollisionError { key: new_key });
            }
            result = result.insert(new_key, value.clone());
        }
        Ok(result)
    }

    /// Re-keys every entry, combining colliding values with
    /// `resolver(key, existing, incoming)` in ascending source-key order.
    pub fn map_keys_with<K2, F, R>(&self, mut function: F, mut resolver: R) -> PersistentMap<K2, V>
    where
        K2: Ord + Clone,
        F: FnMut(&K) -> K2,
        R: FnMut(&K2, &V, &V) -> V,
    {
        let mut result: PersistentMap<K2, V> = PersistentMap::new();
        for (key, value) in self {
            let new_key = function(key);
            let resolved = match result.get(&new_key) {
                Some(existing) => resolver(&new_key, existing, value),
                None => value.clone(),
            };
            result = result.insert(new_key, resolved);
        }
        result
    }

    /// Union of both maps; on a shared key the value from `other` wins.
    ///
    /// ```rust
    /// use effectual::persistent::PersistentMap;
    ///
    /// let defaults: PersistentMap<&str, u32> = [("retries", 3), ("timeout", 30)].into_iter().collect();
    /// let overrides = PersistentMap::singleton("timeout", 5);
    ///
    /// let settings = defaults.merge(&overrides);
    /// assert_eq!(settings.get("timeout"), Some(&5));
    /// assert_eq!(settings.get("retries"), Some(&3));
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if self.length >= other.length {
            other
                .iter()
                .fold(self.clone(), |map, (key, value)| map.insert(key.clone(), value.clone()))
        } else {
            self.iter().fold(other.clone(), |map, (key, value)| {
                if map.contains_key(key) {
                    map
                } else {
                    map.insert(key.clone(), value.clone())
                }
            })
        }
    }

    /// Union of both maps; a shared key gets `combine(key, ours, theirs)`.
    #[must_use]
    pub fn merge_with<F>(&self, other: &Self, mut combine: F) -> Self
    where
        F: FnMut(&K, &V, &V) -> V,
    {
        other.iter().fold(self.clone(), |map, (key, theirs)| {
            let value = match map.get(key) {
                Some(ours) => combine(key, ours, theirs),
                None => theirs.clone(),
            };
            map.insert(key.clone(), value)
        })
    }

    /// The entries satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .filter(|(key, value)| predicate(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Copies the entries, in ascending key order, into a `Vec`.
    pub fn to_vec(&self) -> Vec<(K, V)> {
        self.iter().map(|(key, value)| (key.clone(), value.clone())).collect()
    }
}

impl<K, V> Clone for PersistentMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
        }
    }
}

impl<K, V> Default for PersistentMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// In-order iterator over a [`PersistentMap`].
pub struct PersistentMapIterator<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> PersistentMapIterator<'a, K, V> {
    fn descend_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for PersistentMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for PersistentMapIterator<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a PersistentMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = PersistentMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord + Clone, V: Clone> IntoIterator for PersistentMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

impl<K: Ord + Clone, V: Clone> FromIterator<(K, V)> for PersistentMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .fold(Self::new(), |map, (key, value)| map.insert(key, value))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: PartialEq, V: PartialEq> PartialEq for PersistentMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for PersistentMap<K, V> {}

impl<K: Hash, V: Hash> Hash for PersistentMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for entry in self {
            entry.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PersistentMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for PersistentMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

/// Right-biased union, matching [`PersistentMap::merge`].
impl<K: Ord + Clone, V: Clone> Semigroup for PersistentMap<K, V> {
    fn combine(self, other: Self) -> Self {
        self.merge(&other)
    }
}

impl<K: Ord + Clone, V: Clone> Monoid for PersistentMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for PersistentMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
struct PersistentMapVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for PersistentMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord + Clone,
    V: serde::Deserialize<'de> + Clone,
{
    type Value = PersistentMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = PersistentMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map = map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for PersistentMap<K, V>
where
    K: serde::Deserialize<'de> + Ord + Clone,
    V: serde::Deserialize<'de> + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(PersistentMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentMap<String, i32>: Send, Sync);
