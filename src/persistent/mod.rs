//! Persistent (immutable) collections with structural sharing.
//!
//! - [`PersistentList`]: singly-linked list with O(1) `prepend`
//! - [`PersistentMap`]: ordered map (AVL tree) with O(log n) updates
//! - [`PersistentSet`]: ordered set built on [`PersistentMap`]
//!
//! Every update returns a new version and leaves the old one untouched. The
//! versions share whatever part of the structure the update did not change.
//!
//! With the `arc` feature the shared nodes are reference counted with
//! `Arc`, making the collections `Send + Sync`; the default is `Rc`.
//!
//! # Examples
//!
//! ```rust
//! use effectual::persistent::{PersistentList, PersistentMap, PersistentSet};
//!
//! let list = PersistentList::from_slice(&[2, 3]);
//! let extended = list.prepend(1);
//! assert_eq!(list.len(), 2);
//! assert_eq!(extended.to_vec(), vec![1, 2, 3]);
//! assert_eq!(extended.get(-1), Some(&3));
//!
//! let scores = PersistentMap::new().insert("ada", 3).insert("alan", 5);
//! let bumped = scores.insert("ada", 4);
//! assert_eq!(scores.get("ada"), Some(&3));
//! assert_eq!(bumped.get("ada"), Some(&4));
//!
//! let tags: PersistentSet<&str> = ["rust", "fp", "rust"].into_iter().collect();
//! assert_eq!(tags.len(), 2);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Shared pointer for collection nodes: `Arc` with the `arc` feature, `Rc`
/// otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;
mod map;
mod set;

pub use list::{PersistentList, PersistentListIntoIterator, PersistentListIterator};
pub use map::{KeyCollisionError, PersistentMap, PersistentMapIterator};
pub use set::{PersistentSet, PersistentSetIterator};

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn clones_share_one_allocation() {
        let shared: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1, 2]);
        let other = ReferenceCounter::clone(&shared);

        assert!(ReferenceCounter::ptr_eq(&shared, &other));
        assert_eq!(ReferenceCounter::strong_count(&shared), 2);
        drop(other);
        assert_eq!(ReferenceCounter::strong_count(&shared), 1);
    }

    #[rstest]
    fn structural_sharing_holds_references() {
        let base = super::PersistentList::from_slice(&[1, 2, 3]);
        let versions: Vec<_> = (0..4).map(|n| base.prepend(n)).collect();

        assert_eq!(versions.len(), 4);
        assert!(versions.iter().all(|version| version.len() == 4));
        assert_eq!(base.to_vec(), vec![1, 2, 3]);
    }
}
