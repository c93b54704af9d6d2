#![cfg(feature = "arc")]

//! With the `arc` feature the collections can be shared between threads.

use std::sync::Arc;
use std::thread;

use effectual::persistent::{PersistentList, PersistentMap, PersistentSet};
use rstest::rstest;

#[rstest]
fn threads_extend_a_shared_list_independently() {
    let base = Arc::new(PersistentList::from_slice(&[10, 20, 30]));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let base = Arc::clone(&base);
            thread::spawn(move || base.prepend(worker).to_vec())
        })
        .collect();

    for (worker, handle) in handles.into_iter().enumerate() {
        let expected = vec![i32::try_from(worker).unwrap(), 10, 20, 30];
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(base.len(), 3);
}

#[rstest]
fn map_and_set_versions_move_across_threads() {
    let map: PersistentMap<u32, String> = (0..50).map(|n| (n, n.to_string())).collect();
    let set: PersistentSet<u32> = (0..50).filter(|n| n % 5 == 0).collect();

    let handle = thread::spawn(move || {
        let trimmed = map.filter(|key, _| set.contains(key));
        (trimmed.len(), trimmed.get(&45).cloned())
    });

    assert_eq!(handle.join().unwrap(), (10, Some("45".to_string())));
}
