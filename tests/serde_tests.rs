#![cfg(feature = "serde")]

//! Serialization of the collections and error containers.

use effectual::control::{Cause, NonEmptyVec, Try, Validation};
use effectual::persistent::{PersistentList, PersistentMap, PersistentSet};
use rstest::rstest;

#[rstest]
fn persistent_list_is_a_json_array() {
    let list = PersistentList::from_slice(&[1, 2, 3]);
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3]");

    let restored: PersistentList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}

#[rstest]
fn persistent_map_is_a_json_object_in_key_order() {
    let map: PersistentMap<String, u8> = [("b".to_string(), 2), ("a".to_string(), 1)].into_iter().collect();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"a":1,"b":2}"#);

    let restored: PersistentMap<String, u8> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, map);
}

#[rstest]
fn persistent_set_deduplicates_on_read() {
    let restored: PersistentSet<u8> = serde_json::from_str("[3,1,3,2]").unwrap();
    assert_eq!(restored.to_vec(), vec![1, 2, 3]);
    assert_eq!(serde_json::to_string(&restored).unwrap(), "[1,2,3]");
}

#[rstest]
fn nested_collections_round_trip() {
    let nested: PersistentMap<u8, PersistentList<String>> =
        PersistentMap::singleton(1, PersistentList::from_slice(&["x".to_string(), "y".to_string()]));
    let json = serde_json::to_string(&nested).unwrap();
    let restored: PersistentMap<u8, PersistentList<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
}

#[rstest]
fn non_empty_vec_rejects_empty_array() {
    let parsed: Result<NonEmptyVec<i32>, _> = serde_json::from_str("[]");
    assert!(parsed.is_err());

    let parsed: NonEmptyVec<i32> = serde_json::from_str("[4,5]").unwrap();
    assert_eq!(parsed.into_vec(), vec![4, 5]);
}

#[rstest]
fn validation_and_try_round_trip() {
    let invalid: Validation<u32, String> = Validation::invalid("missing".to_string());
    let json = serde_json::to_string(&invalid).unwrap();
    assert_eq!(serde_json::from_str::<Validation<u32, String>>(&json).unwrap(), invalid);

    let failed: Try<u32> = Try::failure(Cause::new("io", "timed out"));
    let json = serde_json::to_string(&failed).unwrap();
    assert_eq!(serde_json::from_str::<Try<u32>>(&json).unwrap(), failed);
}
