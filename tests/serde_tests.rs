//! Serde round trips for OrderedSet.
//!
//! A set serializes as a JSON array in set order, and deserializing an array
//! applies append semantics.

#![cfg(feature = "serde")]

use ordset::OrderedSet;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
struct Tag {
    name: String,
}

#[rstest]
fn test_serialize_empty() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
}

#[rstest]
fn test_serialize_keeps_set_order() {
    let mut set = OrderedSet::from_values([3, 1, 2]);
    set.prepend(9);

    assert_eq!(serde_json::to_string(&set).unwrap(), "[9,3,1,2]");
}

#[rstest]
fn test_deserialize_keeps_first_occurrence() {
    let set: OrderedSet<i32> = serde_json::from_str("[4,1,4,2,1]").unwrap();

    assert_eq!(set.to_vec(), vec![4, 1, 2]);
}

#[rstest]
fn test_deserialize_strings() {
    let set: OrderedSet<String> = serde_json::from_str(r#"["hello","world"]"#).unwrap();

    assert_eq!(set.len(), 2);
    assert!(set.contains("hello"));
    assert_eq!(set.front().map(String::as_str), Some("hello"));
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<OrderedSet<i32>, _> = serde_json::from_str(r#"{"a":1}"#);
    assert!(result.is_err());
}

#[rstest]
#[case::empty(vec![])]
#[case::single(vec![42])]
#[case::large((0..200).rev().collect())]
fn test_roundtrip(#[case] values: Vec<i32>) {
    let original = OrderedSet::from_values(values);
    let json = serde_json::to_string(&original).unwrap();
    let restored: OrderedSet<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[rstest]
fn test_roundtrip_after_reordering() {
    let mut original = OrderedSet::from_values([1, 2, 3, 4]);
    original.move_to(&1, &4, ordset::Position::After).unwrap();
    original.remove(&3);

    let json = serde_json::to_string(&original).unwrap();
    let restored: OrderedSet<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.to_vec(), vec![2, 4, 1]);
}

#[rstest]
fn test_roundtrip_structs() {
    let original = OrderedSet::from_values([
        Tag {
            name: "b".to_string(),
        },
        Tag {
            name: "a".to_string(),
        },
    ]);

    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(json, r#"[{"name":"b"},{"name":"a"}]"#);

    let restored: OrderedSet<Tag> = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}
