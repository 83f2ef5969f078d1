#![cfg(feature = "serde")]
//! Serde round-trip tests for both container types.

use cowarray::persistent::{CowArray, PersistentList};
use rstest::rstest;

// =============================================================================
// CowArray
// =============================================================================

#[rstest]
fn test_array_serializes_as_sequence() {
    let array: CowArray<i32> = (1..=3).collect();
    let json = serde_json::to_string(&array).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_array_round_trip() {
    let array: CowArray<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
    let json = serde_json::to_string(&array).unwrap();
    let decoded: CowArray<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, array);
}

#[rstest]
fn test_empty_array_round_trip() {
    let array: CowArray<i32> = CowArray::new();
    let json = serde_json::to_string(&array).unwrap();
    assert_eq!(json, "[]");
    let decoded: CowArray<i32> = serde_json::from_str(&json).unwrap();
    assert!(decoded.is_empty());
}

// =============================================================================
// PersistentList
// =============================================================================

#[rstest]
fn test_list_serializes_as_sequence() {
    let list: PersistentList<i32> = (1..=3).collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_list_round_trip() {
    let list: PersistentList<i32> = (1..=10).collect();
    let json = serde_json::to_string(&list).unwrap();
    let decoded: PersistentList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, list);
}

// =============================================================================
// Cross-type
// =============================================================================

#[rstest]
fn test_array_and_list_share_wire_format() {
    let array: CowArray<i32> = (1..=5).collect();
    let json = serde_json::to_string(&array).unwrap();
    let list: PersistentList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, array.to_list());
}
