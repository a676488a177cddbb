#![cfg(feature = "serde")]

//! Integration tests for serde support in lambars-rx.
//!
//! These tests verify that both containers serialize and deserialize with
//! serde_json, using serde's externally tagged enum representation.

use lambars_rx::control::{Either, Maybe};
use rstest::rstest;

// =============================================================================
// Maybe Integration Tests
// =============================================================================

#[rstest]
fn test_maybe_json_roundtrip() {
    let just: Maybe<Vec<u8>> = Maybe::Just(vec![1, 2, 3]);
    let nothing: Maybe<Vec<u8>> = Maybe::Nothing;

    let just_json = serde_json::to_string(&just).unwrap();
    let nothing_json = serde_json::to_string(&nothing).unwrap();

    assert_eq!(just_json, r#"{"Just":[1,2,3]}"#);
    assert_eq!(nothing_json, r#""Nothing""#);

    let restored_just: Maybe<Vec<u8>> = serde_json::from_str(&just_json).unwrap();
    let restored_nothing: Maybe<Vec<u8>> = serde_json::from_str(&nothing_json).unwrap();

    assert_eq!(just, restored_just);
    assert_eq!(nothing, restored_nothing);
}

#[rstest]
fn test_maybe_rejects_unknown_variant() {
    let result: Result<Maybe<i32>, _> = serde_json::from_str(r#"{"Some":1}"#);
    assert!(result.is_err());
}

// =============================================================================
// Either Integration Tests
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
fn test_nested_containers_json_roundtrip() {
    let nested: Either<String, Maybe<i32>> = Either::Right(Maybe::Just(7));
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, r#"{"Right":{"Just":7}}"#);
    let restored: Either<String, Maybe<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}
