#![cfg(feature = "serde")]

//! JSON shape of serialized steps.

use sortviz_core::{BubbleSort, ElementIds, InsertionSort, SortAlgorithm, SortOrder};

#[test]
fn bubble_step_serializes_positions_and_phase() {
    let arr = ElementIds::new().build(&[2, 1]);
    let compare = BubbleSort::steps(&arr, SortOrder::Ascending)
        .nth(1)
        .expect("compare step");
    let json = serde_json::to_value(&compare).expect("serialize");
    assert_eq!(json["phase"], "compare");
    assert_eq!(json["comparing"], serde_json::json!([0, 1]));
    assert_eq!(json["array"][0]["value"], 2);
    assert_eq!(json["array"][0]["id"], 0);
}

#[test]
fn insertion_step_serializes_optional_indices() {
    let arr = ElementIds::new().build(&[2, 1]);
    let pick = InsertionSort::steps(&arr, SortOrder::Descending)
        .nth(1)
        .expect("pick step");
    let json = serde_json::to_value(&pick).expect("serialize");
    assert_eq!(json["phase"], "pick");
    assert_eq!(json["current_index"], 1);
    assert!(json["comparing_index"].is_null());
    assert_eq!(json["current"], 1);
}
