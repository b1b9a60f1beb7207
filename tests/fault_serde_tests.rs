#![cfg(feature = "serde")]
//! Wire-shape tests for the structured fault rendering.
//!
//! The rendering is a fixed contract: a fault always serializes to
//! `{ "marker": true, "name": <string>, "message": <string> }`, no matter
//! what else the fault carries, and repeated renderings are stable.

use serde_json::json;

use untry::fault::Fault;
use untry::outcome::Outcome;

use rstest::rstest;

// =============================================================================
// Fault Rendering
// =============================================================================

#[rstest]
fn fault_renders_the_fixed_shape() {
    let fault = Fault::new("x").with_name("Custom");
    assert_eq!(
        serde_json::to_value(&fault).unwrap(),
        json!({ "marker": true, "name": "Custom", "message": "x" })
    );
}

#[rstest]
fn fault_rendering_ignores_the_source() {
    let fault = Fault::tag(std::io::Error::other("lost connection"));
    assert_eq!(
        serde_json::to_value(&fault).unwrap(),
        json!({ "marker": true, "name": "Fault", "message": "lost connection" })
    );
}

#[rstest]
fn fault_rendering_is_stable_across_repetition() {
    let fault = Fault::new("stable").with_name("Custom");
    let first = serde_json::to_value(&fault).unwrap();
    let second = serde_json::to_value(&fault).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn retagging_does_not_change_the_rendering() {
    let fault = Fault::new("stable").with_name("Custom");
    let before = serde_json::to_value(&fault).unwrap();
    let retagged = Fault::tag(fault);
    assert_eq!(serde_json::to_value(&retagged).unwrap(), before);
}

// =============================================================================
// Outcome Pair Rendering
// =============================================================================

#[rstest]
fn value_outcome_renders_as_value_and_null() {
    let outcome: Outcome<i32> = Outcome::Value(42);
    assert_eq!(serde_json::to_value(&outcome).unwrap(), json!([42, null]));
}

#[rstest]
fn fault_outcome_renders_as_null_and_fault() {
    let outcome: Outcome<i32> = Outcome::Fault(Fault::new("y").with_name("Custom"));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!([null, { "marker": true, "name": "Custom", "message": "y" }])
    );
}
