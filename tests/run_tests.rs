//! Unit tests for the synchronous entry points.
//!
//! Tests cover:
//! - Value and panic classification in `run`
//! - `Err` classification in `try_run` (deliberate failure, returned not raised)
//! - Cleanup ordering, exactly-once execution, and fault visibility
//! - Cleanup-panic isolation
//! - The preserved adoption-guard asymmetry

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use untry::catch::{run, try_run};
use untry::fault::Fault;

use rstest::rstest;

// =============================================================================
// Classification: run
// =============================================================================

#[rstest]
fn run_returns_value_pair_synchronously() {
    let (value, fault) = run(|_| 42).into_pair();
    assert_eq!(value, Some(42));
    assert!(fault.is_none());
}

#[rstest]
fn run_captures_panic_as_fault() {
    let (value, fault) = run(|_| -> i32 { panic!("x") }).into_pair();
    assert!(value.is_none());
    let fault = fault.unwrap();
    assert_eq!(fault.message(), "x");
    assert_eq!(fault.name(), "Panic");
}

#[rstest]
fn run_captures_deliberate_fault_raised_via_panic_any() {
    let outcome = run(|_| -> i32 {
        std::panic::panic_any(Fault::new("deliberate").with_name("Custom"));
    });
    let fault = outcome.unwrap_fault();
    assert_eq!(fault.name(), "Custom");
    assert_eq!(fault.message(), "deliberate");
}

// =============================================================================
// Classification: try_run
// =============================================================================

#[rstest]
fn try_run_ok_is_a_value() {
    let outcome = try_run(|_| "42".parse::<i32>());
    assert_eq!(outcome.value(), Some(42));
}

#[rstest]
fn try_run_err_is_adopted_as_fault() {
    let outcome = try_run(|_| "nope".parse::<i32>());
    let fault = outcome.unwrap_fault();
    assert_eq!(fault.message(), "invalid digit found in string");
    assert!(fault.source().is_some());
}

/// A callable that returns (rather than raises) an already-tagged fault gets
/// that very fault back in the outcome.
#[rstest]
fn try_run_returned_fault_comes_back_verbatim() {
    let (value, fault) = try_run(|_| Err::<i32, _>(Fault::new("known").with_name("Custom"))).into_pair();
    assert!(value.is_none());
    let fault = fault.unwrap();
    assert_eq!(fault.name(), "Custom");
    assert_eq!(fault.message(), "known");
}

#[rstest]
fn try_run_panic_still_captured() {
    let outcome = try_run(|_| -> Result<i32, Fault> { panic!("late") });
    assert_eq!(outcome.unwrap_fault().message(), "late");
}

// =============================================================================
// Cleanup: exactly once, after settlement, before the outcome
// =============================================================================

#[rstest]
fn cleanup_runs_exactly_once_on_success() {
    let released = Arc::new(AtomicUsize::new(0));
    let probe = released.clone();

    let outcome = run(move |scope| {
        scope.defer(move |_| {
            probe.fetch_add(1, Ordering::SeqCst);
        });
        1
    });

    assert_eq!(outcome.value(), Some(1));
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[rstest]
fn cleanup_runs_exactly_once_on_panic() {
    let released = Arc::new(AtomicUsize::new(0));
    let probe = released.clone();

    let outcome = run(move |scope| -> i32 {
        scope.defer(move |_| {
            probe.fetch_add(1, Ordering::SeqCst);
        });
        panic!("x")
    });

    assert!(outcome.is_fault());
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[rstest]
fn cleanup_runs_exactly_once_on_err() {
    let released = Arc::new(AtomicUsize::new(0));
    let probe = released.clone();

    let outcome = try_run(move |scope| {
        scope.defer(move |_| {
            probe.fetch_add(1, Ordering::SeqCst);
        });
        Err::<i32, _>(Fault::new("known"))
    });

    assert!(outcome.is_fault());
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[rstest]
fn cleanup_observes_fault_on_failure_paths_only() {
    let observed = Arc::new(Mutex::new(Vec::new()));

    let probe = observed.clone();
    let _ = run(move |scope| {
        scope.defer(move |fault| {
            probe.lock().unwrap().push(fault.is_some());
        });
        1
    });

    let probe = observed.clone();
    let _ = run(move |scope| -> i32 {
        scope.defer(move |fault| {
            probe.lock().unwrap().push(fault.is_some());
        });
        panic!("x")
    });

    let probe = observed.clone();
    let _ = try_run(move |scope| {
        scope.defer(move |fault| {
            probe.lock().unwrap().push(fault.is_some());
        });
        Err::<i32, _>(Fault::new("known"))
    });

    assert_eq!(*observed.lock().unwrap(), vec![false, true, true]);
}

#[rstest]
fn cleanup_sees_the_message_of_the_captured_panic() {
    let observed = Arc::new(Mutex::new(None));
    let probe = observed.clone();

    let _ = run(move |scope| -> i32 {
        scope.defer(move |fault| {
            *probe.lock().unwrap() = fault.map(|fault| fault.message().to_string());
        });
        panic!("what happened")
    });

    assert_eq!(observed.lock().unwrap().as_deref(), Some("what happened"));
}

#[rstest]
fn cleanups_run_newest_first() {
    let order = Arc::new(Mutex::new(Vec::new()));

    let first = order.clone();
    let second = order.clone();
    let _ = run(move |scope| {
        scope.defer(move |_| first.lock().unwrap().push(1));
        scope.defer(move |_| second.lock().unwrap().push(2));
    });

    assert_eq!(*order.lock().unwrap(), vec![2, 1]);
}

// =============================================================================
// Cleanup-Panic Isolation
// =============================================================================

#[rstest]
fn cleanup_panic_never_alters_a_success_outcome() {
    let outcome = run(|scope| {
        scope.defer(|_| panic!("cleanup broke"));
        42
    });
    assert_eq!(outcome.value(), Some(42));
}

#[rstest]
fn cleanup_panic_never_alters_a_failure_outcome() {
    let outcome = try_run(|scope| {
        scope.defer(|_| panic!("cleanup broke"));
        Err::<i32, _>(Fault::new("primary"))
    });
    assert_eq!(outcome.unwrap_fault().message(), "primary");
}

// =============================================================================
// Adoption-Guard Asymmetry
// =============================================================================

/// A non-error-like panic payload escapes the pair protocol entirely - the
/// original payload resumes unwinding out of `run`.
#[rstest]
fn non_error_like_payload_escapes_run() {
    let escaped = catch_unwind(AssertUnwindSafe(|| {
        run(|_| -> i32 { std::panic::panic_any(17_i32) })
    }))
    .unwrap_err();
    assert_eq!(escaped.downcast_ref::<i32>(), Some(&17));
}

/// Even on the escape path, registered cleanups still run first.
#[rstest]
fn cleanups_still_run_on_the_escape_path() {
    let released = Arc::new(AtomicUsize::new(0));
    let probe = released.clone();

    let _ = catch_unwind(AssertUnwindSafe(move || {
        run(move |scope| -> i32 {
            scope.defer(move |_| {
                probe.fetch_add(1, Ordering::SeqCst);
            });
            std::panic::panic_any(17_i32)
        })
    }));

    assert_eq!(released.load(Ordering::SeqCst), 1);
}
