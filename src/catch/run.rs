//! Synchronous entry points.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use crate::fault::Fault;
use crate::outcome::Outcome;

use super::scope::Scope;

/// Runs an infallible callable, capturing panics into the outcome.
///
/// The callable receives a fresh [`Scope`] for registering cleanup. If it
/// returns, the outcome is `Value`; if it panics, the payload is adopted via
/// [`Fault::from_panic`] and the outcome is `Fault`. Either way, registered
/// cleanups run after settlement and before the outcome is returned.
///
/// For callables whose failure is a value rather than a panic, use
/// [`try_run`].
///
/// # Panics
///
/// A panic payload that is not error-like (not a string and not a [`Fault`])
/// trips the adoption guard: cleanups still run, then the original payload
/// resumes unwinding. This is the one fault path that escapes the pair
/// protocol.
///
/// # Examples
///
/// ```rust
/// use untry::catch::run;
///
/// let (value, fault) = run(|_| 21 * 2).into_pair();
/// assert_eq!(value, Some(42));
/// assert!(fault.is_none());
/// ```
///
/// ```rust
/// use untry::catch::run;
///
/// let (value, fault) = run(|_| -> i32 { panic!("boom") }).into_pair();
/// assert!(value.is_none());
/// assert_eq!(fault.unwrap().message(), "boom");
/// ```
pub fn run<T, F>(callable: F) -> Outcome<T>
where
    F: FnOnce(&mut Scope) -> T,
{
    let mut scope = Scope::new();
    let result = catch_unwind(AssertUnwindSafe(|| callable(&mut scope)));
    match result {
        Ok(value) => {
            scope.settle(None);
            Outcome::Value(value)
        }
        Err(payload) => settle_panic(scope, payload),
    }
}

/// Runs a fallible callable, capturing both `Err` returns and panics.
///
/// `Err` is the deliberate-failure channel: the error is adopted via its
/// `Into<Fault>` conversion, so a callable returning an already-tagged
/// [`Fault`] gets that very fault back in the outcome. Panics are captured
/// exactly as in [`run`].
///
/// # Panics
///
/// Same adoption guard as [`run`].
///
/// # Examples
///
/// ```rust
/// use untry::catch::try_run;
/// use untry::fault::Fault;
///
/// let (value, fault) = try_run(|_| Err::<i32, _>(Fault::new("known"))).into_pair();
/// assert!(value.is_none());
/// assert_eq!(fault.unwrap().message(), "known");
/// ```
///
/// ```rust
/// use untry::catch::try_run;
///
/// let outcome = try_run(|_| "42".parse::<i32>());
/// assert_eq!(outcome.value(), Some(42));
/// ```
pub fn try_run<T, E, F>(callable: F) -> Outcome<T>
where
    F: FnOnce(&mut Scope) -> Result<T, E>,
    E: Into<Fault>,
{
    let mut scope = Scope::new();
    let result = catch_unwind(AssertUnwindSafe(|| callable(&mut scope)));
    match result {
        Ok(Ok(value)) => {
            scope.settle(None);
            Outcome::Value(value)
        }
        Ok(Err(error)) => {
            let fault = error.into();
            scope.settle(Some(&fault));
            Outcome::Fault(fault)
        }
        Err(payload) => settle_panic(scope, payload),
    }
}

/// Adopts a captured panic payload and settles the scope.
///
/// When the payload trips the adoption guard, cleanups still run (with no
/// fault, since adoption produced none) before the guard propagates - the
/// cleanup-always-runs guarantee holds even on the escape path.
fn settle_panic<T>(scope: Scope, payload: Box<dyn Any + Send>) -> Outcome<T> {
    let adopted = catch_unwind(AssertUnwindSafe(|| Fault::from_panic(payload)));
    match adopted {
        Ok(fault) => {
            scope.settle(Some(&fault));
            Outcome::Fault(fault)
        }
        Err(guard) => {
            scope.settle(None);
            resume_unwind(guard)
        }
    }
}
