//! Asynchronous entry points.

use std::any::Any;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use futures::FutureExt;

use crate::fault::Fault;
use crate::outcome::Outcome;

use super::async_scope::AsyncScope;

/// Runs an infallible async callable, capturing panics into the outcome.
///
/// The callable receives an [`AsyncScope`] handle and returns the future to
/// drive. Panics raised while building the future or while polling it are
/// both adopted via [`Fault::from_panic`]. The returned future always
/// resolves to an [`Outcome`] - a fault is never re-raised toward the
/// caller - and cleanups run after settlement, before the outcome resolves.
///
/// Nothing executes until the returned future is first polled.
///
/// # Panics
///
/// Same adoption guard as [`run`](super::run): a non-error-like panic
/// payload resumes unwinding after cleanups have run.
///
/// # Examples
///
/// ```rust
/// use untry::catch::run_async;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let (value, fault) = run_async(|_| async { 21 * 2 }).await.into_pair();
/// assert_eq!(value, Some(42));
/// assert!(fault.is_none());
/// # });
/// ```
pub async fn run_async<T, F, Fut>(callable: F) -> Outcome<T>
where
    F: FnOnce(AsyncScope) -> Fut,
    Fut: Future<Output = T>,
{
    let scope = AsyncScope::new();
    let handle = scope.clone();
    let future = match catch_unwind(AssertUnwindSafe(move || callable(handle))) {
        Ok(future) => future,
        Err(payload) => return settle_panic(scope, payload).await,
    };

    let settled = AssertUnwindSafe(future).catch_unwind().await;
    match settled {
        Ok(value) => {
            scope.settle(None).await;
            Outcome::Value(value)
        }
        Err(payload) => settle_panic(scope, payload).await,
    }
}

/// Runs a fallible async callable, capturing both `Err` resolutions and
/// panics.
///
/// A future resolving to `Err` is the rejection channel: the error is
/// adopted via its `Into<Fault>` conversion, so a future resolving to an
/// already-tagged [`Fault`] gets that very fault back in the outcome. The
/// returned future always resolves.
///
/// # Panics
///
/// Same adoption guard as [`run`](super::run).
///
/// # Examples
///
/// ```rust
/// use untry::catch::try_run_async;
/// use untry::fault::Fault;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let outcome = try_run_async(|_| async { Err::<i32, _>(Fault::new("y")) }).await;
/// let (value, fault) = outcome.into_pair();
/// assert!(value.is_none());
/// assert_eq!(fault.unwrap().message(), "y");
/// # });
/// ```
pub async fn try_run_async<T, E, F, Fut>(callable: F) -> Outcome<T>
where
    F: FnOnce(AsyncScope) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    let scope = AsyncScope::new();
    let handle = scope.clone();
    let future = match catch_unwind(AssertUnwindSafe(move || callable(handle))) {
        Ok(future) => future,
        Err(payload) => return settle_panic(scope, payload).await,
    };

    let settled = AssertUnwindSafe(future).catch_unwind().await;
    match settled {
        Ok(Ok(value)) => {
            scope.settle(None).await;
            Outcome::Value(value)
        }
        Ok(Err(error)) => {
            let fault = error.into();
            scope.settle(Some(&fault)).await;
            Outcome::Fault(fault)
        }
        Err(payload) => settle_panic(scope, payload).await,
    }
}

/// Adopts a captured panic payload and settles the scope.
///
/// When the payload trips the adoption guard, cleanups still run before the
/// guard propagates, mirroring the synchronous path.
async fn settle_panic<T>(scope: AsyncScope, payload: Box<dyn Any + Send>) -> Outcome<T> {
    let adopted = catch_unwind(AssertUnwindSafe(|| Fault::from_panic(payload)));
    match adopted {
        Ok(fault) => {
            scope.settle(Some(&fault)).await;
            Outcome::Fault(fault)
        }
        Err(guard) => {
            scope.settle(None).await;
            resume_unwind(guard)
        }
    }
}
