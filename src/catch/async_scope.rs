//! Deferred-cleanup scope for the asynchronous entry points.

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::pin::Pin;
use std::sync::Arc;

use futures::FutureExt;
use parking_lot::Mutex;

use crate::fault::Fault;

type CleanupFuture = Pin<Box<dyn Future<Output = ()> + Send>>;
type Cleanup = Box<dyn FnOnce(Option<&Fault>) -> CleanupFuture + Send>;

/// A per-invocation list of deferred asynchronous cleanup actions.
///
/// The async counterpart of [`Scope`](super::Scope). The handle is cheaply
/// clonable so the wrapped future can move it into spawned sub-blocks and
/// register cleanups before or after suspension points; all clones feed the
/// same list, which the entry point drains exactly once at settlement, in
/// reverse registration order. Registrations after settlement never run.
///
/// A cleanup handler inspects the fault synchronously (by reference) and
/// returns the future to await; a panic raised while building or awaiting a
/// cleanup is caught and discarded.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use untry::catch::run_async;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let released = Arc::new(AtomicUsize::new(0));
/// let probe = released.clone();
///
/// let outcome = run_async(move |scope| async move {
///     scope.defer(move |_| async move {
///         probe.fetch_add(1, Ordering::SeqCst);
///     });
///     1
/// })
/// .await;
///
/// assert_eq!(outcome.value(), Some(1));
/// assert_eq!(released.load(Ordering::SeqCst), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct AsyncScope {
    cleanups: Arc<Mutex<Vec<Cleanup>>>,
}

impl AsyncScope {
    pub(crate) fn new() -> Self {
        Self {
            cleanups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registers an asynchronous cleanup action.
    ///
    /// The handler receives the fault on failure paths (`None` on success)
    /// and returns the future that performs the cleanup.
    pub fn defer<F, Fut>(&self, cleanup: F)
    where
        F: FnOnce(Option<&Fault>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cleanups
            .lock()
            .push(Box::new(move |fault| Box::pin(cleanup(fault))));
    }

    /// Drains and awaits every registered cleanup, newest first, discarding
    /// cleanup panics.
    pub(crate) async fn settle(self, fault: Option<&Fault>) {
        // Take the list out so no lock is held across an await point.
        let cleanups = std::mem::take(&mut *self.cleanups.lock());

        for cleanup in cleanups.into_iter().rev() {
            // A cleanup fault never surfaces and never alters the outcome;
            // a panic while building the future is discarded the same way.
            let Ok(future) = catch_unwind(AssertUnwindSafe(|| cleanup(fault))) else {
                continue;
            };
            drop(AssertUnwindSafe(future).catch_unwind().await);
        }
    }
}
