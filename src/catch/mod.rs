//! Execution wrapper - run a unit of work, get an [`Outcome`] back.
//!
//! This module provides the crate's entry points. Each one executes a
//! user-supplied callable, captures any fault it raises, settles the
//! callable's cleanup scope exactly once, and folds everything into an
//! [`Outcome`] - faults are never re-raised toward the caller.
//!
//! Synchrony is a static choice, not a runtime probe: pick the entry point
//! matching the callable's shape.
//!
//! | Entry point | Callable returns | Fault channels |
//! |---|---|---|
//! | [`run`] | `T` | panic |
//! | [`try_run`] | `Result<T, E>` | panic, `Err` |
//! | [`run_async`] | `Future<Output = T>` | panic |
//! | [`try_run_async`] | `Future<Output = Result<T, E>>` | panic, `Err` |
//!
//! # Examples
//!
//! ```rust
//! use untry::catch::run;
//!
//! let (value, fault) = run(|_| 21 * 2).into_pair();
//! assert_eq!(value, Some(42));
//! assert!(fault.is_none());
//! ```
//!
//! [`Outcome`]: crate::outcome::Outcome

mod run;
mod scope;

pub use run::{run, try_run};
pub use scope::Scope;

#[cfg(feature = "async")]
mod async_run;

#[cfg(feature = "async")]
mod async_scope;

#[cfg(feature = "async")]
pub use async_run::{run_async, try_run_async};

#[cfg(feature = "async")]
pub use async_scope::AsyncScope;
