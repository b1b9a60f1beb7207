//! # untry
//!
//! Run a unit of work and get a value-or-fault pair back.
//!
//! ## Overview
//!
//! This library provides one construct: a wrapper that executes a callable
//! (synchronous or asynchronous), captures any fault it raises, runs
//! registered cleanup exactly once regardless of outcome, and returns a
//! uniform [`Outcome`](outcome::Outcome) instead of propagating the fault up
//! the call stack. It includes:
//!
//! - **Outcome**: a tagged-union result pair, convertible to `(value, fault)`
//! - **Fault**: an adopted error value with a fixed structured rendering
//! - **Scopes**: deferred cleanup lists invoked on every exit path
//! - **Entry Points**: `run`/`try_run` and their async counterparts
//!
//! ## Feature Flags
//!
//! - `async`: async entry points (`run_async`, `try_run_async`) and
//!   [`AsyncScope`](catch::AsyncScope)
//! - `serde`: the structured fault rendering `{marker, name, message}`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use untry::prelude::*;
//!
//! let (value, fault) = run(|_| 21 * 2).into_pair();
//! assert_eq!(value, Some(42));
//! assert!(fault.is_none());
//!
//! let (value, fault) = run(|_| -> i32 { panic!("boom") }).into_pair();
//! assert!(value.is_none());
//! assert_eq!(fault.unwrap().message(), "boom");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use untry::prelude::*;
/// ```
pub mod prelude {

    pub use crate::catch::*;

    pub use crate::fault::*;

    pub use crate::outcome::*;
}

pub mod catch;

pub mod fault;

pub mod outcome;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
