//! Fault type - an adopted error value with a fixed structured rendering.
//!
//! This module provides the [`Fault`] type, the failure side of an
//! [`Outcome`](crate::outcome::Outcome). A fault is produced in one of three
//! ways:
//!
//! - Adopting an error value via [`Fault::tag`] (or the blanket `From` impl)
//! - Constructing a deliberate failure via [`Fault::new`]
//! - Adopting a captured panic payload via [`Fault::from_panic`]
//!
//! The question "was this failure produced by the wrapper" is answered by the
//! [`Outcome`](crate::outcome::Outcome) variant a `Fault` sits in, not by a
//! hidden runtime property: holding a `Fault` at all means it went through
//! one of the constructors above.
//!
//! # Examples
//!
//! ```rust
//! use untry::fault::Fault;
//!
//! let fault = Fault::tag(std::io::Error::other("disk on fire")).with_name("IoFault");
//! assert_eq!(fault.name(), "IoFault");
//! assert_eq!(fault.message(), "disk on fire");
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;

/// Display name given to faults adopted from error values.
const TAGGED_NAME: &str = "Fault";

/// Display name given to faults adopted from panic payloads.
const PANIC_NAME: &str = "Panic";

/// A failure value adopted by the wrapper.
///
/// `Fault` carries a display name, a human-readable message, and (when it was
/// adopted from an error value) the original error as its source. It is the
/// left side of every failure [`Outcome`](crate::outcome::Outcome).
///
/// `Fault` intentionally does **not** implement [`std::error::Error`]: that
/// is what lets the blanket `From<E: Error>` conversion coexist with the
/// identity conversion, which in turn makes [`Fault::tag`] idempotent -
/// tagging a `Fault` hands it back unchanged.
///
/// # Examples
///
/// ```rust
/// use untry::fault::Fault;
///
/// let fault = Fault::new("known failure");
/// assert_eq!(fault.name(), "Fault");
/// assert_eq!(fault.message(), "known failure");
///
/// // Tagging twice never changes the message.
/// let retagged = Fault::tag(fault);
/// assert_eq!(retagged.message(), "known failure");
/// ```
#[derive(Debug)]
pub struct Fault {
    /// The display name, rendered first by `Display` and in the structured shape.
    name: String,
    /// The human-readable message.
    message: String,
    /// The adopted error, when the fault was tagged from one.
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl Fault {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a deliberate failure value with the default name.
    ///
    /// Use this to signal a known failure from a callable without having an
    /// underlying error value to adopt.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::fault::Fault;
    ///
    /// let fault = Fault::new("quota exceeded");
    /// assert_eq!(fault.message(), "quota exceeded");
    /// assert!(fault.source().is_none());
    /// ```
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            name: TAGGED_NAME.to_string(),
            message: message.into(),
            source: None,
        }
    }

    /// Adopts an error-like value as a fault.
    ///
    /// Accepts anything convertible into a `Fault`: every type implementing
    /// [`std::error::Error`] (via the blanket `From` impl), or a `Fault`
    /// itself, in which case this is the identity - the message and name are
    /// preserved exactly.
    ///
    /// Inputs that are not error-like do not convert; the "only accept
    /// error-like values" guard of this operation is a compile error rather
    /// than a runtime one. The runtime half of the guard lives in
    /// [`Fault::from_panic`], where payloads are type-erased.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::fault::Fault;
    ///
    /// let fault = Fault::tag(std::io::Error::other("lost connection"));
    /// assert_eq!(fault.message(), "lost connection");
    /// assert!(fault.source().is_some());
    /// ```
    #[inline]
    pub fn tag<E: Into<Self>>(error: E) -> Self {
        error.into()
    }

    /// Overrides the display name, returning the fault.
    ///
    /// This is the optional name argument of the tagging operation: it
    /// changes how the fault renders (both `Display` and the structured
    /// shape) without touching the message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::fault::Fault;
    ///
    /// let fault = Fault::new("no such user").with_name("LookupFault");
    /// assert_eq!(fault.name(), "LookupFault");
    /// assert_eq!(fault.message(), "no such user");
    /// ```
    #[must_use]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Adopts a captured panic payload as a fault.
    ///
    /// String payloads (`&'static str` and `String`, the payloads `panic!`
    /// produces) become faults named `"Panic"`. A `Fault` payload - a
    /// callable that raised a deliberate failure through
    /// [`std::panic::panic_any`] - is adopted unchanged.
    ///
    /// # Panics
    ///
    /// Panics on any other payload type. A non-error-like panic payload is a
    /// usage bug, not a runtime condition, and this guard is the one fault
    /// path that bypasses the pair protocol entirely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::panic::{AssertUnwindSafe, catch_unwind};
    /// use untry::fault::Fault;
    ///
    /// let payload = catch_unwind(AssertUnwindSafe(|| panic!("oops"))).unwrap_err();
    /// let fault = Fault::from_panic(payload);
    /// assert_eq!(fault.name(), "Panic");
    /// assert_eq!(fault.message(), "oops");
    /// ```
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(fault) => return *fault,
            Err(payload) => payload,
        };

        if let Some(message) = payload.downcast_ref::<&'static str>() {
            return Self {
                name: PANIC_NAME.to_string(),
                message: (*message).to_string(),
                source: None,
            };
        }

        match payload.downcast::<String>() {
            Ok(message) => Self {
                name: PANIC_NAME.to_string(),
                message: *message,
                source: None,
            },
            Err(_) => panic!("Fault::from_panic: only error-like panic payloads are accepted"),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the adopted error this fault was tagged from, if any.
    ///
    /// Faults produced by [`Fault::new`] or [`Fault::from_panic`] have no
    /// source.
    #[inline]
    pub fn source(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.name, self.message)
    }
}

// =============================================================================
// Equality
// =============================================================================

impl PartialEq for Fault {
    /// Two faults are equal when their names and messages are equal.
    ///
    /// The source is not compared: it is retained for chain inspection, not
    /// identity, and boxed errors carry no usable equality.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.message == other.message
    }
}

impl Eq for Fault {}

// =============================================================================
// From Implementations
// =============================================================================

impl<E: Error + Send + Sync + 'static> From<E> for Fault {
    /// Adopts any error value: the message is the error's `Display`
    /// rendering and the error itself is retained as the source.
    fn from(error: E) -> Self {
        Self {
            name: TAGGED_NAME.to_string(),
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

// =============================================================================
// Structured Rendering (requires serde feature)
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Fault {
    /// Renders the fault in the fixed wire shape
    /// `{ "marker": true, "name": <string>, "message": <string> }`.
    ///
    /// The shape never varies with the fault's other state (the source is
    /// not rendered), so repeated renderings are stable and equal.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut fault = serializer.serialize_struct("Fault", 3)?;
        fault.serialize_field("marker", &true)?;
        fault.serialize_field("name", &self.name)?;
        fault.serialize_field("message", &self.message)?;
        fault.end()
    }
}

static_assertions::assert_impl_all!(Fault: Send, Sync);
