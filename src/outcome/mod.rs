//! Outcome type - the value-or-fault result pair as a tagged union.
//!
//! This module provides the `Outcome<T>` type returned by every entry point
//! in [`catch`](crate::catch). An outcome is either a `Value(T)` or a
//! `Fault(Fault)` - never both, never neither. The pair shape of the
//! original protocol is recovered with [`Outcome::into_pair`], which by
//! construction yields exactly one populated side.
//!
//! # Examples
//!
//! ```rust
//! use untry::fault::Fault;
//! use untry::outcome::Outcome;
//!
//! let success: Outcome<i32> = Outcome::Value(42);
//! assert_eq!(success.into_pair(), (Some(42), None));
//!
//! let failure: Outcome<i32> = Outcome::Fault(Fault::new("nope"));
//! let (value, fault) = failure.into_pair();
//! assert!(value.is_none());
//! assert_eq!(fault.unwrap().message(), "nope");
//! ```

use std::fmt;

use crate::fault::Fault;

/// The result pair: a value or a fault, exactly one at a time.
///
/// The "was this fault produced by the wrapper" marker of the original
/// protocol is this type's discriminant: a fault only ever reaches the
/// `Fault` variant by going through the wrapper's adoption paths.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use untry::outcome::Outcome;
///
/// let outcome: Outcome<i32> = Outcome::Value(42);
/// let doubled = outcome.map(|x| x * 2);
/// assert_eq!(doubled.value(), Some(84));
/// ```
pub enum Outcome<T> {
    /// The success side, carrying the produced value.
    Value(T),
    /// The failure side, carrying the adopted fault.
    Fault(Fault),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::Value(42);
    /// assert!(outcome.is_value());
    /// assert!(!outcome.is_fault());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this is a `Fault`.
    #[inline]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into `Option<T>`, consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::fault::Fault;
    /// use untry::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::Value(42);
    /// assert_eq!(outcome.value(), Some(42));
    ///
    /// let outcome: Outcome<i32> = Outcome::Fault(Fault::new("nope"));
    /// assert_eq!(outcome.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Fault(_) => None,
        }
    }

    /// Converts into `Option<Fault>`, consuming the outcome.
    #[inline]
    pub fn fault(self) -> Option<Fault> {
        match self {
            Self::Value(_) => None,
            Self::Fault(fault) => Some(fault),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Fault(_) => None,
        }
    }

    /// Returns a reference to the fault if present.
    #[inline]
    pub const fn fault_ref(&self) -> Option<&Fault> {
        match self {
            Self::Value(_) => None,
            Self::Fault(fault) => Some(fault),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the value if present.
    ///
    /// A `Fault` passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::Value(21);
    /// assert_eq!(outcome.map(|x| x * 2).value(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Outcome::Value(function(value)),
            Self::Fault(fault) => Outcome::Fault(fault),
        }
    }

    /// Applies a function to the fault if present.
    ///
    /// A `Value` passes through unchanged. Useful for renaming a fault on
    /// the way out:
    ///
    /// ```rust
    /// use untry::fault::Fault;
    /// use untry::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::Fault(Fault::new("nope"));
    /// let renamed = outcome.map_fault(|fault| fault.with_name("LookupFault"));
    /// assert_eq!(renamed.fault().unwrap().name(), "LookupFault");
    /// ```
    #[inline]
    pub fn map_fault<F>(self, function: F) -> Self
    where
        F: FnOnce(Fault) -> Fault,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Fault(fault) => Self::Fault(function(fault)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::Value(42);
    /// let rendered = outcome.fold(|x| x.to_string(), |fault| fault.to_string());
    /// assert_eq!(rendered, "42");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, value_function: F, fault_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Fault) -> U,
    {
        match self {
            Self::Value(value) => value_function(value),
            Self::Fault(fault) => fault_function(fault),
        }
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns the value, or the given fallback on a fault.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Fault(_) => fallback,
        }
    }

    /// Returns the value, or computes a fallback from the fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::fault::Fault;
    /// use untry::outcome::Outcome;
    ///
    /// let outcome: Outcome<usize> = Outcome::Fault(Fault::new("nope"));
    /// assert_eq!(outcome.value_or_else(|fault| fault.message().len()), 4);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Value(value) => value,
            Self::Fault(fault) => fallback(fault),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Fault`.
    #[inline]
    pub fn unwrap_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Fault(fault) => {
                panic!("called `Outcome::unwrap_value()` on a `Fault` value: {fault}")
            }
        }
    }

    /// Returns the fault, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Value`.
    #[inline]
    pub fn unwrap_fault(self) -> Fault {
        match self {
            Self::Value(_) => panic!("called `Outcome::unwrap_fault()` on a `Value`"),
            Self::Fault(fault) => fault,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into the `(value, fault)` pair.
    ///
    /// Exactly one side is `Some`: `(Some(v), None)` for a value,
    /// `(None, Some(f))` for a fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::Value(42);
    /// assert_eq!(outcome.into_pair(), (Some(42), None));
    /// ```
    #[inline]
    pub fn into_pair(self) -> (Option<T>, Option<Fault>) {
        match self {
            Self::Value(value) => (Some(value), None),
            Self::Fault(fault) => (None, Some(fault)),
        }
    }

    /// Converts into a `Result<T, Fault>`.
    #[inline]
    pub fn into_result(self) -> Result<T, Fault> {
        self.into()
    }
}

impl<T: Default> Outcome<T> {
    /// Returns the value, or `T::default()` on a fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use untry::fault::Fault;
    /// use untry::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::Fault(Fault::new("nope"));
    /// assert_eq!(outcome.value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Fault(_) => T::default(),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Fault(fault) => formatter.debug_tuple("Fault").field(fault).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E: Into<Fault>> From<Result<T, E>> for Outcome<T> {
    /// Converts a `Result`: `Ok(v)` becomes `Value(v)`, `Err(e)` is adopted
    /// into the `Fault` side.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Fault(error.into()),
        }
    }
}

impl<T> From<Fault> for Outcome<T> {
    #[inline]
    fn from(fault: Fault) -> Self {
        Self::Fault(fault)
    }
}

impl<T> From<Outcome<T>> for Result<T, Fault> {
    /// Converts an `Outcome` to a `Result`: `Value(v)` becomes `Ok(v)`,
    /// `Fault(f)` becomes `Err(f)`.
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Value(value) => Ok(value),
            Outcome::Fault(fault) => Err(fault),
        }
    }
}

// =============================================================================
// Structured Rendering (requires serde feature)
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Outcome<T> {
    /// Renders the outcome as the two-element pair
    /// `[value-or-null, fault-or-null]`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.value_ref())?;
        pair.serialize_element(&self.fault_ref())?;
        pair.end()
    }
}

static_assertions::assert_impl_all!(Outcome<i32>: Send, Sync);
