//! Error type for angle validation.
//!
//! [`CoreError`] covers the two ways a raw number can be unfit for the cube
//! projections: it is not a number at all, or it lies outside the domain an
//! operation accepts.
//!
//! ```
//! use quadsphere_core::{CoreError, CoreResult, MathErrorKind};
//!
//! fn checked_sin(x: f64) -> CoreResult<f64> {
//!     if !x.is_finite() {
//!         return Err(CoreError::math_error(
//!             "checked_sin",
//!             MathErrorKind::NotFinite,
//!             "argument is not finite",
//!         ));
//!     }
//!     Ok(x.sin())
//! }
//!
//! assert!(checked_sin(f64::NAN).is_err());
//! ```

use thiserror::Error;

/// Classification of numeric failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Value is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Numerical validation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn kind(&self) -> MathErrorKind {
        match self {
            Self::MathError { kind, .. } => *kind,
        }
    }
}
