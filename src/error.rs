//! Error types for configuration validation.
//!
//! The geometry itself is total over well-formed floats and never fails;
//! errors only arise on the configuration surface.

use core::fmt;

/// Errors that can occur when validating a model configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Target segment length must be positive and finite.
    InvalidSegmentLength,
    /// Taper minimum length must be positive and finite.
    InvalidMinimumLength,
    /// Smoothing level must be in [0, 1) — 1 would freeze the target.
    InvalidSmoothing,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidSegmentLength => {
                write!(f, "segment length must be positive and finite")
            }
            ModelError::InvalidMinimumLength => {
                write!(f, "taper minimum length must be positive and finite")
            }
            ModelError::InvalidSmoothing => {
                write!(f, "smoothing level must be in [0, 1)")
            }
        }
    }
}
