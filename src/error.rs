//! Error type for vector operations.

use std::fmt;

/// Errors returned by the fallible vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Two vectors that must have equal length do not.
    LengthMismatch { left: usize, right: usize },
    /// An operation requiring a fixed length got an input of another length.
    DimensionError {
        expected: usize,
        left: usize,
        right: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::LengthMismatch { left, right } => write!(
                f,
                "both vectors must have the same length: got {} and {}",
                left, right
            ),
            VectorError::DimensionError {
                expected,
                left,
                right,
            } => write!(
                f,
                "both vectors must have length {}: got {} and {}",
                expected, left, right
            ),
        }
    }
}

impl std::error::Error for VectorError {}

/// Convenience alias for results of vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;
