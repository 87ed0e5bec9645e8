//! Error types for Sugerir operations.
//!
//! The ranking core itself never fails at runtime: degenerate input (empty
//! overlap, zero vectors, zero variance) is a valid outcome that scores 0.
//! Errors here come from the dataset loader and from malformed entity
//! construction.

use std::fmt;

/// Main error type for Sugerir operations.
///
/// # Examples
///
/// ```
/// use sugerir::error::SugerirError;
///
/// let err = SugerirError::InvalidGenreVector { expected: 18, actual: 3 };
/// assert!(err.to_string().contains("genre vector"));
/// ```
#[derive(Debug)]
pub enum SugerirError {
    /// I/O error while reading a dataset file.
    Io(std::io::Error),

    /// Genre flag slice of the wrong length (the schema is fixed at 18).
    InvalidGenreVector {
        /// Expected number of flags
        expected: usize,
        /// Actual number of flags found
        actual: usize,
    },
}

impl fmt::Display for SugerirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SugerirError::Io(e) => write!(f, "I/O error: {e}"),
            SugerirError::InvalidGenreVector { expected, actual } => {
                write!(
                    f,
                    "Invalid genre vector: expected {expected} flags, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for SugerirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SugerirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SugerirError {
    fn from(err: std::io::Error) -> Self {
        SugerirError::Io(err)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SugerirError>;
