//! Error types for Clasificar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Clasificar operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// malformed dataset files, and invalid hyperparameters.
///
/// # Examples
///
/// ```
/// use clasificar::error::ClasificarError;
///
/// let err = ClasificarError::DimensionMismatch {
///     expected: "60000 labels".to_string(),
///     actual: "59999".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum ClasificarError {
    /// Sample/label counts or feature widths don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Input data violates a precondition (empty set, label out of range).
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Invalid or corrupt dataset file.
    Format {
        /// Error description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ClasificarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClasificarError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            ClasificarError::InvalidInput { message } => {
                write!(f, "invalid input: {message}")
            }
            ClasificarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            ClasificarError::Format { message } => {
                write!(f, "Invalid dataset format: {message}")
            }
            ClasificarError::Io(e) => write!(f, "I/O error: {e}"),
            ClasificarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ClasificarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClasificarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClasificarError {
    fn from(err: std::io::Error) -> Self {
        ClasificarError::Io(err)
    }
}

impl From<&str> for ClasificarError {
    fn from(msg: &str) -> Self {
        ClasificarError::Other(msg.to_string())
    }
}

impl From<String> for ClasificarError {
    fn from(msg: String) -> Self {
        ClasificarError::Other(msg)
    }
}

impl ClasificarError {
    /// Create an invalid input error with descriptive context
    #[must_use]
    pub fn invalid_input(message: &str) -> Self {
        Self::InvalidInput {
            message: message.to_string(),
        }
    }

    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a dataset format error
    #[must_use]
    pub fn format(message: &str) -> Self {
        Self::Format {
            message: message.to_string(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for ClasificarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<ClasificarError> for &str {
    fn eq(&self, other: &ClasificarError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ClasificarError>;
