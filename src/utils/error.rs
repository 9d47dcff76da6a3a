//! Error handling for folding passes
//!
//! This module provides a unified error type and result type for the
//! document folding operations.

use std::fmt;

/// Folding error type
///
/// The core row walk has no failure path (absence of matching rows or
/// cells is a valid no-op); errors only arise at the outer surfaces:
/// scope configuration, file I/O, and document serialization.
#[derive(Debug, Clone)]
pub enum FoldError {
    /// A scope class could not be turned into a valid row selector
    Selector { selector: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Document could not be serialized back to HTML
    SerializeError { message: String },
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::Selector { selector } => {
                write!(f, "Invalid scope selector: {}", selector)
            }
            FoldError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            FoldError::SerializeError { message } => {
                write!(f, "Serialize error: {}", message)
            }
        }
    }
}

impl std::error::Error for FoldError {}

impl From<std::io::Error> for FoldError {
    fn from(err: std::io::Error) -> Self {
        FoldError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for folding operations
pub type FoldResult<T> = Result<T, FoldError>;

// Convenience constructors for errors
impl FoldError {
    pub fn selector(selector: impl Into<String>) -> Self {
        FoldError::Selector {
            selector: selector.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        FoldError::IoError {
            message: message.into(),
        }
    }

    pub fn serialize(message: impl Into<String>) -> Self {
        FoldError::SerializeError {
            message: message.into(),
        }
    }
}
