//! Shared Error Types
//!
//! Errors that can be produced on either side of the HTTP boundary.
//!
//! # Usage
//!
//! ```rust
//! use entrybox::shared::error::SharedError;
//!
//! let error = SharedError::validation("message", "Message is required");
//! assert_eq!(error.reason(), "Message is required");
//! ```
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field is missing or unusable
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        field: String,
        message: String,
    },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The human-readable reason without the field prefix
    pub fn reason(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
