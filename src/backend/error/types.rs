/**
 * Backend Error Types
 *
 * This module defines the errors an HTTP handler can return.
 *
 * # Error Categories
 *
 * - Validation: the submitted payload is missing its message (400)
 * - Unauthorized: the admin token is missing or wrong (401)
 * - Save: storing a submission failed (500, body also carries `success: false`)
 * - Persistence: any other store failure or a missing store (500)
 * - NotFound: no route matched (404)
 *
 * Persistence errors carry a public message for the client and the
 * underlying `StoreError`, which is only ever logged.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Fixed body text for rejected admin requests
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access";

/// Fixed body text when a submission could not be stored
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save data";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use entrybox::backend::error::BackendError;
/// use entrybox::backend::store::StoreError;
///
/// let err = BackendError::validation("Message is required");
/// let err = BackendError::save_failed(StoreError::unavailable("down"));
/// let err = BackendError::persistence("Failed to fetch data", StoreError::unavailable("down"));
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request body could not be turned into a valid submission
    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
    },

    /// Missing or incorrect admin token
    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    /// Storing a submission failed
    #[error("{}", SAVE_FAILED_MESSAGE)]
    SaveError {
        #[source]
        source: StoreError,
    },

    /// The store failed; `message` is what the client sees
    #[error("Persistence error: {message}")]
    PersistenceError {
        message: String,
        #[source]
        source: StoreError,
    },

    /// No route matched the request
    #[error("Not found")]
    NotFound,

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>, source: StoreError) -> Self {
        Self::PersistenceError {
            message: message.into(),
            source,
        }
    }

    pub fn save_failed(source: StoreError) -> Self {
        Self::SaveError { source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::SaveError { .. } | Self::PersistenceError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
        }
    }

    /// The message placed in the response body
    ///
    /// Never includes the underlying store error.
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.clone(),
            Self::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            Self::SaveError { .. } => SAVE_FAILED_MESSAGE.to_string(),
            Self::PersistenceError { message, .. } => message.clone(),
            Self::NotFound => "Not found".to_string(),
            Self::SharedError(err) => err.reason().to_string(),
        }
    }

    /// `success` flag placed next to the error text, if any
    pub fn success_flag(&self) -> Option<bool> {
        match self {
            Self::SaveError { .. } => Some(false),
            _ => None,
        }
    }
}
