/**
 * Entry Data Structures
 *
 * This module defines the stored `Entry` record and the request/response
 * bodies exchanged by the submit and listing endpoints.
 *
 * The wire names follow the document layout: `_id` for the identifier and
 * `createdAt` for the creation timestamp.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::shared::error::SharedError;

/// A stored message with its creation time
///
/// Entries are created once by the submit endpoint and never updated.
///
/// # Example
/// ```json
/// {"_id": "65f1c0ffee0000000000beef", "message": "hello", "createdAt": "2024-03-13T10:00:00Z"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Store-assigned identifier (hex ObjectId)
    #[serde(rename = "_id")]
    pub id: String,
    /// The submitted text
    pub message: String,
    /// When the entry was stored
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /submit`
///
/// `message` is coerced from JSON numbers and booleans; `null`, a missing
/// field and an empty string all count as missing. Use [`SubmitRequest::validate`]
/// before anything reaches the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitRequest {
    #[serde(
        default,
        deserialize_with = "coerce_message",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
}

impl SubmitRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Check the required field and produce a value the store accepts
    pub fn validate(self) -> Result<NewEntry, SharedError> {
        match self.message {
            Some(message) if !message.is_empty() => Ok(NewEntry { message }),
            _ => Err(SharedError::validation("message", "Message is required")),
        }
    }
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    message: String,
}

impl NewEntry {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

fn coerce_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        // Falsy scalars count as a missing message.
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(number) if number.as_f64() == Some(0.0) => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::Array(_) => Err(serde::de::Error::custom("message must be text, got an array")),
        Value::Object(_) => Err(serde::de::Error::custom("message must be text, got an object")),
    }
}

/// Success body of `POST /submit`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmitResponse {
    pub fn saved() -> Self {
        Self {
            success: true,
            message: Some("Data saved successfully".to_string()),
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            status: "Backend running".to_string(),
        }
    }
}
