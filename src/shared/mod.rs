//! Shared Types Module
//!
//! Types used on both sides of the HTTP boundary: the desktop form
//! serializes `SubmitRequest` and reads `SubmitResponse`/`ErrorBody`, the
//! backend deserializes and validates the same structures.

pub mod entry;

pub mod error;

pub mod config;

pub use entry::{Entry, ErrorBody, HealthResponse, NewEntry, SubmitRequest, SubmitResponse};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
