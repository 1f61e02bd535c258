//! Common test utilities and helpers
//!
//! - Store doubles (`FailingStore`)
//! - Test server builders over the in-memory store
//! - A real listening backend for client tests

#[cfg(feature = "ssr")]
pub mod fixtures;

#[cfg(feature = "ssr")]
pub use fixtures::*;
