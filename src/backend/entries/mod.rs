//! Entry Endpoints
//!
//! HTTP handlers for submitting and listing entries plus the health check.
//! Persistence goes through [`crate::backend::store::EntryStore`].

pub mod handlers;

pub use handlers::{health, list_entries, not_found, submit_entry};
