//! Entry Persistence Module
//!
//! The boundary between the HTTP handlers and the document store. Handlers
//! only see the [`EntryStore`] trait; the server picks an implementation at
//! startup.
//!
//! # Implementations
//!
//! - **`mongo`** - `MongoEntryStore`, the `entries` collection in MongoDB
//! - **`memory`** - `MemoryEntryStore`, a process-local vector for tests and
//!   local runs without a database
//!
//! # Ordering
//!
//! `list_all` returns every entry, newest `createdAt` first. Entries that share
//! a timestamp come back newest-inserted first.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::{Entry, NewEntry};

pub mod memory;

pub mod mongo;

pub use memory::MemoryEntryStore;
pub use mongo::MongoEntryStore;

/// Shared handle used by the router state
pub type SharedStore = Arc<dyn EntryStore>;

/// Errors raised by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// The driver reported a failure (connection, auth, write concern...)
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// No store is reachable at all
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}

/// Persistence contract for entries
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Store one validated entry and return it with its id and timestamp
    async fn save(&self, entry: NewEntry) -> Result<Entry, StoreError>;

    /// Every stored entry, newest first
    async fn list_all(&self) -> Result<Vec<Entry>, StoreError>;
}
