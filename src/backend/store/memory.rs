/**
 * In-Memory Entry Store
 *
 * Keeps entries in a vector behind an `Arc<RwLock<>>`. Used by the test
 * suite and by local runs with `ENTRYBOX_STORE=memory`. Nothing survives a
 * restart.
 */

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::store::{EntryStore, StoreError};
use crate::shared::{Entry, NewEntry};

/// Process-local entry store
#[derive(Debug, Clone, Default)]
pub struct MemoryEntryStore {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn save(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        let mut entries = self.entries.write().await;

        // Never go backwards, even if the wall clock does.
        let now = Utc::now();
        let created_at = match entries.last() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        };

        let entry = Entry {
            id: ObjectId::new().to_hex(),
            message: entry.into_message(),
            created_at,
        };
        entries.push(entry.clone());

        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<Entry>, StoreError> {
        let mut entries: Vec<Entry> = self.entries.read().await.iter().rev().cloned().collect();
        // Stable sort keeps newest-inserted first among equal timestamps.
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}
