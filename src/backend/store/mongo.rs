/**
 * MongoDB Entry Store
 *
 * Persists entries in the `entries` collection. Documents look like:
 *
 * ```json
 * { "_id": ObjectId("..."), "message": "hello", "createdAt": ISODate("...") }
 * ```
 *
 * No index is created beyond the default `_id` index; ordering is done in the
 * query itself.
 */

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::backend::store::{EntryStore, StoreError};
use crate::shared::{Entry, NewEntry};

/// Name of the collection holding entries
pub const ENTRIES_COLLECTION: &str = "entries";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    message: String,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    created_at: DateTime<Utc>,
}

impl From<EntryDocument> for Entry {
    fn from(document: EntryDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            message: document.message,
            created_at: document.created_at,
        }
    }
}

/// Sort for listings: newest `createdAt` first, later `_id` first on ties
fn newest_first() -> Document {
    doc! {
        "createdAt": -1,
        "_id": -1,
    }
}

/// Entry store backed by a MongoDB database
#[derive(Debug, Clone)]
pub struct MongoEntryStore {
    collection: Collection<EntryDocument>,
}

impl MongoEntryStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ENTRIES_COLLECTION),
        }
    }
}

#[async_trait]
impl EntryStore for MongoEntryStore {
    async fn save(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        // BSON dates carry millisecond precision; take the timestamp from
        // bson so the returned entry matches what a later read sees.
        let document = EntryDocument {
            id: ObjectId::new(),
            message: entry.into_message(),
            created_at: bson::DateTime::now().to_chrono(),
        };

        self.collection.insert_one(&document, None).await?;
        tracing::debug!(id = %document.id, "Stored entry");

        Ok(document.into())
    }

    async fn list_all(&self) -> Result<Vec<Entry>, StoreError> {
        let options = FindOptions::builder().sort(newest_first()).build();

        let documents: Vec<EntryDocument> = self
            .collection
            .find(None, options)
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Entry::from).collect())
    }
}
