//! `MongoEntryStore` against a real server
//!
//! Each test works in its own throwaway database and drops it afterwards.

use bson::oid::ObjectId;
use entrybox::backend::store::{EntryStore, MongoEntryStore};
use entrybox::shared::SubmitRequest;
use mongodb::{Client, Database};
use pretty_assertions::assert_eq;

async fn scratch_database() -> Database {
    let uri = std::env::var("ENTRYBOX_TEST_MONGO_URI")
        .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());
    let client = Client::with_uri_str(&uri).await.unwrap();
    client.database(&format!("entrybox_test_{}", ObjectId::new().to_hex()))
}

async fn save(store: &MongoEntryStore, message: &str) {
    let entry = SubmitRequest::new(message).validate().unwrap();
    store.save(entry).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires MongoDB
async fn test_saved_entry_reads_back() {
    let database = scratch_database().await;
    let store = MongoEntryStore::new(&database);

    let saved = store
        .save(SubmitRequest::new("hello").validate().unwrap())
        .await
        .unwrap();
    let listed = store.list_all().await.unwrap();

    database.drop(None).await.unwrap();

    assert_eq!(listed, vec![saved]);
}

#[tokio::test]
#[ignore] // Requires MongoDB
async fn test_newest_entry_listed_first() {
    let database = scratch_database().await;
    let store = MongoEntryStore::new(&database);

    save(&store, "first").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    save(&store, "second").await;

    let messages: Vec<String> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.message)
        .collect();

    database.drop(None).await.unwrap();

    assert_eq!(messages, ["second", "first"]);
}

#[tokio::test]
#[ignore] // Requires MongoDB
async fn test_same_millisecond_inserts_keep_newest_first() {
    let database = scratch_database().await;
    let store = MongoEntryStore::new(&database);

    // Back-to-back inserts routinely share a createdAt millisecond.
    let sent: Vec<String> = (0..25).map(|i| format!("entry {}", i)).collect();
    for message in &sent {
        save(&store, message).await;
    }

    let listed = store.list_all().await.unwrap();

    database.drop(None).await.unwrap();

    assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    let messages: Vec<String> = listed.into_iter().map(|entry| entry.message).collect();
    let expected: Vec<String> = sent.into_iter().rev().collect();
    assert_eq!(messages, expected);
}
