//! Property-based tests for entries
//!
//! Uses proptest to generate random inputs and verify properties

use entrybox::backend::store::{EntryStore, MemoryEntryStore};
use entrybox::shared::{Entry, SubmitRequest};
use proptest::prelude::*;

fn save_all(messages: &[String]) -> Vec<Entry> {
    let store = MemoryEntryStore::new();
    tokio_test::block_on(async {
        for message in messages {
            let entry = SubmitRequest::new(message.clone()).validate().unwrap();
            store.save(entry).await.unwrap();
        }
        store.list_all().await.unwrap()
    })
}

proptest! {
    #[test]
    fn test_latest_entry_is_listed_first(messages in prop::collection::vec(".{1,40}", 1..20)) {
        let listed = save_all(&messages);

        prop_assert_eq!(listed.len(), messages.len());
        prop_assert_eq!(&listed[0].message, messages.last().unwrap());
    }

    #[test]
    fn test_listing_is_non_increasing(messages in prop::collection::vec(".{1,10}", 0..30)) {
        let listed = save_all(&messages);

        prop_assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_non_empty_messages_validate(message in ".{1,64}") {
        let entry = SubmitRequest::new(message.clone()).validate();
        prop_assert!(entry.is_ok());
        let entry = entry.unwrap();
        prop_assert_eq!(entry.message(), message.as_str());
    }

    #[test]
    fn test_non_zero_numbers_are_coerced(number in any::<i64>().prop_filter("zero is falsy", |n| *n != 0)) {
        let request: SubmitRequest = serde_json::from_value(serde_json::json!({ "message": number })).unwrap();
        prop_assert_eq!(request.message, Some(number.to_string()));
    }

    #[test]
    fn test_falsy_scalars_are_missing(
        falsy in prop_oneof![
            Just(serde_json::json!(0)),
            Just(serde_json::json!(0.0)),
            Just(serde_json::json!(false)),
        ]
    ) {
        let request: SubmitRequest = serde_json::from_value(serde_json::json!({ "message": falsy })).unwrap();
        prop_assert!(request.validate().is_err());
    }
}
