//! Store tests against a live MongoDB
//!
//! Ignored by default. Run with a server available at `ENTRYBOX_TEST_MONGO_URI`
//! (defaults to `mongodb://127.0.0.1:27017`):
//!
//! ```text
//! cargo test mongo -- --ignored
//! ```

#[cfg(feature = "ssr")]
mod mongo_test;
