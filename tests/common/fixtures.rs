//! Test fixtures for the backend
//!
//! Everything here runs against in-process stores; no MongoDB is needed.

use std::net::SocketAddr;

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use entrybox::backend::middleware::SharedSecretVerifier;
use entrybox::backend::routes::create_router;
use entrybox::backend::server::AppState;
use entrybox::backend::store::{EntryStore, MemoryEntryStore, StoreError};
use entrybox::shared::{Entry, NewEntry};

/// Admin token accepted by every test server
pub const TEST_TOKEN: &str = "test-admin-token";

/// Store whose every call fails, to exercise the 500 paths
#[derive(Debug, Clone, Default)]
pub struct FailingStore;

#[async_trait]
impl EntryStore for FailingStore {
    async fn save(&self, _entry: NewEntry) -> Result<Entry, StoreError> {
        Err(StoreError::unavailable("simulated outage"))
    }

    async fn list_all(&self) -> Result<Vec<Entry>, StoreError> {
        Err(StoreError::unavailable("simulated outage"))
    }
}

pub fn admin_header(token: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-admin-token"),
        HeaderValue::from_static(token),
    )
}

/// Test server over the given store, guarded by [`TEST_TOKEN`]
pub fn server_with_store<S: EntryStore + 'static>(store: S) -> TestServer {
    server_with_state(AppState::with_parts(store, SharedSecretVerifier::new(TEST_TOKEN)))
}

pub fn server_with_state(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// Memory-backed test server plus a handle to inspect the store
pub fn memory_server() -> (TestServer, MemoryEntryStore) {
    let store = MemoryEntryStore::new();
    (server_with_store(store.clone()), store)
}

/// Serve the app on an ephemeral local port
///
/// Must be called from inside a tokio runtime; the server runs until the
/// runtime shuts down.
pub async fn spawn_backend(store: MemoryEntryStore) -> SocketAddr {
    let app = create_router(AppState::with_parts(store, SharedSecretVerifier::new(TEST_TOKEN)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test backend failed");
    });

    addr
}
