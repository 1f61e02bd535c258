/**
 * Server Initialization
 *
 * Turns a `ServerConfig` into a ready-to-serve axum `Router`:
 *
 * 1. Open the configured entry store (MongoDB or in-memory)
 * 2. Build the admin token verifier
 * 3. Assemble `AppState` and the router
 */

use axum::Router;
use std::sync::Arc;
use crate::backend::middleware::auth::{SharedSecretVerifier, SharedVerifier};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig, StoreKind};
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryEntryStore, MongoEntryStore, SharedStore};

/// Create the application router from configuration
///
/// Returns without waiting for MongoDB, and database problems never make
/// this fail; see
/// [`load_database`](crate::backend::server::config::load_database).
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing entrybox backend");

    let store: Option<SharedStore> = match config.store {
        StoreKind::Mongo => load_database(&config.mongo)
            .map(|database| Arc::new(MongoEntryStore::new(&database)) as SharedStore),
        StoreKind::Memory => {
            tracing::warn!("Using in-memory entry store; entries are lost on restart");
            Some(Arc::new(MemoryEntryStore::new()))
        }
    };

    let verifier: SharedVerifier = Arc::new(SharedSecretVerifier::new(config.admin_token.clone()));

    create_router(AppState::new(store, verifier))
}
