/**
 * Main Router
 *
 * Assembles the entry routes, the 404 fallback and request tracing into a
 * single `Router<()>`.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use crate::backend::entries::not_found;
use crate::backend::routes::entry_routes::configure_entry_routes;
use crate::backend::server::state::AppState;

/// Create the main application router
///
/// # Example
///
/// ```rust
/// use entrybox::backend::routes::create_router;
/// use entrybox::backend::server::AppState;
/// use entrybox::backend::store::MemoryEntryStore;
/// use entrybox::backend::middleware::SharedSecretVerifier;
///
/// let state = AppState::with_parts(MemoryEntryStore::new(), SharedSecretVerifier::new("s3cret"));
/// let router = create_router(state);
/// ```
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_entry_routes(Router::new(), &app_state);

    router
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
