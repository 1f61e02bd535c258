/**
 * Entry Route Handlers
 *
 * # Routes
 *
 * - `GET /`        - Health check (public)
 * - `POST /submit` - Store a message (public)
 * - `GET /data`    - List entries (requires `x-admin-token`)
 */

use axum::{middleware, Router};
use crate::backend::entries::{health, list_entries, submit_entry};
use crate::backend::middleware::admin_auth_middleware;
use crate::backend::server::state::AppState;

/// Configure entry routes
///
/// The admin guard is attached with `route_layer`, so it only runs for
/// `/data` and never turns an unknown path into a 401.
pub fn configure_entry_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/data", axum::routing::get(list_entries))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            admin_auth_middleware,
        ));

    router
        .route("/", axum::routing::get(health))
        .route("/submit", axum::routing::post(submit_entry))
        .merge(protected)
}
