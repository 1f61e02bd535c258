/**
 * Application State
 *
 * `AppState` is handed to the router once at startup and cloned into every
 * handler. It holds no request data, only shared handles:
 *
 * - the entry store (absent when no database could be configured)
 * - the admin token verifier
 *
 * Handlers extract just the part they need through `FromRef`.
 */

use axum::extract::FromRef;
use std::sync::Arc;
use crate::backend::middleware::auth::{SharedVerifier, TokenVerifier};
use crate::backend::store::{EntryStore, SharedStore};

#[derive(Clone)]
pub struct AppState {
    /// Entry persistence; `None` makes every store call fail with a 500
    pub store: Option<SharedStore>,

    /// Admin token check for protected routes
    pub verifier: SharedVerifier,
}

impl AppState {
    pub fn new(store: Option<SharedStore>, verifier: SharedVerifier) -> Self {
        Self { store, verifier }
    }

    /// Convenience constructor for concrete types
    pub fn with_parts<S, V>(store: S, verifier: V) -> Self
    where
        S: EntryStore + 'static,
        V: TokenVerifier + 'static,
    {
        Self::new(Some(Arc::new(store)), Arc::new(verifier))
    }
}

impl FromRef<AppState> for Option<SharedStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for SharedVerifier {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.verifier.clone()
    }
}
