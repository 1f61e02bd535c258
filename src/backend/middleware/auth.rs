/**
 * Admin Token Middleware
 *
 * Guards admin-only routes with a shared secret carried in the
 * `x-admin-token` header. The presented value is handed to the configured
 * [`TokenVerifier`]; anything it does not accept is answered with
 * 401 `{"error":"Unauthorized access"}`.
 *
 * The check is stateless: no sessions, no expiry, no lockout.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Header carrying the admin token
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Decides whether a presented admin token is acceptable
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, presented: &str) -> bool;
}

/// Shared handle used by the router state
pub type SharedVerifier = Arc<dyn TokenVerifier>;

/// Accepts exactly one configured secret
#[derive(Clone)]
pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for SharedSecretVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretVerifier")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl TokenVerifier for SharedSecretVerifier {
    fn verify(&self, presented: &str) -> bool {
        presented == self.secret
    }
}

/// Reject the request unless it carries an accepted admin token
pub async fn admin_auth_middleware(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let check = match request
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
    {
        Some(token) if app_state.verifier.verify(token) => Ok(()),
        Some(_) => Err("token mismatch"),
        None => Err("missing x-admin-token header"),
    };

    match check {
        Ok(()) => Ok(next.run(request).await),
        Err(reason) => {
            tracing::warn!(path = %request.uri().path(), "Rejected admin request: {}", reason);
            Err(BackendError::Unauthorized)
        }
    }
}
