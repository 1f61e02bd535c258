/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and middleware can
 * return it directly. Every error renders as:
 *
 * ```json
 * { "error": "Error message" }
 * ```
 *
 * A failed save additionally reports `"success": false`.
 *
 * Server-side failures are logged here together with their source; the
 * response body only carries the public message.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use crate::backend::error::types::BackendError;
use crate::shared::ErrorBody;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::PersistenceError { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            Self::SaveError { source } => {
                tracing::error!(error = %source, "{}", self.message());
            }
            _ => {}
        }

        let body = ErrorBody {
            success: self.success_flag(),
            error: self.message(),
        };

        (status, Json(body)).into_response()
    }
}
