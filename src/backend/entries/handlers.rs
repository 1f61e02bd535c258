/**
 * Entry Handlers
 *
 * - `GET /`        - liveness check, never touches the store
 * - `POST /submit` - validate `{message}` and store one entry
 * - `GET /data`    - every entry, newest first (behind the admin guard)
 *
 * Each store-backed handler does exactly one store call.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use crate::backend::error::BackendError;
use crate::backend::store::{SharedStore, StoreError};
use crate::shared::{Entry, HealthResponse, SubmitRequest, SubmitResponse};

const FETCH_FAILED: &str = "Failed to fetch data";

fn no_database() -> StoreError {
    StoreError::unavailable("database not configured")
}

/// Handle `GET /`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::running())
}

/// Handle `POST /submit`
///
/// Malformed or non-JSON bodies are treated like a missing message.
pub async fn submit_entry(
    State(store): State<Option<SharedStore>>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), BackendError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected submit body: {}", rejection.body_text());
        BackendError::validation(rejection.body_text())
    })?;

    let new_entry = request.validate()?;
    let store = store.ok_or_else(|| BackendError::save_failed(no_database()))?;

    let entry = store
        .save(new_entry)
        .await
        .map_err(BackendError::save_failed)?;

    tracing::info!(id = %entry.id, "Entry saved");

    Ok((StatusCode::CREATED, Json(SubmitResponse::saved())))
}

/// Handle `GET /data`
pub async fn list_entries(
    State(store): State<Option<SharedStore>>,
) -> Result<Json<Vec<Entry>>, BackendError> {
    let store = store.ok_or_else(|| BackendError::persistence(FETCH_FAILED, no_database()))?;

    let entries = store
        .list_all()
        .await
        .map_err(|e| BackendError::persistence(FETCH_FAILED, e))?;

    tracing::debug!("Listing {} entries", entries.len());

    Ok(Json(entries))
}

/// Fallback for unmatched routes
pub async fn not_found() -> BackendError {
    BackendError::NotFound
}
