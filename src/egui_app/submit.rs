/**
 * Submit Client
 *
 * Sends the form's text to `POST /submit` and turns the result into a
 * `SubmitOutcome` the form can display:
 *
 * - 2xx                    -> `Saved`
 * - any other status       -> `Rejected` with the server's `error` text, if any
 * - no response at all     -> `Unreachable`
 *
 * An error body that is not JSON still came from the server, so it is
 * `Rejected(None)` ("Failed to save"), not `Unreachable`.
 *
 * There is no retry and no client-side validation; empty text is sent as-is
 * and the backend's 400 is shown.
 */

use reqwest::Client;
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::{ErrorBody, SubmitRequest};

pub const SAVED_TEXT: &str = "Saved successfully";
pub const FAILED_TEXT: &str = "Failed to save";
pub const UNREACHABLE_TEXT: &str = "Cannot reach backend";

/// Transport-level failures; these never reach the user verbatim
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to create runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// The backend answered with a non-success status; holds its `error` text
    Rejected(Option<String>),
    Unreachable,
}

impl SubmitOutcome {
    /// Text shown under the form
    pub fn status_text(&self) -> String {
        match self {
            Self::Saved => SAVED_TEXT.to_string(),
            Self::Rejected(Some(error)) => error.clone(),
            Self::Rejected(None) => FAILED_TEXT.to_string(),
            Self::Unreachable => UNREACHABLE_TEXT.to_string(),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    fn from_result(result: Result<SubmitOutcome, ClientError>) -> Self {
        result.unwrap_or_else(|e| {
            tracing::warn!("Submit failed: {}", e);
            Self::Unreachable
        })
    }
}

async fn post_submit(client: &Client, config: &Config, message: String) -> Result<SubmitOutcome, ClientError> {
    let response = client
        .post(config.submit_url())
        .json(&SubmitRequest::new(message))
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        return Ok(SubmitOutcome::Saved);
    }

    let body = response.text().await?;
    let error = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .map(|body| body.error);

    tracing::debug!("Submit rejected with {}: {:?}", status, error);
    Ok(SubmitOutcome::Rejected(error))
}

/// Submit one message to the backend
pub async fn submit_message(client: &Client, config: &Config, message: String) -> SubmitOutcome {
    SubmitOutcome::from_result(post_submit(client, config, message).await)
}

/// Blocking variant for use from a worker thread
///
/// Must not be called from inside a tokio runtime.
pub fn submit_message_blocking(config: &Config, message: String) -> SubmitOutcome {
    let result = Runtime::new()
        .map_err(ClientError::from)
        .and_then(|rt| {
            let client = Client::new();
            rt.block_on(post_submit(&client, config, message))
        });

    SubmitOutcome::from_result(result)
}
