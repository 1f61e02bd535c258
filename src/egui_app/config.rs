/**
 * Client Configuration
 *
 * Where the form sends its requests. The backend base URL comes from
 * `CLIENT_API_URL` and defaults to a local server on the standard port.
 */
use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5003";

/// Path of the submit endpoint, relative to the server URL
pub const SUBMIT_PATH: &str = "/submit";

#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let app = match std::env::var("CLIENT_API_URL") {
            Ok(url) => AppConfig::builder().server_url(url).build().unwrap_or_else(|e| {
                tracing::warn!("Ignoring CLIENT_API_URL: {}", e);
                AppConfig::default()
            }),
            Err(_) => AppConfig::default(),
        };
        Self { app }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    pub fn with_server_url(url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(url))
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn submit_url(&self) -> String {
        self.api_url(SUBMIT_PATH)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
