//! entrybox - Main Library
//!
//! entrybox is a small full-stack message box: a backend accepts text
//! messages over HTTP and stores them in MongoDB, an admin-only endpoint
//! lists everything stored, and a native desktop form submits new messages.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared between the form and the backend
//!   - `Entry`, `SubmitRequest`, `SubmitResponse`, `ErrorBody`
//!   - Validation and configuration errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with health, submit and listing endpoints
//!   - Shared-secret guard for the listing endpoint
//!   - Entry persistence (MongoDB, or in memory for local runs and tests)
//!
//! - **`egui_app`** - Native desktop form (egui/eframe)
//!   - Single text input with a save button and a status line
//!   - HTTP client for the submit endpoint
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules and the server binary
//!   (axum, mongodb, tracing-subscriber). Enabled by default.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use entrybox::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! config.validate()?;
//! let app = create_app(&config).await;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! ## Native Desktop Form
//!
//! ```rust,no_run
//! use entrybox::egui_app::{submit_message_blocking, Config};
//!
//! let outcome = submit_message_blocking(&Config::new(), "hello".to_string());
//! println!("{}", outcome.status_text());
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation
//! - `shared::ConfigError` for configuration problems
//! - `backend::BackendError` for anything a handler can return
//! - `egui_app::ClientError` for transport failures in the form

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop form
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
