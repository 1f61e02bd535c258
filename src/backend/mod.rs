//! Backend Module
//!
//! This module contains all server-side code for entrybox: an Axum HTTP
//! server that stores submitted messages and lists them to admins.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Router assembly
//! - **`entries`** - Health, submit and listing handlers
//! - **`store`** - `EntryStore` trait with MongoDB and in-memory backends
//! - **`middleware`** - Admin token guard
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Configuration and state
//! ├── routes/         - Route configuration
//! ├── entries/        - Entry handlers
//! ├── store/          - Persistence
//! ├── middleware/     - Admin token guard
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds two shared handles: the optional entry store and the
//! token verifier. Neither carries per-request mutable state; concurrent
//! requests only meet inside the database driver's connection pool.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Validation problems become 400,
//! token problems 401 and store failures 500, always as `{"error": ...}`.
//! Store failure details are logged, never sent to the client.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Entry endpoints
pub mod entries;

/// Entry persistence
pub mod store;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::BackendError;
pub use store::{EntryStore, MemoryEntryStore, MongoEntryStore, StoreError};
