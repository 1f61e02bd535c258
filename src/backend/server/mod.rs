//! Server Module
//!
//! Everything needed to turn configuration into a running Axum application.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment configuration and MongoDB connection
//! └── init.rs   - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env` then `validate`
//! 2. **Store Creation**: MongoDB (connect failures are logged) or in-memory
//! 3. **Router Creation**: routes plus the admin token middleware

pub mod state;

pub mod config;

pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::create_app;
