//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── entry_routes.rs - Health, submit and listing routes
//! ```
//!
//! # Routes
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | GET | `/` | none |
//! | POST | `/submit` | none |
//! | GET | `/data` | `x-admin-token` |
//!
//! Anything else gets 404 `{"error":"Not found"}`.

/// Main router creation
pub mod router;

/// Entry route handlers
pub mod entry_routes;

pub use router::create_router;
