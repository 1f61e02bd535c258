//! Middleware Module
//!
//! Request processing middleware for the backend. Currently only the admin
//! token guard applied to the listing endpoint.

pub mod auth;

pub use auth::{
    admin_auth_middleware, SharedSecretVerifier, SharedVerifier, TokenVerifier,
    ADMIN_TOKEN_HEADER,
};
