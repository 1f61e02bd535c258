//! Integration tests
//!
//! - `api` drives the router over HTTP without a network socket
//! - `client` runs the form's submit client against mock and real backends
//! - `store` runs the MongoDB store against a live server (ignored by default)

mod api;
mod client;
mod store;
