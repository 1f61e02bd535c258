//! egui Native Desktop Form
//!
//! A single window with a text input, a save button and a status line. The
//! request runs on a worker thread so the UI stays responsive; the result is
//! picked up on the next frame.

pub mod config;
pub mod submit;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::{Config, SUBMIT_PATH};
pub use submit::{submit_message, submit_message_blocking, ClientError, SubmitOutcome};
pub use state::FormState;
