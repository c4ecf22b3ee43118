//! Request middleware: the authentication gate and error envelope.

pub mod auth_gate;
pub mod error_handler;

pub use auth_gate::{CurrentUser, auth_gate};
pub use error_handler::ApiFailure;
