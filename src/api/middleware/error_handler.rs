//! Error handling for the API layer.
//!
//! Every handled failure is reported as HTTP 400 with the body
//! `{"success": false, "message": "..."}`. The error kind (validation,
//! not-found, conflict, authentication) is communicated only through the
//! message text; clients must not rely on status-code granularity.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Failure envelope returned for every handled error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: String,
}

impl ApiFailure {
    /// Creates a failure with the given client-facing message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// The failure returned when a protected path has no attached identity.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::new(DomainError::Unauthenticated.to_string())
    }
}

impl From<DomainError> for ApiFailure {
    fn from(error: DomainError) -> Self {
        if let DomainError::Store(detail) = &error {
            // Store failures carry internals; log them but keep the client
            // message as-is (the original surfaces raw messages too).
            tracing::error!(%detail, "store failure surfaced to client");
        }
        Self::new(error.to_string())
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
