//! Response DTOs and the success envelope.
//!
//! Every success response is `{"success": true, "message"?, "data": T}`;
//! failures are produced by the error handler middleware with the same
//! shape minus `data`. All payloads are camelCase on the wire.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Envelope wrapping every successful payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` without a message.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Wraps `data` with a human-readable message.
    #[must_use]
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// A success with a message but no payload (deletes).
    #[must_use]
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Payload for signup and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub email: String,
    pub full_name: Option<String>,
    pub user_id: String,
}

/// Tag payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Task payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<TagResponse>,
    pub created_at: DateTime<Utc>,
}

/// Note payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub is_pinned: bool,
    pub tags: Vec<TagResponse>,
    pub created_at: DateTime<Utc>,
}

/// Task counters inside the stats payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatsResponse {
    pub total: u64,
    pub completed: u64,
    pub active: u64,
    pub completion_rate: f64,
}

/// Note counters inside the stats payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteStatsResponse {
    pub total: u64,
    pub pinned: u64,
}

/// Payload for `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub tasks: TaskStatsResponse,
    pub notes: NoteStatsResponse,
}
