//! Request DTOs.
//!
//! The wire format is camelCase JSON. Update requests use [`Patch`] fields
//! so that a missing (or null) field reads as "keep the stored value".

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::Patch;

/// Request body for `POST /auth/signup`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /tasks`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

/// Request body for `PUT /tasks/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub priority: Patch<String>,
    #[serde(default)]
    pub completed: Patch<bool>,
    #[serde(default)]
    pub due_date: Patch<NaiveDate>,
    #[serde(default)]
    pub tag_ids: Patch<Vec<Uuid>>,
}

/// Request body for `POST /notes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

/// Request body for `PUT /notes/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub content: Patch<String>,
    #[serde(default)]
    pub is_pinned: Patch<bool>,
    #[serde(default)]
    pub tag_ids: Patch<Vec<Uuid>>,
}

/// Request body for `POST /tags`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Request body for `PUT /tags/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub color: Patch<String>,
}

/// Query parameters for `GET /tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListQuery {
    /// `completed` selects completed tasks; any other value selects active.
    #[serde(default)]
    pub status: Option<String>,
    /// Case-insensitive substring over title and description.
    #[serde(default)]
    pub search: Option<String>,
}

/// Query parameters for `GET /notes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteListQuery {
    /// Case-insensitive substring over title and content.
    #[serde(default)]
    pub search: Option<String>,
}
