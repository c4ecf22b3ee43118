//! Entity → response DTO transformations. All pure functions.

use crate::application::services::auth::AuthSuccess;
use crate::application::Statistics;
use crate::domain::{Note, Tag, Task};

use super::responses::{
    AuthResponse, NoteResponse, NoteStatsResponse, StatsResponse, TagResponse, TaskResponse,
    TaskStatsResponse,
};

/// Converts an authenticated session to the auth payload.
#[must_use]
pub fn auth_to_response(auth: &AuthSuccess) -> AuthResponse {
    AuthResponse {
        token: auth.token.clone(),
        email: auth.user.email.clone(),
        full_name: auth.user.full_name.clone(),
        user_id: auth.user.id.to_string(),
    }
}

/// Converts a tag to its payload.
#[must_use]
pub fn tag_to_response(tag: &Tag) -> TagResponse {
    TagResponse {
        id: tag.id.to_string(),
        name: tag.name.clone(),
        color: tag.color.clone(),
        created_at: tag.created_at,
    }
}

/// Converts a task to its payload.
#[must_use]
pub fn task_to_response(task: &Task) -> TaskResponse {
    TaskResponse {
        id: task.id.to_string(),
        title: task.title.clone(),
        description: task.description.clone(),
        priority: task.priority.clone(),
        completed: task.completed,
        due_date: task.due_date,
        tags: task.tags.iter().map(tag_to_response).collect(),
        created_at: task.created_at,
    }
}

/// Converts a note to its payload.
#[must_use]
pub fn note_to_response(note: &Note) -> NoteResponse {
    NoteResponse {
        id: note.id.to_string(),
        title: note.title.clone(),
        content: note.content.clone(),
        is_pinned: note.is_pinned,
        tags: note.tags.iter().map(tag_to_response).collect(),
        created_at: note.created_at,
    }
}

/// Converts statistics to the stats payload.
#[must_use]
pub fn statistics_to_response(statistics: &Statistics) -> StatsResponse {
    StatsResponse {
        tasks: TaskStatsResponse {
            total: statistics.tasks.total,
            completed: statistics.tasks.completed,
            active: statistics.tasks.active,
            completion_rate: statistics.tasks.completion_rate,
        },
        notes: NoteStatsResponse {
            total: statistics.notes.total,
            pinned: statistics.notes.pinned,
        },
    }
}
