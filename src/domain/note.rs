//! Note entity.

use chrono::{DateTime, Utc};

use super::ids::{NoteId, UserId};
use super::tag::Tag;

/// A free-form note owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique note identifier.
    pub id: NoteId,
    /// Owning user, immutable after creation.
    pub owner: UserId,
    /// Note title; required.
    pub title: String,
    /// Note body.
    pub content: Option<String>,
    /// Pinned notes sort before unpinned ones in listings.
    pub is_pinned: bool,
    /// Tags attached to this note, all owned by the same user.
    pub tags: Vec<Tag>,
    /// Creation timestamp, immutable once set.
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note owned by `owner` with defaults applied.
    #[must_use]
    pub fn new(owner: UserId, title: String) -> Self {
        Self {
            id: NoteId::generate(),
            owner,
            title,
            content: None,
            is_pinned: false,
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Flips the pinned flag.
    pub const fn toggle_pinned(&mut self) {
        self.is_pinned = !self.is_pinned;
    }
}
