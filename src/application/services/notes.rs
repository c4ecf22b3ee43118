//! Note operations.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Note, NoteId, Patch, TagId, User};
use crate::infrastructure::{NoteFilter, NoteStore, TagStore};

use super::resolve_tags;

/// Input for creating a note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: Option<String>,
    pub tag_ids: Vec<TagId>,
}

/// Partial update applied to a note. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct NoteChanges {
    pub title: Patch<String>,
    pub content: Patch<String>,
    pub is_pinned: Patch<bool>,
    pub tag_ids: Patch<Vec<TagId>>,
}

/// Owner-scoped note CRUD.
#[derive(Clone)]
pub struct NoteService {
    notes: Arc<dyn NoteStore>,
    tags: Arc<dyn TagStore>,
}

impl NoteService {
    /// Creates the service over the given stores.
    #[must_use]
    pub const fn new(notes: Arc<dyn NoteStore>, tags: Arc<dyn TagStore>) -> Self {
        Self { notes, tags }
    }

    /// Lists the current user's notes, pinned first then newest first.
    ///
    /// # Errors
    ///
    /// Returns `Store` on storage failure.
    pub async fn list(&self, current: &User, filter: &NoteFilter) -> DomainResult<Vec<Note>> {
        Ok(self.notes.list(current.id, filter).await?)
    }

    /// Owner-scoped lookup; a cross-user id reads as not found.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id does not resolve under the current user.
    pub async fn get(&self, current: &User, id: NoteId) -> DomainResult<Note> {
        self.notes
            .find(id, current.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Note"))
    }

    /// Creates a note owned by the current user with all tag references
    /// resolved up front.
    ///
    /// # Errors
    ///
    /// - `Validation` when the title is blank
    /// - `NotFound` when any tag id does not resolve under the current user
    pub async fn create(&self, current: &User, request: NewNote) -> DomainResult<Note> {
        if request.title.trim().is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }

        let tags = resolve_tags(&self.tags, current.id, &request.tag_ids).await?;

        let mut note = Note::new(current.id, request.title);
        note.content = request.content;
        note.tags = tags;

        Ok(self.notes.insert(note).await?)
    }

    /// Applies a partial update: supplied fields overwrite, absent fields
    /// keep their stored value. A supplied tag list replaces the whole set.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the note (or any supplied tag id) does not
    /// resolve under the current user.
    pub async fn update(
        &self,
        current: &User,
        id: NoteId,
        changes: NoteChanges,
    ) -> DomainResult<Note> {
        let mut note = self.get(current, id).await?;

        changes.title.apply(&mut note.title);
        changes.content.apply_some(&mut note.content);
        changes.is_pinned.apply(&mut note.is_pinned);
        if let Patch::Set(tag_ids) = changes.tag_ids {
            note.tags = resolve_tags(&self.tags, current.id, &tag_ids).await?;
        }

        Ok(self.notes.update(note).await?)
    }

    /// Unconditionally flips the pinned flag and persists.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id does not resolve under the current user.
    pub async fn toggle_pinned(&self, current: &User, id: NoteId) -> DomainResult<Note> {
        let mut note = self.get(current, id).await?;
        note.toggle_pinned();
        Ok(self.notes.update(note).await?)
    }

    /// Hard-deletes the note.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id does not resolve under the current user.
    pub async fn delete(&self, current: &User, id: NoteId) -> DomainResult<()> {
        if self.notes.delete(id, current.id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("Note"))
        }
    }
}
