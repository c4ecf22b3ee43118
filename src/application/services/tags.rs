//! Tag operations.
//!
//! Tag names are unique per owner, never globally: two users can each have
//! a tag called "work". The conflict checks here compare ids so that
//! updating a tag without renaming it does not collide with itself.

use std::sync::Arc;

use crate::domain::tag::MAX_NAME_LENGTH;
use crate::domain::{DomainError, DomainResult, Patch, Tag, TagId, User};
use crate::infrastructure::TagStore;

/// Input for creating a tag.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
    pub color: Option<String>,
}

/// Partial update applied to a tag. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct TagChanges {
    pub name: Patch<String>,
    pub color: Patch<String>,
}

/// Owner-scoped tag CRUD.
#[derive(Clone)]
pub struct TagService {
    tags: Arc<dyn TagStore>,
}

impl TagService {
    /// Creates the service over the given store.
    #[must_use]
    pub const fn new(tags: Arc<dyn TagStore>) -> Self {
        Self { tags }
    }

    /// Lists the current user's tags, newest first.
    ///
    /// # Errors
    ///
    /// Returns `Store` on storage failure.
    pub async fn list(&self, current: &User) -> DomainResult<Vec<Tag>> {
        Ok(self.tags.list(current.id).await?)
    }

    /// Owner-scoped lookup; a cross-user id reads as not found.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id does not resolve under the current user.
    pub async fn get(&self, current: &User, id: TagId) -> DomainResult<Tag> {
        self.tags
            .find(id, current.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Tag"))
    }

    /// Creates a tag owned by the current user.
    ///
    /// # Errors
    ///
    /// - `Validation` for a blank or over-long name, or a malformed color
    /// - `Conflict` when the owner already has a tag with this name
    pub async fn create(&self, current: &User, request: NewTag) -> DomainResult<Tag> {
        validate_name(&request.name)?;
        if let Some(color) = &request.color {
            validate_color(color)?;
        }
        if self
            .tags
            .find_by_name(current.id, &request.name)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(
                "Tag with this name already exists".to_string(),
            ));
        }

        let tag = Tag::new(current.id, request.name, request.color);
        Ok(self.tags.insert(tag).await?)
    }

    /// Applies a partial update. Renaming onto a name held by a different
    /// tag of the same owner is a conflict; the same name under another
    /// user never collides.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the id does not resolve under the current user
    /// - `Validation` for a blank/over-long name or malformed color
    /// - `Conflict` when the new name is taken by another tag of this owner
    pub async fn update(
        &self,
        current: &User,
        id: TagId,
        changes: TagChanges,
    ) -> DomainResult<Tag> {
        let mut tag = self.get(current, id).await?;

        if let Patch::Set(name) = changes.name {
            validate_name(&name)?;
            if let Some(existing) = self.tags.find_by_name(current.id, &name).await? {
                if existing.id != id {
                    return Err(DomainError::Conflict(
                        "Tag with this name already exists".to_string(),
                    ));
                }
            }
            tag.name = name;
        }
        if let Patch::Set(color) = changes.color {
            validate_color(&color)?;
            tag.color = color;
        }

        Ok(self.tags.update(tag).await?)
    }

    /// Hard-deletes the tag, detaching it from any tasks and notes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id does not resolve under the current user.
    pub async fn delete(&self, current: &User, id: TagId) -> DomainResult<()> {
        if self.tags.delete(id, current.id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("Tag"))
        }
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("Tag name is required".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(DomainError::Validation(
            "Tag name must be at most 50 characters".to_string(),
        ));
    }
    Ok(())
}

fn validate_color(color: &str) -> DomainResult<()> {
    if Tag::is_valid_color(color) {
        Ok(())
    } else {
        Err(DomainError::Validation(
            "Color must be valid hex format".to_string(),
        ))
    }
}
