//! Service implementations, one module per resource.

pub mod auth;
pub mod notes;
pub mod stats;
pub mod tags;
pub mod tasks;

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Tag, TagId, UserId};
use crate::infrastructure::TagStore;

/// Resolves every supplied tag id under the given owner.
///
/// All-or-nothing: any id that does not resolve to a tag owned by `owner`
/// aborts the whole operation, so a partial tag association is never
/// committed.
pub(crate) async fn resolve_tags(
    store: &Arc<dyn TagStore>,
    owner: UserId,
    tag_ids: &[TagId],
) -> DomainResult<Vec<Tag>> {
    let mut tags = Vec::with_capacity(tag_ids.len());
    for &tag_id in tag_ids {
        let tag = store
            .find(tag_id, owner)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Tag not found: {tag_id}")))?;
        tags.push(tag);
    }
    Ok(tags)
}
