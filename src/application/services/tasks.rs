//! Task operations.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{DomainError, DomainResult, Patch, TagId, Task, TaskId, User};
use crate::infrastructure::{TagStore, TaskFilter, TaskStore};

use super::resolve_tags;

/// Input for creating a task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub tag_ids: Vec<TagId>,
}

/// Partial update applied to a task. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Patch<String>,
    pub description: Patch<String>,
    pub priority: Patch<String>,
    pub completed: Patch<bool>,
    pub due_date: Patch<NaiveDate>,
    pub tag_ids: Patch<Vec<TagId>>,
}

/// Owner-scoped task CRUD.
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
    tags: Arc<dyn TagStore>,
}

impl TaskService {
    /// Creates the service over the given stores.
    #[must_use]
    pub const fn new(tasks: Arc<dyn TaskStore>, tags: Arc<dyn TagStore>) -> Self {
        Self { tasks, tags }
    }

    /// Lists the current user's tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns `Store` on storage failure.
    pub async fn list(&self, current: &User, filter: &TaskFilter) -> DomainResult<Vec<Task>> {
        Ok(self.tasks.list(current.id, filter).await?)
    }

    /// Owner-scoped lookup; a cross-user id reads as not found.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id does not resolve under the current user.
    pub async fn get(&self, current: &User, id: TaskId) -> DomainResult<Task> {
        self.tasks
            .find(id, current.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Task"))
    }

    /// Creates a task owned by the current user, with defaults applied and
    /// all tag references resolved up front.
    ///
    /// # Errors
    ///
    /// - `Validation` when the title is blank
    /// - `NotFound` when any tag id does not resolve under the current user;
    ///   nothing is persisted in that case
    pub async fn create(&self, current: &User, request: NewTask) -> DomainResult<Task> {
        if request.title.trim().is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }

        let tags = resolve_tags(&self.tags, current.id, &request.tag_ids).await?;

        let mut task = Task::new(current.id, request.title);
        task.description = request.description;
        if let Some(priority) = request.priority {
            task.priority = priority;
        }
        task.due_date = request.due_date;
        task.tags = tags;

        Ok(self.tasks.insert(task).await?)
    }

    /// Applies a partial update: supplied fields overwrite, absent fields
    /// keep their stored value. A supplied tag list replaces the whole set.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the task (or any supplied tag id) does not resolve
    ///   under the current user
    pub async fn update(
        &self,
        current: &User,
        id: TaskId,
        changes: TaskChanges,
    ) -> DomainResult<Task> {
        let mut task = self.get(current, id).await?;

        changes.title.apply(&mut task.title);
        changes.description.apply_some(&mut task.description);
        changes.priority.apply(&mut task.priority);
        changes.completed.apply(&mut task.completed);
        changes.due_date.apply_some(&mut task.due_date);
        if let Patch::Set(tag_ids) = changes.tag_ids {
            task.tags = resolve_tags(&self.tags, current.id, &tag_ids).await?;
        }

        Ok(self.tasks.update(task).await?)
    }

    /// Unconditionally flips the completion flag and persists.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id does not resolve under the current user.
    pub async fn toggle_completion(&self, current: &User, id: TaskId) -> DomainResult<Task> {
        let mut task = self.get(current, id).await?;
        task.toggle_completed();
        Ok(self.tasks.update(task).await?)
    }

    /// Hard-deletes the task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id does not resolve under the current user.
    pub async fn delete(&self, current: &User, id: TaskId) -> DomainResult<()> {
        if self.tasks.delete(id, current.id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("Task"))
        }
    }
}
