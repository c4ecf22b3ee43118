//! Storage traits for users, tasks, notes, and tags.
//!
//! Every lookup that touches a user-owned resource is scoped by
//! `(id, owner)`: there is no way to reach another user's record through
//! these interfaces, which is what lets the services report cross-user
//! access as a plain "not found".
//!
//! Two implementations exist: [`memory`] for local iteration and tests, and
//! [`postgres`] backed by sqlx. Services hold the traits behind `Arc<dyn _>`
//! so the two are interchangeable.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Note, NoteId, Tag, TagId, Task, TaskId, User, UserId};

/// Errors surfaced by store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The underlying database rejected or failed the operation.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        Self::Database(error.to_string())
    }
}

impl From<StoreError> for crate::domain::DomainError {
    fn from(error: StoreError) -> Self {
        Self::Store(error.to_string())
    }
}

/// Filter applied to task listings.
///
/// A non-empty search takes precedence over the completion filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Restrict to tasks with this completion state.
    pub completed: Option<bool>,
    /// Case-insensitive substring over title and description.
    pub search: Option<String>,
}

/// Filter applied to note listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Case-insensitive substring over title and content.
    pub search: Option<String>,
}

/// Store of user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new account.
    async fn insert(&self, user: User) -> Result<User, StoreError>;

    /// Looks up an account by login email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Returns `true` if an account with this email already exists.
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;
}

/// Store of tasks, always scoped to an owner.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a new task together with its tag associations.
    async fn insert(&self, task: Task) -> Result<Task, StoreError>;

    /// Persists field changes and replaces tag associations.
    async fn update(&self, task: Task) -> Result<Task, StoreError>;

    /// Owner-scoped lookup.
    async fn find(&self, id: TaskId, owner: UserId) -> Result<Option<Task>, StoreError>;

    /// Lists the owner's tasks, newest first, honoring the filter.
    async fn list(&self, owner: UserId, filter: &TaskFilter) -> Result<Vec<Task>, StoreError>;

    /// Deletes the task if it exists under this owner; returns whether a
    /// row was removed.
    async fn delete(&self, id: TaskId, owner: UserId) -> Result<bool, StoreError>;

    /// Counts the owner's tasks with the given completion state.
    async fn count_by_completion(&self, owner: UserId, completed: bool)
    -> Result<u64, StoreError>;
}

/// Store of notes, always scoped to an owner.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persists a new note together with its tag associations.
    async fn insert(&self, note: Note) -> Result<Note, StoreError>;

    /// Persists field changes and replaces tag associations.
    async fn update(&self, note: Note) -> Result<Note, StoreError>;

    /// Owner-scoped lookup.
    async fn find(&self, id: NoteId, owner: UserId) -> Result<Option<Note>, StoreError>;

    /// Lists the owner's notes, pinned first then newest first.
    async fn list(&self, owner: UserId, filter: &NoteFilter) -> Result<Vec<Note>, StoreError>;

    /// Deletes the note if it exists under this owner; returns whether a
    /// row was removed.
    async fn delete(&self, id: NoteId, owner: UserId) -> Result<bool, StoreError>;

    /// Counts all of the owner's notes.
    async fn count(&self, owner: UserId) -> Result<u64, StoreError>;

    /// Counts the owner's pinned notes.
    async fn count_pinned(&self, owner: UserId) -> Result<u64, StoreError>;
}

/// Store of tags, always scoped to an owner.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Persists a new tag.
    async fn insert(&self, tag: Tag) -> Result<Tag, StoreError>;

    /// Persists field changes.
    async fn update(&self, tag: Tag) -> Result<Tag, StoreError>;

    /// Owner-scoped lookup.
    async fn find(&self, id: TagId, owner: UserId) -> Result<Option<Tag>, StoreError>;

    /// Owner-scoped lookup by exact name.
    async fn find_by_name(&self, owner: UserId, name: &str) -> Result<Option<Tag>, StoreError>;

    /// Lists the owner's tags, newest first.
    async fn list(&self, owner: UserId) -> Result<Vec<Tag>, StoreError>;

    /// Deletes the tag if it exists under this owner, detaching it from any
    /// tasks and notes; returns whether a row was removed.
    async fn delete(&self, id: TagId, owner: UserId) -> Result<bool, StoreError>;
}
