//! Task entity.

use chrono::{DateTime, NaiveDate, Utc};

use super::ids::{TaskId, UserId};
use super::tag::Tag;

/// Priority assigned to tasks created without an explicit priority.
pub const DEFAULT_PRIORITY: &str = "medium";

/// A to-do item owned by a single user.
///
/// Tags are embedded as full values: a task is always loaded and serialized
/// together with the tags attached to it, and every attached tag belongs to
/// the same owner as the task itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Owning user, immutable after creation.
    pub owner: UserId,
    /// Short description of the work; required.
    pub title: String,
    /// Longer free-form description.
    pub description: Option<String>,
    /// Free-form priority label, `"medium"` by default.
    pub priority: String,
    /// Completion flag, `false` by default.
    pub completed: bool,
    /// Optional calendar due date.
    pub due_date: Option<NaiveDate>,
    /// Tags attached to this task, all owned by the same user.
    pub tags: Vec<Tag>,
    /// Creation timestamp, immutable once set.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task owned by `owner` with defaults applied.
    #[must_use]
    pub fn new(owner: UserId, title: String) -> Self {
        Self {
            id: TaskId::generate(),
            owner,
            title,
            description: None,
            priority: DEFAULT_PRIORITY.to_string(),
            completed: false,
            due_date: None,
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Flips the completion flag.
    pub const fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
