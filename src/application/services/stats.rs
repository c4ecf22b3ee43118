//! Aggregate statistics.
//!
//! Counts are computed fresh on every request; nothing is cached or
//! incrementally maintained.

use std::sync::Arc;

use crate::domain::{DomainResult, User};
use crate::infrastructure::{NoteStore, TaskStore};

/// Task counters for one user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskStatistics {
    pub total: u64,
    pub completed: u64,
    pub active: u64,
    /// `completed * 100 / total`, or `0.0` when there are no tasks.
    pub completion_rate: f64,
}

/// Note counters for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteStatistics {
    pub total: u64,
    pub pinned: u64,
}

/// Aggregate statistics for one user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub tasks: TaskStatistics,
    pub notes: NoteStatistics,
}

/// Computes per-user aggregate statistics.
#[derive(Clone)]
pub struct StatsService {
    tasks: Arc<dyn TaskStore>,
    notes: Arc<dyn NoteStore>,
}

impl StatsService {
    /// Creates the service over the given stores.
    #[must_use]
    pub const fn new(tasks: Arc<dyn TaskStore>, notes: Arc<dyn NoteStore>) -> Self {
        Self { tasks, notes }
    }

    /// Computes statistics for the current user.
    ///
    /// # Errors
    ///
    /// Returns `Store` on storage failure.
    pub async fn statistics(&self, current: &User) -> DomainResult<Statistics> {
        let completed = self.tasks.count_by_completion(current.id, true).await?;
        let active = self.tasks.count_by_completion(current.id, false).await?;
        let total = completed + active;

        let note_total = self.notes.count(current.id).await?;
        let pinned = self.notes.count_pinned(current.id).await?;

        Ok(Statistics {
            tasks: TaskStatistics {
                total,
                completed,
                active,
                completion_rate: completion_rate(completed, total),
            },
            notes: NoteStatistics {
                total: note_total,
                pinned,
            },
        })
    }
}

/// Completion percentage, `0.0` for an empty task list.
#[allow(clippy::cast_precision_loss)]
fn completion_rate(completed: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 * 100.0 / total as f64
    }
}
