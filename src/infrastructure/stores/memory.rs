//! In-memory store implementation.
//!
//! Backs the server when no `DATABASE_URL` is configured (local iteration)
//! and every service-level test. One struct owns all four collections so
//! cross-entity consistency matches the relational store: deleting a tag
//! detaches it from tasks and notes, and renaming a tag is visible through
//! every task that carries it, because embedded tags are rehydrated from the
//! tag collection on every read.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Note, NoteId, Tag, TagId, Task, TaskId, User, UserId};

use super::{NoteFilter, NoteStore, StoreError, TagStore, TaskFilter, TaskStore, UserStore};

#[derive(Debug, Default)]
struct State {
    users: HashMap<UserId, User>,
    tasks: HashMap<TaskId, Task>,
    notes: HashMap<NoteId, Note>,
    tags: HashMap<TagId, Tag>,
}

/// All four stores over a single shared in-memory state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Refreshes embedded tags from the tag collection, dropping deleted ones.
fn hydrate_tags(tags: &[Tag], live: &HashMap<TagId, Tag>) -> Vec<Tag> {
    let mut hydrated: Vec<Tag> = tags
        .iter()
        .filter_map(|tag| live.get(&tag.id).cloned())
        .collect();
    hydrated.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    hydrated
}

fn hydrate_task(task: &Task, state: &State) -> Task {
    let mut task = task.clone();
    task.tags = hydrate_tags(&task.tags, &state.tags);
    task
}

fn hydrate_note(note: &Note, state: &State) -> Note {
    let mut note = note.clone();
    note.tags = hydrate_tags(&note.tags, &state.tags);
    note
}

fn matches_search(search: &str, title: &str, body: Option<&str>) -> bool {
    let needle = search.to_lowercase();
    title.to_lowercase().contains(&needle)
        || body.is_some_and(|text| text.to_lowercase().contains(&needle))
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut state = self.state.write().await;
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|user| user.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|user| user.email == email))
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn insert(&self, task: Task) -> Result<Task, StoreError> {
        let mut state = self.state.write().await;
        state.tasks.insert(task.id, task.clone());
        Ok(hydrate_task(&task, &state))
    }

    async fn update(&self, task: Task) -> Result<Task, StoreError> {
        let mut state = self.state.write().await;
        state.tasks.insert(task.id, task.clone());
        Ok(hydrate_task(&task, &state))
    }

    async fn find(&self, id: TaskId, owner: UserId) -> Result<Option<Task>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .tasks
            .get(&id)
            .filter(|task| task.owner == owner)
            .map(|task| hydrate_task(task, &state)))
    }

    async fn list(&self, owner: UserId, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let state = self.state.read().await;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.owner == owner)
            .filter(|task| match &filter.search {
                Some(search) => {
                    matches_search(search, &task.title, task.description.as_deref())
                }
                None => filter
                    .completed
                    .is_none_or(|completed| task.completed == completed),
            })
            .map(|task| hydrate_task(task, &state))
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(tasks)
    }

    async fn delete(&self, id: TaskId, owner: UserId) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let owned = state
            .tasks
            .get(&id)
            .is_some_and(|task| task.owner == owner);
        if owned {
            state.tasks.remove(&id);
        }
        Ok(owned)
    }

    async fn count_by_completion(
        &self,
        owner: UserId,
        completed: bool,
    ) -> Result<u64, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.owner == owner && task.completed == completed)
            .count() as u64)
    }
}

#[async_trait]
impl NoteStore for InMemoryStore {
    async fn insert(&self, note: Note) -> Result<Note, StoreError> {
        let mut state = self.state.write().await;
        state.notes.insert(note.id, note.clone());
        Ok(hydrate_note(&note, &state))
    }

    async fn update(&self, note: Note) -> Result<Note, StoreError> {
        let mut state = self.state.write().await;
        state.notes.insert(note.id, note.clone());
        Ok(hydrate_note(&note, &state))
    }

    async fn find(&self, id: NoteId, owner: UserId) -> Result<Option<Note>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .notes
            .get(&id)
            .filter(|note| note.owner == owner)
            .map(|note| hydrate_note(note, &state)))
    }

    async fn list(&self, owner: UserId, filter: &NoteFilter) -> Result<Vec<Note>, StoreError> {
        let state = self.state.read().await;
        let mut notes: Vec<Note> = state
            .notes
            .values()
            .filter(|note| note.owner == owner)
            .filter(|note| match &filter.search {
                Some(search) => matches_search(search, &note.title, note.content.as_deref()),
                None => true,
            })
            .map(|note| hydrate_note(note, &state))
            .collect();
        // Pinned notes first, then newest first.
        notes.sort_by(|a, b| {
            b.is_pinned
                .cmp(&a.is_pinned)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(notes)
    }

    async fn delete(&self, id: NoteId, owner: UserId) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let owned = state
            .notes
            .get(&id)
            .is_some_and(|note| note.owner == owner);
        if owned {
            state.notes.remove(&id);
        }
        Ok(owned)
    }

    async fn count(&self, owner: UserId) -> Result<u64, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .notes
            .values()
            .filter(|note| note.owner == owner)
            .count() as u64)
    }

    async fn count_pinned(&self, owner: UserId) -> Result<u64, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .notes
            .values()
            .filter(|note| note.owner == owner && note.is_pinned)
            .count() as u64)
    }
}

#[async_trait]
impl TagStore for InMemoryStore {
    async fn insert(&self, tag: Tag) -> Result<Tag, StoreError> {
        let mut state = self.state.write().await;
        state.tags.insert(tag.id, tag.clone());
        Ok(tag)
    }

    async fn update(&self, tag: Tag) -> Result<Tag, StoreError> {
        let mut state = self.state.write().await;
        state.tags.insert(tag.id, tag.clone());
        Ok(tag)
    }

    async fn find(&self, id: TagId, owner: UserId) -> Result<Option<Tag>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .tags
            .get(&id)
            .filter(|tag| tag.owner == owner)
            .cloned())
    }

    async fn find_by_name(&self, owner: UserId, name: &str) -> Result<Option<Tag>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .tags
            .values()
            .find(|tag| tag.owner == owner && tag.name == name)
            .cloned())
    }

    async fn list(&self, owner: UserId) -> Result<Vec<Tag>, StoreError> {
        let state = self.state.read().await;
        let mut tags: Vec<Tag> = state
            .tags
            .values()
            .filter(|tag| tag.owner == owner)
            .cloned()
            .collect();
        tags.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(tags)
    }

    async fn delete(&self, id: TagId, owner: UserId) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let owned = state.tags.get(&id).is_some_and(|tag| tag.owner == owner);
        if owned {
            state.tags.remove(&id);
            // Reads rehydrate tags, so stale embedded copies vanish on the
            // next lookup; nothing else to detach here.
        }
        Ok(owned)
    }
}
