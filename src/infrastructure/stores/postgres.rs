//! Postgres store implementation (sqlx).
//!
//! One struct over a connection pool implements all four store traits.
//! Tag associations live in `task_tags` / `note_tags` join tables and are
//! replaced transactionally on every write, so a failed write never leaves a
//! partial tag association behind. The schema is applied idempotently at
//! startup from `migrations/0001_init.sql`.

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};
use uuid::Uuid;

use crate::domain::{Note, NoteId, Tag, TagId, Task, TaskId, User, UserId};

use super::{NoteFilter, NoteStore, StoreError, TagStore, TaskFilter, TaskStore, UserStore};

const SCHEMA: &str = include_str!("../../../migrations/0001_init.sql");

/// All four stores over a shared Postgres pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Wraps an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the schema. Safe to run on every startup.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if a statement fails.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    async fn tags_for(&self, join_table: &str, fk: &str, id: Uuid) -> Result<Vec<Tag>, StoreError> {
        let sql = format!(
            "SELECT t.id, t.user_id, t.name, t.color, t.created_at \
             FROM tags t JOIN {join_table} j ON j.tag_id = t.id \
             WHERE j.{fk} = $1 ORDER BY t.created_at DESC"
        );
        let rows = sqlx::query(&sql).bind(id).fetch_all(&self.pool).await?;
        rows.iter().map(tag_from_row).collect()
    }
}

fn search_pattern(search: &str) -> String {
    format!("%{}%", search.to_lowercase())
}

fn tag_from_row(row: &PgRow) -> Result<Tag, StoreError> {
    Ok(Tag {
        id: TagId::from(row.try_get::<Uuid, _>("id")?),
        owner: UserId::from(row.try_get::<Uuid, _>("user_id")?),
        name: row.try_get("name")?,
        color: row.try_get("color")?,
        created_at: row.try_get("created_at")?,
    })
}

fn user_from_row(row: &PgRow) -> Result<User, StoreError> {
    Ok(User {
        id: UserId::from(row.try_get::<Uuid, _>("id")?),
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        full_name: row.try_get("full_name")?,
        created_at: row.try_get("created_at")?,
    })
}

fn task_from_row(row: &PgRow) -> Result<Task, StoreError> {
    Ok(Task {
        id: TaskId::from(row.try_get::<Uuid, _>("id")?),
        owner: UserId::from(row.try_get::<Uuid, _>("user_id")?),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        priority: row.try_get("priority")?,
        completed: row.try_get("completed")?,
        due_date: row.try_get("due_date")?,
        tags: Vec::new(),
        created_at: row.try_get("created_at")?,
    })
}

fn note_from_row(row: &PgRow) -> Result<Note, StoreError> {
    Ok(Note {
        id: NoteId::from(row.try_get::<Uuid, _>("id")?),
        owner: UserId::from(row.try_get::<Uuid, _>("user_id")?),
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        is_pinned: row.try_get("is_pinned")?,
        tags: Vec::new(),
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl UserStore for PostgresStore {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        sqlx::query(
            "INSERT INTO users (id, email, password_hash, full_name, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user.id.as_uuid())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, full_name, created_at \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl TaskStore for PostgresStore {
    async fn insert(&self, task: Task) -> Result<Task, StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO tasks \
             (id, user_id, title, description, priority, completed, due_date, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(task.id.as_uuid())
        .bind(task.owner.as_uuid())
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.priority)
        .bind(task.completed)
        .bind(task.due_date)
        .bind(task.created_at)
        .execute(&mut *tx)
        .await?;
        for tag in &task.tags {
            sqlx::query("INSERT INTO task_tags (task_id, tag_id) VALUES ($1, $2)")
                .bind(task.id.as_uuid())
                .bind(tag.id.as_uuid())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(task)
    }

    async fn update(&self, task: Task) -> Result<Task, StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "UPDATE tasks SET title = $3, description = $4, priority = $5, \
             completed = $6, due_date = $7 WHERE id = $1 AND user_id = $2",
        )
        .bind(task.id.as_uuid())
        .bind(task.owner.as_uuid())
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.priority)
        .bind(task.completed)
        .bind(task.due_date)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM task_tags WHERE task_id = $1")
            .bind(task.id.as_uuid())
            .execute(&mut *tx)
            .await?;
        for tag in &task.tags {
            sqlx::query("INSERT INTO task_tags (task_id, tag_id) VALUES ($1, $2)")
                .bind(task.id.as_uuid())
                .bind(tag.id.as_uuid())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(task)
    }

    async fn find(&self, id: TaskId, owner: UserId) -> Result<Option<Task>, StoreError> {
        let row = sqlx::query(
            "SELECT id, user_id, title, description, priority, completed, due_date, created_at \
             FROM tasks WHERE id = $1 AND user_id = $2",
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => {
                let mut task = task_from_row(&row)?;
                task.tags = self.tags_for("task_tags", "task_id", id.as_uuid()).await?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, owner: UserId, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let rows = if let Some(search) = filter.search.as_deref() {
            sqlx::query(
                "SELECT id, user_id, title, description, priority, completed, due_date, \
                 created_at FROM tasks WHERE user_id = $1 AND \
                 (LOWER(title) LIKE $2 OR LOWER(description) LIKE $2) \
                 ORDER BY created_at DESC",
            )
            .bind(owner.as_uuid())
            .bind(search_pattern(search))
            .fetch_all(&self.pool)
            .await?
        } else if let Some(completed) = filter.completed {
            sqlx::query(
                "SELECT id, user_id, title, description, priority, completed, due_date, \
                 created_at FROM tasks WHERE user_id = $1 AND completed = $2 \
                 ORDER BY created_at DESC",
            )
            .bind(owner.as_uuid())
            .bind(completed)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query(
                "SELECT id, user_id, title, description, priority, completed, due_date, \
                 created_at FROM tasks WHERE user_id = $1 ORDER BY created_at DESC",
            )
            .bind(owner.as_uuid())
            .fetch_all(&self.pool)
            .await?
        };

        let mut tasks = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut task = task_from_row(row)?;
            task.tags = self
                .tags_for("task_tags", "task_id", task.id.as_uuid())
                .await?;
            tasks.push(task);
        }
        Ok(tasks)
    }

    async fn delete(&self, id: TaskId, owner: UserId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_by_completion(
        &self,
        owner: UserId,
        completed: bool,
    ) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) FROM tasks WHERE user_id = $1 AND completed = $2")
            .bind(owner.as_uuid())
            .bind(completed)
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.try_get(0)?;
        Ok(count.unsigned_abs())
    }
}

#[async_trait]
impl NoteStore for PostgresStore {
    async fn insert(&self, note: Note) -> Result<Note, StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO notes (id, user_id, title, content, is_pinned, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(note.id.as_uuid())
        .bind(note.owner.as_uuid())
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.is_pinned)
        .bind(note.created_at)
        .execute(&mut *tx)
        .await?;
        for tag in &note.tags {
            sqlx::query("INSERT INTO note_tags (note_id, tag_id) VALUES ($1, $2)")
                .bind(note.id.as_uuid())
                .bind(tag.id.as_uuid())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(note)
    }

    async fn update(&self, note: Note) -> Result<Note, StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "UPDATE notes SET title = $3, content = $4, is_pinned = $5 \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(note.id.as_uuid())
        .bind(note.owner.as_uuid())
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.is_pinned)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM note_tags WHERE note_id = $1")
            .bind(note.id.as_uuid())
            .execute(&mut *tx)
            .await?;
        for tag in &note.tags {
            sqlx::query("INSERT INTO note_tags (note_id, tag_id) VALUES ($1, $2)")
                .bind(note.id.as_uuid())
                .bind(tag.id.as_uuid())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(note)
    }

    async fn find(&self, id: NoteId, owner: UserId) -> Result<Option<Note>, StoreError> {
        let row = sqlx::query(
            "SELECT id, user_id, title, content, is_pinned, created_at \
             FROM notes WHERE id = $1 AND user_id = $2",
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => {
                let mut note = note_from_row(&row)?;
                note.tags = self.tags_for("note_tags", "note_id", id.as_uuid()).await?;
                Ok(Some(note))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, owner: UserId, filter: &NoteFilter) -> Result<Vec<Note>, StoreError> {
        let rows = if let Some(search) = filter.search.as_deref() {
            sqlx::query(
                "SELECT id, user_id, title, content, is_pinned, created_at \
                 FROM notes WHERE user_id = $1 AND \
                 (LOWER(title) LIKE $2 OR LOWER(content) LIKE $2) \
                 ORDER BY is_pinned DESC, created_at DESC",
            )
            .bind(owner.as_uuid())
            .bind(search_pattern(search))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query(
                "SELECT id, user_id, title, content, is_pinned, created_at \
                 FROM notes WHERE user_id = $1 ORDER BY is_pinned DESC, created_at DESC",
            )
            .bind(owner.as_uuid())
            .fetch_all(&self.pool)
            .await?
        };

        let mut notes = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut note = note_from_row(row)?;
            note.tags = self
                .tags_for("note_tags", "note_id", note.id.as_uuid())
                .await?;
            notes.push(note);
        }
        Ok(notes)
    }

    async fn delete(&self, id: NoteId, owner: UserId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, owner: UserId) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) FROM notes WHERE user_id = $1")
            .bind(owner.as_uuid())
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.try_get(0)?;
        Ok(count.unsigned_abs())
    }

    async fn count_pinned(&self, owner: UserId) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) FROM notes WHERE user_id = $1 AND is_pinned")
            .bind(owner.as_uuid())
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.try_get(0)?;
        Ok(count.unsigned_abs())
    }
}

#[async_trait]
impl TagStore for PostgresStore {
    async fn insert(&self, tag: Tag) -> Result<Tag, StoreError> {
        sqlx::query(
            "INSERT INTO tags (id, user_id, name, color, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(tag.id.as_uuid())
        .bind(tag.owner.as_uuid())
        .bind(&tag.name)
        .bind(&tag.color)
        .bind(tag.created_at)
        .execute(&self.pool)
        .await?;
        Ok(tag)
    }

    async fn update(&self, tag: Tag) -> Result<Tag, StoreError> {
        sqlx::query("UPDATE tags SET name = $3, color = $4 WHERE id = $1 AND user_id = $2")
            .bind(tag.id.as_uuid())
            .bind(tag.owner.as_uuid())
            .bind(&tag.name)
            .bind(&tag.color)
            .execute(&self.pool)
            .await?;
        Ok(tag)
    }

    async fn find(&self, id: TagId, owner: UserId) -> Result<Option<Tag>, StoreError> {
        let row = sqlx::query(
            "SELECT id, user_id, name, color, created_at \
             FROM tags WHERE id = $1 AND user_id = $2",
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(tag_from_row).transpose()
    }

    async fn find_by_name(&self, owner: UserId, name: &str) -> Result<Option<Tag>, StoreError> {
        let row = sqlx::query(
            "SELECT id, user_id, name, color, created_at \
             FROM tags WHERE user_id = $1 AND name = $2",
        )
        .bind(owner.as_uuid())
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(tag_from_row).transpose()
    }

    async fn list(&self, owner: UserId) -> Result<Vec<Tag>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, name, color, created_at \
             FROM tags WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(tag_from_row).collect()
    }

    async fn delete(&self, id: TagId, owner: UserId) -> Result<bool, StoreError> {
        // Join rows cascade via the schema's ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM tags WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
