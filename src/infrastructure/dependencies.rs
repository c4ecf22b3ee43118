//! Dependency injection container.
//!
//! `AppDependencies` holds the configuration, token service, and the four
//! store trait objects. It is the axum router state, cloned per request;
//! everything inside is `Arc`-wrapped and cheap to clone.

use std::sync::Arc;

use sqlx::postgres::PgPool;

use super::config::{AccessMode, AppConfig};
use super::stores::memory::InMemoryStore;
use super::stores::postgres::PostgresStore;
use super::stores::{NoteStore, TagStore, TaskStore, UserStore};
use super::token::TokenService;

/// Application dependency container.
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    token_service: Arc<TokenService>,
    users: Arc<dyn UserStore>,
    tasks: Arc<dyn TaskStore>,
    notes: Arc<dyn NoteStore>,
    tags: Arc<dyn TagStore>,
}

impl AppDependencies {
    /// Creates a container over explicit store implementations.
    #[must_use]
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        tasks: Arc<dyn TaskStore>,
        notes: Arc<dyn NoteStore>,
        tags: Arc<dyn TagStore>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(
            &config.jwt_secret,
            config.jwt_expiration_secs,
        ));
        Self {
            config,
            token_service,
            users,
            tasks,
            notes,
            tags,
        }
    }

    /// Wires all four stores to a single shared in-memory state.
    #[must_use]
    pub fn in_memory(config: AppConfig) -> Self {
        let store = InMemoryStore::new();
        Self::new(
            config,
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    /// Wires all four stores to a Postgres pool.
    #[must_use]
    pub fn postgres(config: AppConfig, pool: PgPool) -> Self {
        let store = PostgresStore::new(pool);
        Self::new(
            config,
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the authentication policy for this instance.
    #[must_use]
    pub const fn access_mode(&self) -> AccessMode {
        self.config.access_mode
    }

    /// Returns the token service.
    #[must_use]
    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }

    /// Returns the user store.
    #[must_use]
    pub fn users(&self) -> &Arc<dyn UserStore> {
        &self.users
    }

    /// Returns the task store.
    #[must_use]
    pub fn tasks(&self) -> &Arc<dyn TaskStore> {
        &self.tasks
    }

    /// Returns the note store.
    #[must_use]
    pub fn notes(&self) -> &Arc<dyn NoteStore> {
        &self.notes
    }

    /// Returns the tag store.
    #[must_use]
    pub fn tags(&self) -> &Arc<dyn TagStore> {
        &self.tags
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .field("token_service", &self.token_service)
            .field("users", &"<dyn UserStore>")
            .field("tasks", &"<dyn TaskStore>")
            .field("notes", &"<dyn NoteStore>")
            .field("tags", &"<dyn TagStore>")
            .finish()
    }
}
