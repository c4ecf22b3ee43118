//! Infrastructure: configuration, credentials, token signing, and storage.

pub mod config;
pub mod dependencies;
pub mod password;
pub mod stores;
pub mod token;

pub use config::{AccessMode, AppConfig, ConfigError};
pub use dependencies::AppDependencies;
pub use stores::memory::InMemoryStore;
pub use stores::postgres::PostgresStore;
pub use stores::{
    NoteFilter, NoteStore, StoreError, TagStore, TaskFilter, TaskStore, UserStore,
};
pub use token::{TokenError, TokenService};
