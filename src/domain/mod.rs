//! Domain model for the task/notes manager.
//!
//! Entities are pure data plus invariant-preserving constructors. Every
//! resource carries the id of its owning user; ownership is stamped at
//! creation and never changes afterwards.

pub mod errors;
pub mod ids;
pub mod note;
pub mod patch;
pub mod tag;
pub mod task;
pub mod user;

pub use errors::{DomainError, DomainResult};
pub use ids::{NoteId, TagId, TaskId, UserId};
pub use note::Note;
pub use patch::Patch;
pub use tag::Tag;
pub use task::Task;
pub use user::User;
