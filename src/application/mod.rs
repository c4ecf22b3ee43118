//! Application services.
//!
//! Services enforce ownership, resolve tag references, apply partial
//! updates, and compute statistics. Every protected operation takes the
//! authenticated user as an explicit parameter; there is no ambient
//! security context.

pub mod services;

pub use services::auth::{AuthService, AuthSuccess, Credentials, Signup};
pub use services::notes::{NewNote, NoteChanges, NoteService};
pub use services::stats::{NoteStatistics, StatsService, Statistics, TaskStatistics};
pub use services::tags::{NewTag, TagChanges, TagService};
pub use services::tasks::{NewTask, TaskChanges, TaskService};
