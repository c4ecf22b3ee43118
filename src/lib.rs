//! Personal task/notes manager API.
//!
//! A layered CRUD backend: HTTP handlers delegate to application services,
//! which enforce per-user ownership over stores backed by Postgres (or an
//! in-memory state for local iteration and tests). Authentication is a
//! stateless HMAC-signed bearer token resolved once per request by the
//! gate middleware.
//!
//! # Layers
//!
//! - [`api`]: routes, handlers, DTOs, authentication gate, error envelope
//! - [`application`]: services with explicit current-user context
//! - [`domain`]: entities, ids, partial-update wrapper, domain errors
//! - [`infrastructure`]: configuration, token signing, password hashing,
//!   store traits and their Postgres/in-memory implementations

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
