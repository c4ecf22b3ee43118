//! Request/response DTOs and transformations.

pub mod requests;
pub mod responses;
pub mod transformers;
