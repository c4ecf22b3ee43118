//! Domain errors shared by all application services.
//!
//! Errors are plain algebraic data types with hand-written `Display`
//! messages; the API layer turns every variant into the same HTTP 400
//! envelope, so the message text is the only discriminator a client sees.
//!
//! A cross-user lookup miss is always reported as `NotFound`, never as a
//! permission error, so the existence of other users' records is not leaked.

use std::fmt;

/// Result alias for service operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors that can occur during task, note, tag, and auth operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is missing or a supplied field is malformed.
    Validation(String),

    /// The id did not resolve to a record owned by the current user.
    NotFound(String),

    /// The operation would violate a uniqueness constraint.
    Conflict(String),

    /// Login failed. Deliberately carries no detail so that an unknown
    /// email and a wrong password are indistinguishable.
    InvalidCredentials,

    /// A protected operation was reached without an attached identity.
    Unauthenticated,

    /// The underlying store failed.
    Store(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::NotFound(message) | Self::Conflict(message) => {
                write!(formatter, "{message}")
            }
            Self::InvalidCredentials => write!(formatter, "Invalid credentials"),
            Self::Unauthenticated => write!(formatter, "Authentication required"),
            Self::Store(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    /// Convenience constructor for a not-found error on the given entity.
    #[must_use]
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{entity} not found"))
    }
}
