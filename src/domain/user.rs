//! User account entity.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::ids::UserId;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+$").expect("Invalid email regex pattern"));

/// A registered user account.
///
/// The identity anchor for every other entity: tasks, notes, and tags all
/// carry a `UserId` stamped at creation. The password is stored only as a
/// one-way hash; the plaintext never leaves the signup/login handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique account identifier.
    pub id: UserId,
    /// Login email, unique across all accounts.
    pub email: String,
    /// One-way password hash (PHC string).
    pub password_hash: String,
    /// Optional display name.
    pub full_name: Option<String>,
    /// Creation timestamp, immutable once set.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new account with a freshly generated id and timestamp.
    #[must_use]
    pub fn new(email: String, password_hash: String, full_name: Option<String>) -> Self {
        Self {
            id: UserId::generate(),
            email,
            password_hash,
            full_name,
            created_at: Utc::now(),
        }
    }

    /// Returns `true` if `email` is plausibly well-formed.
    #[must_use]
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }
}
