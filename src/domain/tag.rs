//! Tag entity.
//!
//! Tags are user-owned labels attached to tasks and notes. A tag name is
//! unique per owner (not globally), and the color is a `#rrggbb` hex string.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::ids::{TagId, UserId};

/// Color assigned to tags created without an explicit color.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Maximum accepted tag name length.
pub const MAX_NAME_LENGTH: usize = 50;

static HEX_COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[A-Fa-f0-9]{6}$").expect("Invalid hex color regex pattern"));

/// A user-owned label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: TagId,
    /// Owning user, immutable after creation.
    pub owner: UserId,
    /// Label text, unique per owner.
    pub name: String,
    /// Hex color string, e.g. `#3b82f6`.
    pub color: String,
    /// Creation timestamp, immutable once set.
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Creates a new tag owned by `owner`, falling back to the default
    /// color when none is supplied.
    #[must_use]
    pub fn new(owner: UserId, name: String, color: Option<String>) -> Self {
        Self {
            id: TagId::generate(),
            owner,
            name,
            color: color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            created_at: Utc::now(),
        }
    }

    /// Returns `true` if `color` is a valid `#rrggbb` hex string.
    #[must_use]
    pub fn is_valid_color(color: &str) -> bool {
        HEX_COLOR_PATTERN.is_match(color)
    }
}
