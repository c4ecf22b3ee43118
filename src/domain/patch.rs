//! Partial-update field wrapper.
//!
//! Update requests are PUT-shaped but apply PATCH semantics: a field that is
//! present (and non-null) overwrites the stored value, while a field that is
//! absent or JSON `null` leaves the stored value untouched. A plain
//! `Option<T>` cannot express "leave untouched" as a distinct state once the
//! entity field is itself optional, so updates use [`Patch<T>`] instead.
//!
//! # Example
//!
//! ```rust
//! use tasknotes::domain::Patch;
//!
//! let mut title = "Buy milk".to_string();
//! Patch::Set("Buy oat milk".to_string()).apply(&mut title);
//! assert_eq!(title, "Buy oat milk");
//!
//! Patch::<String>::Absent.apply(&mut title);
//! assert_eq!(title, "Buy oat milk");
//! ```

use serde::{Deserialize, Deserializer};

/// A field in a partial-update request.
///
/// Deserializes a missing field and an explicit JSON `null` both to
/// [`Patch::Absent`]; any other value becomes [`Patch::Set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was not supplied; keep the stored value.
    Absent,
    /// The field was supplied; overwrite the stored value.
    Set(T),
}

// Hand-written so `Patch<T>: Default` holds without a `T: Default` bound.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Patch<T> {
    /// Returns `true` if the field was supplied.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Overwrites `slot` when the field was supplied.
    pub fn apply(self, slot: &mut T) {
        if let Self::Set(value) = self {
            *slot = value;
        }
    }

    /// Overwrites the optional `slot` when the field was supplied.
    pub fn apply_some(self, slot: &mut Option<T>) {
        if let Self::Set(value) = self {
            *slot = Some(value);
        }
    }

    /// Maps the supplied value, keeping `Absent` as-is.
    #[must_use]
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Self::Absent => Patch::Absent,
            Self::Set(value) => Patch::Set(transform(value)),
        }
    }

    /// Converts to an `Option`, discarding the absent/set distinction.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Borrows the supplied value, if any.
    #[must_use]
    pub const fn as_ref(&self) -> Patch<&T> {
        match self {
            Self::Absent => Patch::Absent,
            Self::Set(value) => Patch::Set(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // JSON null deserializes to None, which collapses into Absent: the
        // wire contract treats null and missing identically.
        Option::<T>::deserialize(deserializer)
            .map(|value| value.map_or(Self::Absent, Self::Set))
    }
}
