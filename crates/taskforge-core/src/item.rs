//! Task item types and lifecycle state.
//!
//! An [`Item`] is owned by exactly one user and carries a soft-delete marker
//! alongside its workflow [`ItemStatus`]. Soft-deleted items stay in the
//! database until permanently deleted; restore flips the marker back.

use serde::{Deserialize, Deserializer, Serialize};

/// Workflow status of an item.
///
/// Wire names match the stored text values, including the space in
/// `"In Progress"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Not started yet (the default on creation).
    Pending,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Done.
    Completed,
}

impl ItemStatus {
    /// The stored/wire text for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parse a stored text value back into a status.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl Default for ItemStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A task item as stored and as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable surrogate ID (`item_<uuidv7>`).
    pub id: String,
    /// Owning user's ID; set at creation, immutable.
    pub owner_id: String,
    /// Title, at least [`crate::MIN_TITLE_LEN`] characters.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: ItemStatus,
    /// Soft-delete marker; deleted items are hidden from default listings.
    pub is_deleted: bool,
    /// RFC 3339 creation timestamp, set once.
    pub created_at: String,
    /// RFC 3339 timestamp refreshed on every mutation.
    pub updated_at: String,
}

/// Partial update for an item.
///
/// Absent fields are untouched. `description` distinguishes "not provided"
/// (outer `None`) from an explicit `null` that clears the stored value
/// (`Some(None)`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemPatch {
    /// New title; validated against the minimum length when present.
    pub title: Option<String>,
    /// New description; explicit `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// New workflow status.
    pub status: Option<ItemStatus>,
    /// New soft-delete marker.
    pub is_deleted: Option<bool>,
}

impl ItemPatch {
    /// True when no field is present (applying it only bumps `updated_at`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.is_deleted.is_none()
    }
}

/// Deserialize a field so a present-but-null value becomes `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
