//! Note model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Title given to notes created with a blank title
pub const UNTITLED: &str = "Untitled";

/// A unique identifier for a note, using UUID v7 (time-sortable)
///
/// Persisted ids written by other clients may be any UUID version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A note in the system
///
/// Field names are serialized in camelCase (`createdAt`, `updatedAt`) so the
/// stored document stays readable by the browser build of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Short title, never empty for notes created through [`Note::create`]
    pub title: String,
    /// Plain text body, may be empty
    pub body: String,
    /// Pinned notes sort ahead of everything else
    #[serde(default)]
    pub pinned: bool,
    /// Favorites sort ahead of the remaining unpinned notes.
    ///
    /// Older browser documents predate this flag; a missing key reads as false.
    #[serde(default)]
    pub favorite: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a note from raw form input.
    ///
    /// Both fields are trimmed. Returns `None` when title and body are both
    /// blank; a blank title alone falls back to [`UNTITLED`].
    #[must_use]
    pub fn create(title: &str, body: &str, now: DateTime<Utc>) -> Option<Self> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() && body.is_empty() {
            return None;
        }

        Some(Self {
            id: NoteId::new(),
            title: (if title.is_empty() { UNTITLED } else { title }).to_string(),
            body: body.to_string(),
            pinned: false,
            favorite: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Refresh `updated_at`, never letting it fall behind `created_at`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    /// Case-insensitive substring match against title or body.
    ///
    /// `needle` must already be lowercased. An empty needle matches every note.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.body.to_lowercase().contains(needle)
    }

    /// Get first line of the body as a preview, truncated to `max_len` characters
    #[must_use]
    pub fn body_preview(&self, max_len: usize) -> String {
        self.body
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(max_len)
            .collect()
    }
}
