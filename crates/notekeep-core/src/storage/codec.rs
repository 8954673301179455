//! JSON document format for a stored collection.
//!
//! The document is an array of note objects with the fields `id`, `title`,
//! `body`, `pinned`, `favorite`, `createdAt` and `updatedAt`; timestamps are
//! RFC 3339 strings. Documents written by the browser build (millisecond
//! `toISOString()` stamps, v4 ids) decode unchanged, including ones saved
//! before notes carried a `favorite` flag.

use crate::collection::NoteCollection;
use crate::models::Note;
use crate::Result;

/// Serialize the collection in insertion order
pub fn encode_notes(notes: &NoteCollection) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Parse a stored document.
///
/// Duplicate ids and inverted timestamps are repaired rather than rejected;
/// see [`NoteCollection::from_notes`].
pub fn decode_notes(raw: &str) -> Result<NoteCollection> {
    let notes: Vec<Note> = serde_json::from_str(raw)?;
    Ok(NoteCollection::from_notes(notes))
}
