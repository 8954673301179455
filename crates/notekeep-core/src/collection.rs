//! Copy-on-write note collection.
//!
//! Every mutation borrows the current collection and hands back a new one, or
//! `None` when the call would not change anything. Readers holding the old
//! value never observe a partial update.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Note, NoteId};
use crate::search;

/// Notes in insertion order, newest-created first.
///
/// Ids are unique and every note satisfies `updated_at >= created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Build a collection from notes of unknown provenance.
    ///
    /// Later duplicates of an id are dropped and `updated_at` values that
    /// precede `created_at` are clamped.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut seen = HashSet::with_capacity(notes.len());
        let notes = notes
            .into_iter()
            .filter_map(|mut note| {
                if !seen.insert(note.id) {
                    tracing::warn!("Dropping duplicate note id {}", note.id);
                    return None;
                }
                if note.updated_at < note.created_at {
                    tracing::warn!("Note {} updated before it was created; clamping", note.id);
                    note.updated_at = note.created_at;
                }
                Some(note)
            })
            .collect();
        Self { notes }
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    /// Ids whose textual form starts with `prefix`, in insertion order
    pub fn ids_with_prefix(&self, prefix: &str) -> Vec<NoteId> {
        let prefix = prefix.to_ascii_lowercase();
        self.notes
            .iter()
            .map(|note| note.id)
            .filter(|id| id.as_str().starts_with(&prefix))
            .collect()
    }

    /// Filtered and ordered view for display; see [`search::view`]
    pub fn view(&self, query: &str) -> Vec<&Note> {
        search::view(&self.notes, query)
    }

    /// Prepend a note built from raw form input.
    ///
    /// Returns `None` when both fields are blank after trimming.
    pub fn with_created(&self, title: &str, body: &str, now: DateTime<Utc>) -> Option<(Self, NoteId)> {
        let note = Note::create(title, body, now)?;
        let id = note.id;

        let mut notes = Vec::with_capacity(self.notes.len() + 1);
        notes.push(note);
        notes.extend(self.notes.iter().cloned());
        Some((Self { notes }, id))
    }

    /// Replace title and body verbatim (no trimming) and refresh `updated_at`
    pub fn with_updated(&self, id: &NoteId, title: &str, body: &str, now: DateTime<Utc>) -> Option<Self> {
        self.with_note_changed(id, |note| {
            note.title = title.to_string();
            note.body = body.to_string();
            note.touch(now);
        })
    }

    pub fn without(&self, id: &NoteId) -> Option<Self> {
        let index = self.position(id)?;
        let mut notes = self.notes.clone();
        notes.remove(index);
        Some(Self { notes })
    }

    pub fn with_pin_toggled(&self, id: &NoteId, now: DateTime<Utc>) -> Option<Self> {
        self.with_note_changed(id, |note| {
            note.pinned = !note.pinned;
            note.touch(now);
        })
    }

    pub fn with_favorite_toggled(&self, id: &NoteId, now: DateTime<Utc>) -> Option<Self> {
        self.with_note_changed(id, |note| {
            note.favorite = !note.favorite;
            note.touch(now);
        })
    }

    fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == *id)
    }

    fn with_note_changed(&self, id: &NoteId, change: impl FnOnce(&mut Note)) -> Option<Self> {
        let index = self.position(id)?;
        let mut notes = self.notes.clone();
        change(&mut notes[index]);
        Some(Self { notes })
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn seeded() -> (NoteCollection, NoteId, NoteId) {
        let (one, first) = NoteCollection::new()
            .with_created("First", "", at(1))
            .unwrap();
        let (two, second) = one.with_created("Second", "", at(2)).unwrap();
        (two, first, second)
    }

    #[test]
    fn created_note_is_prepended() {
        let (notes, first, second) = seeded();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.as_slice()[0].id, second);
        assert_eq!(notes.as_slice()[1].id, first);
    }

    #[test]
    fn blank_creation_is_a_noop() {
        let (notes, _, _) = seeded();
        assert!(notes.with_created("", "", at(3)).is_none());
        assert!(notes.with_created("   ", "", at(3)).is_none());
    }

    #[test]
    fn mutation_leaves_previous_value_untouched() {
        let (before, first, _) = seeded();
        let after = before.with_pin_toggled(&first, at(5)).unwrap();

        assert!(!before.get(&first).unwrap().pinned);
        assert!(after.get(&first).unwrap().pinned);
    }

    #[test]
    fn update_keeps_text_verbatim() {
        let (notes, first, _) = seeded();
        let updated = notes
            .with_updated(&first, "  padded  ", " body ", at(9))
            .unwrap();
        let note = updated.get(&first).unwrap();

        assert_eq!(note.title, "  padded  ");
        assert_eq!(note.body, " body ");
        assert_eq!(note.updated_at, at(9));
        assert_eq!(note.created_at, at(1));
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let (notes, _, _) = seeded();
        let missing = NoteId::new();

        assert!(notes.with_updated(&missing, "x", "y", at(9)).is_none());
        assert!(notes.without(&missing).is_none());
        assert!(notes.with_pin_toggled(&missing, at(9)).is_none());
        assert!(notes.with_favorite_toggled(&missing, at(9)).is_none());
    }

    #[test]
    fn without_removes_exactly_one() {
        let (notes, first, second) = seeded();
        let remaining = notes.without(&first).unwrap();

        assert_eq!(remaining.len(), 1);
        assert!(remaining.get(&first).is_none());
        assert!(remaining.get(&second).is_some());
        assert!(remaining.without(&first).is_none());
    }

    #[test]
    fn from_notes_repairs_invariants() {
        let mut note = Note::create("a", "", at(10)).unwrap();
        note.updated_at = at(10) - Duration::seconds(5);
        let duplicate = Note {
            title: "shadow".to_string(),
            ..note.clone()
        };

        let notes = NoteCollection::from_notes(vec![note.clone(), duplicate]);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.as_slice()[0].title, "a");
        assert_eq!(notes.as_slice()[0].updated_at, note.created_at);
    }

    #[test]
    fn ids_with_prefix_matches_textual_form() {
        let (notes, first, _) = seeded();
        let full = first.as_str();

        assert_eq!(notes.ids_with_prefix(&full), vec![first]);
        assert_eq!(notes.ids_with_prefix(&full.to_uppercase()), vec![first]);
        assert_eq!(notes.ids_with_prefix("").len(), 2);
        assert!(notes.ids_with_prefix("zzzz").is_empty());
    }
}
