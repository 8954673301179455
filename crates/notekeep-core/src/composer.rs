//! Draft state for the note form.
//!
//! A front end keeps one [`Composer`] next to its [`NoteStore`]. Submitting
//! the draft either creates a note or updates the one being edited, depending
//! on the [`EditorMode`].

use crate::clock::Clock;
use crate::models::{Note, NoteId};
use crate::storage::KeyValueStore;
use crate::store::NoteStore;

/// Whether the form is writing a new note or editing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Composing,
    Editing(NoteId),
}

/// Outcome of [`Composer::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Title and body were both blank; the draft was kept
    Empty,
    Created(NoteId),
    Updated(NoteId),
    /// The note being edited no longer exists; the draft was discarded
    Stale(NoteId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    pub title: String,
    pub body: String,
    mode: EditorMode,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    /// Load `note` into the draft and switch to editing it
    pub fn begin_edit(&mut self, note: &Note) {
        self.title.clone_from(&note.title);
        self.body.clone_from(&note.body);
        self.mode = EditorMode::Editing(note.id);
    }

    /// Clear the draft and go back to composing
    pub fn reset(&mut self) {
        self.title.clear();
        self.body.clear();
        self.mode = EditorMode::Composing;
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Drop the draft if it belongs to a note that was just deleted
    pub fn note_deleted(&mut self, id: &NoteId) {
        if self.mode == EditorMode::Editing(*id) {
            self.reset();
        }
    }

    /// Apply the draft to `store`.
    ///
    /// Creation trims the input; an edit stores title and body exactly as
    /// typed. Any outcome other than [`Submission::Empty`] resets the draft.
    pub fn submit<S: KeyValueStore, C: Clock>(&mut self, store: &mut NoteStore<S, C>) -> Submission {
        if self.title.trim().is_empty() && self.body.trim().is_empty() {
            return Submission::Empty;
        }

        let outcome = match self.mode {
            EditorMode::Composing => match store.create(&self.title, &self.body) {
                Some(id) => Submission::Created(id),
                None => Submission::Empty,
            },
            EditorMode::Editing(id) => {
                if store.update(&id, &self.title, &self.body) {
                    Submission::Updated(id)
                } else {
                    Submission::Stale(id)
                }
            }
        };

        self.reset();
        outcome
    }
}
