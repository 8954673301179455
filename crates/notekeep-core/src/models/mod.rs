//! Data models for notekeep

mod note;

pub use note::{Note, NoteId, UNTITLED};
