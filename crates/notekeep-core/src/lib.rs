//! notekeep-core - Core library for notekeep
//!
//! This crate holds the note model, the copy-on-write collection and its
//! display view, the draft composer, and the key-value persistence used by
//! every notekeep front end.

pub mod clock;
pub mod collection;
pub mod composer;
pub mod error;
pub mod export;
pub mod models;
pub mod search;
pub mod storage;
pub mod store;
pub mod util;

pub use clock::{Clock, SystemClock};
pub use collection::NoteCollection;
pub use composer::{Composer, EditorMode, Submission};
pub use error::{Error, Result};
pub use models::{Note, NoteId};
pub use storage::{FileStore, KeyValueStore, MemoryStore, DEFAULT_STORAGE_KEY};
pub use store::NoteStore;
