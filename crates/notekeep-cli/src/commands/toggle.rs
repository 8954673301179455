use notekeep_core::NoteId;

use crate::commands::common::{open_store, resolve_note_id, CliStore};
use crate::config::StoreLocation;
use crate::error::CliError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flag {
    Pinned,
    Favorite,
}

impl Flag {
    const fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Pinned => ("pinned", "unpinned"),
            Self::Favorite => ("favorite", "not favorite"),
        }
    }
}

pub fn run_toggle(flag: Flag, id: &str, location: &StoreLocation) -> Result<(), CliError> {
    let mut store = open_store(location);
    let note_id = resolve_note_id(id, &store)?;
    let enabled = toggle_flag(&mut store, flag, &note_id)?;

    let (on, off) = flag.labels();
    println!("{note_id} {}", if enabled { on } else { off });
    Ok(())
}

/// Flip `flag` on the note and return its new value
pub fn toggle_flag(store: &mut CliStore, flag: Flag, id: &NoteId) -> Result<bool, CliError> {
    let toggled = match flag {
        Flag::Pinned => store.toggle_pin(id),
        Flag::Favorite => store.toggle_favorite(id),
    };
    let note = store
        .get(id)
        .filter(|_| toggled)
        .ok_or_else(|| CliError::NoteNotFound(id.to_string()))?;

    Ok(match flag {
        Flag::Pinned => note.pinned,
        Flag::Favorite => note.favorite,
    })
}
