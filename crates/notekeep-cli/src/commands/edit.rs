use notekeep_core::{Composer, NoteId, Submission};

use crate::commands::common::{open_store, resolve_note_id, CliStore};
use crate::config::StoreLocation;
use crate::error::CliError;

pub fn run_edit(
    id: &str,
    title: Option<String>,
    body: Option<String>,
    location: &StoreLocation,
) -> Result<(), CliError> {
    let mut store = open_store(location);
    let note_id = resolve_note_id(id, &store)?;
    let updated = edit_note(&mut store, &note_id, title, body)?;

    println!("{updated}");
    Ok(())
}

/// Apply replacement fields through the composer; unset fields keep their
/// current value.
pub fn edit_note(
    store: &mut CliStore,
    id: &NoteId,
    title: Option<String>,
    body: Option<String>,
) -> Result<NoteId, CliError> {
    if title.is_none() && body.is_none() {
        return Err(CliError::NothingToEdit);
    }
    let note = store
        .get(id)
        .ok_or_else(|| CliError::NoteNotFound(id.to_string()))?;

    let mut composer = Composer::new();
    composer.begin_edit(note);
    if let Some(title) = title {
        composer.title = title;
    }
    if let Some(body) = body {
        composer.body = body;
    }

    match composer.submit(store) {
        Submission::Updated(id) => Ok(id),
        Submission::Empty => Err(CliError::EmptyEditedContent),
        Submission::Created(id) | Submission::Stale(id) => Err(CliError::NoteNotFound(id.to_string())),
    }
}
