use notekeep_core::NoteId;

use crate::commands::common::{open_store, resolve_note_body, CliStore};
use crate::config::StoreLocation;
use crate::error::CliError;

pub fn run_add(
    title: Option<&str>,
    body_parts: &[String],
    location: &StoreLocation,
) -> Result<(), CliError> {
    let body = resolve_note_body(body_parts)?;
    let mut store = open_store(location);
    let id = add_note(&mut store, title.unwrap_or(""), &body)?;

    println!("{id}");
    Ok(())
}

pub fn add_note(store: &mut CliStore, title: &str, body: &str) -> Result<NoteId, CliError> {
    store.create(title, body).ok_or(CliError::EmptyContent)
}
