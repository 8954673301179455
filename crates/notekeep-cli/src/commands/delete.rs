use crate::commands::common::{open_store, resolve_note_id};
use crate::config::StoreLocation;
use crate::error::CliError;

pub fn run_delete(id: &str, location: &StoreLocation) -> Result<(), CliError> {
    let mut store = open_store(location);
    let note_id = resolve_note_id(id, &store)?;

    store.delete(&note_id);
    println!("{note_id}");
    Ok(())
}
