use crate::commands::common::{format_note_lines, note_to_list_item, open_store, NoteListItem};
use crate::config::StoreLocation;
use crate::error::CliError;

pub fn run_list(
    query: Option<&str>,
    limit: usize,
    as_json: bool,
    location: &StoreLocation,
) -> Result<(), CliError> {
    let store = open_store(location);
    let mut notes = store.view(query.unwrap_or(""));
    notes.truncate(limit);

    if as_json {
        let json_items = notes
            .iter()
            .map(|note| note_to_list_item(note))
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if notes.is_empty() {
        eprintln!("No notes yet. Create one with `notekeep add`.");
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}
