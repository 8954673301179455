use std::io::{self, IsTerminal, Read};

use chrono::{DateTime, Utc};
use notekeep_core::util::truncate_with_ellipsis;
use notekeep_core::{FileStore, Note, NoteId, NoteStore};
use serde::Serialize;

use crate::config::StoreLocation;
use crate::error::CliError;

pub type CliStore = NoteStore<FileStore>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub pinned: bool,
    pub favorite: bool,
    pub created_at: String,
    pub updated_at: String,
    pub relative_time: String,
}

pub fn open_store(location: &StoreLocation) -> CliStore {
    NoteStore::open_with(
        FileStore::new(&location.data_dir),
        notekeep_core::SystemClock,
        location.storage_key.clone(),
    )
}

/// Resolve a full note id or a unique id prefix to an existing note
pub fn resolve_note_id(note_query: &str, store: &CliStore) -> Result<NoteId, CliError> {
    let note_query = normalize_note_identifier(note_query)?;

    if let Ok(note_id) = note_query.parse::<NoteId>() {
        if store.get(&note_id).is_some() {
            return Ok(note_id);
        }
    }

    let matching_ids = store.notes().ids_with_prefix(&note_query);

    match matching_ids.as_slice() {
        [] => Err(CliError::NoteNotFound(note_query)),
        [id] => Ok(*id),
        _ => {
            let options = matching_ids
                .iter()
                .take(3)
                .map(short_id)
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousNoteId(format!(
                "ID prefix '{note_query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn short_id(id: &NoteId) -> String {
    id.to_string().chars().take(13).collect()
}

pub fn flag_markers(note: &Note) -> String {
    format!(
        "{}{}",
        if note.pinned { 'P' } else { ' ' },
        if note.favorite { '*' } else { ' ' }
    )
}

pub fn format_note_lines(notes: &[&Note]) -> Vec<String> {
    let now = Utc::now();
    notes
        .iter()
        .map(|note| {
            let short_id = short_id(&note.id);
            let flags = flag_markers(note);
            let title = truncate_with_ellipsis(&collapse_whitespace(&note.title), 30);
            let preview = truncate_with_ellipsis(&collapse_whitespace(&note.body_preview(120)), 40);
            let relative_time = format_relative_time(note.updated_at, now);

            if preview.is_empty() {
                format!("{short_id:<13}  {flags}  {title:<30}  {relative_time}")
            } else {
                format!("{short_id:<13}  {flags}  {title:<30}  {preview:<40}  {relative_time}")
            }
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        body: note.body.clone(),
        pinned: note.pinned,
        favorite: note.favorite,
        created_at: note.created_at.to_rfc3339(),
        updated_at: note.updated_at.to_rfc3339(),
        relative_time: format_relative_time(note.updated_at, Utc::now()),
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compact age such as `5m ago`; future timestamps read as `just now`
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }

    let days = elapsed.num_days();
    let (amount, unit) = if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "m")
    } else if days < 1 {
        (elapsed.num_hours(), "h")
    } else if days < 7 {
        (days, "d")
    } else if days < 30 {
        (elapsed.num_weeks(), "w")
    } else if days < 365 {
        (days / 30, "mo")
    } else {
        (days / 365, "y")
    };
    format!("{amount}{unit} ago")
}

/// Note body from arguments, falling back to piped stdin
pub fn resolve_note_body(body_parts: &[String]) -> Result<String, CliError> {
    let joined = body_parts.join(" ");
    if !joined.trim().is_empty() {
        return Ok(joined);
    }

    Ok(read_piped_stdin()?.unwrap_or_default())
}

pub fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}
