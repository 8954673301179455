//! Note export helpers shared by front ends.

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::Note;

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render notes as pretty-printed JSON using the storage field names.
pub fn render_json_export(notes: &[&Note]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(notes)
}

/// Render notes in Markdown with frontmatter blocks.
#[must_use]
pub fn render_markdown_export(notes: &[&Note]) -> String {
    let mut output = String::new();

    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", note.id);
        let _ = writeln!(output, "title: {}", frontmatter_value(&note.title));
        let _ = writeln!(output, "pinned: {}", note.pinned);
        let _ = writeln!(output, "favorite: {}", note.favorite);
        let _ = writeln!(output, "created_at: {}", iso(note.created_at));
        let _ = writeln!(output, "updated_at: {}", iso(note.updated_at));
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        output.push_str(&note.body);
        output.push('\n');
    }

    output
}

/// Render notes based on selected export format.
pub fn render_notes_export(notes: &[&Note], format: ExportFormat) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(notes),
        ExportFormat::Markdown => Ok(render_markdown_export(notes)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp: DateTime<Utc>) -> String {
    format!(
        "notekeep-export-{}.{}",
        timestamp.format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

fn iso(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Quote titles that would otherwise break a YAML scalar
fn frontmatter_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value.trim() != value
        || value.contains(['\n', ':', '#', '"', '\''])
        || value.starts_with(['-', '[', '{', '*', '&', '!', '|', '>', '%', '@', '`']);
    if needs_quotes {
        serde_json::Value::String(value.to_string()).to_string()
    } else {
        value.to_string()
    }
}
