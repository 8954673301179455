use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use notekeep_core::export::{render_notes_export, suggested_export_file_name};

use crate::cli::ExportFormat;
use crate::commands::common::open_store;
use crate::config::StoreLocation;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    location: &StoreLocation,
) -> Result<(), CliError> {
    let store = open_store(location);
    let notes = store.view("");
    let rendered = render_notes_export(&notes, format.into())?;

    if let Some(path) = output_path {
        let path = export_target(path, format, Utc::now());
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

/// File to write: `output` itself, or a timestamped file inside it when it is
/// an existing directory
pub fn export_target(output: &Path, format: ExportFormat, now: DateTime<Utc>) -> PathBuf {
    if output.is_dir() {
        output.join(suggested_export_file_name(format.into(), now))
    } else {
        output.to_path_buf()
    }
}
