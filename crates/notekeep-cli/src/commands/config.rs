use std::path::{Path, PathBuf};

use notekeep_core::storage::validate_key;
use notekeep_core::util::normalize_text_option;
use notekeep_core::FileStore;

use crate::config::{default_config_path, CliConfig, StoreLocation};
use crate::error::CliError;

pub fn run_config_init(
    data_dir: Option<PathBuf>,
    storage_key: Option<String>,
) -> Result<(), CliError> {
    let path = default_config_path()
        .ok_or_else(|| CliError::Config("Failed to resolve a config directory".into()))?;
    let config = init_config(&path, data_dir, storage_key)?;

    println!("Config saved to {}", path.display());
    if let Some(dir) = &config.data_dir {
        println!("data_dir: {}", dir.display());
    }
    if let Some(key) = &config.storage_key {
        println!("storage_key: {key}");
    }
    Ok(())
}

/// Merge explicit values over the config stored at `path` and write it back.
///
/// Settings not passed keep their saved value.
pub fn init_config(
    path: &Path,
    data_dir: Option<PathBuf>,
    storage_key: Option<String>,
) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::load_from_path(path)?;

    if let Some(dir) = data_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        config.data_dir = Some(dir);
    }
    if let Some(key) = normalize_text_option(storage_key) {
        validate_key(&key)?;
        config.storage_key = Some(key);
    }

    config.save_to_path(path)?;
    tracing::info!("Saved CLI config to {}", path.display());
    Ok(config)
}

pub fn run_config_show(location: &StoreLocation) -> Result<(), CliError> {
    match default_config_path() {
        Some(path) if path.exists() => println!("config: {}", path.display()),
        Some(path) => println!("config: {} (not created)", path.display()),
        None => println!("config: (unavailable)"),
    }
    println!("data_dir: {}", location.data_dir.display());
    println!("storage_key: {}", location.storage_key);

    let document = FileStore::new(&location.data_dir).path_for(&location.storage_key)?;
    println!("document: {}", document.display());
    Ok(())
}
