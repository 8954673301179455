//! Key-value backends that hold the serialized note collection.
//!
//! The whole collection lives under one key as a JSON document; see
//! [`codec`] for the format.

pub mod codec;
mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::{Error, Result};

/// Key the collection is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "notes-app-data";

/// Single-value string store keyed by name.
pub trait KeyValueStore {
    /// Previously saved value, or `None` if the key was never written
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

/// Reject keys that are empty or would escape a flat namespace.
///
/// Allowed characters are ASCII alphanumerics, `-`, `_` and `.`; a key made
/// only of dots is refused.
pub fn validate_key(key: &str) -> Result<&str> {
    if key.is_empty() {
        return Err(Error::InvalidInput("Storage key must not be empty".into()));
    }
    if key.chars().all(|c| c == '.') {
        return Err(Error::InvalidInput(format!("Invalid storage key: {key}")));
    }
    if let Some(bad) = key
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(Error::InvalidInput(format!(
            "Storage key '{key}' contains unsupported character {bad:?}"
        )));
    }
    Ok(key)
}
