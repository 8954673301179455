//! Directory-backed backend: one JSON file per key.

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{validate_key, KeyValueStore};
use crate::Result;

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file first and are renamed into place, so
/// a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Backend rooted at `dir`; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let key = validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let tmp_path = self.dir.join(format!(".{key}.{}.tmp", Uuid::now_v7()));
        std::fs::write(&tmp_path, value)?;
        if let Err(error) = std::fs::rename(&tmp_path, &path) {
            if let Err(cleanup) = std::fs::remove_file(&tmp_path) {
                tracing::warn!(
                    "Failed to remove temporary file {}: {}",
                    tmp_path.display(),
                    cleanup
                );
            }
            return Err(error.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn load_before_first_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.load("notes").unwrap(), None);
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("data"));

        store.save("notes", "[]").unwrap();
        store.save("notes", r#"[{"x":1}]"#).unwrap();

        assert_eq!(
            store.load("notes").unwrap().as_deref(),
            Some(r#"[{"x":1}]"#)
        );
        assert!(store.dir().join("notes.json").is_file());
    }

    #[test]
    fn save_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.save("notes", "[]").unwrap();

        let entries = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        assert_eq!(entries, vec!["notes.json".to_string()]);
    }

    #[test]
    fn path_traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.save("../escape", "[]"),
            Err(Error::InvalidInput(_))
        ));
    }
}
