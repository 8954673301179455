//! In-process backend.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{validate_key, KeyValueStore};
use crate::Result;

/// Volatile key-value store, mostly for tests and embedders that persist
/// elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Current raw value under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of successful saves since creation
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("notes").unwrap(), None);
    }

    #[test]
    fn save_overwrites_and_counts() {
        let store = MemoryStore::new();
        store.save("notes", "[]").unwrap();
        store.save("notes", "[1]").unwrap();

        assert_eq!(store.load("notes").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn invalid_key_is_rejected() {
        let store = MemoryStore::new();
        assert!(store.save("../x", "[]").is_err());
        assert_eq!(store.write_count(), 0);
    }
}
