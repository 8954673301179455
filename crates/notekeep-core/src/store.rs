//! The note store: current collection plus its persistence.
//!
//! The collection is loaded once when the store is opened and written back
//! after every mutation that changes it. Write failures are logged and
//! otherwise ignored; the in-memory state stays authoritative for the session.

use crate::clock::{Clock, SystemClock};
use crate::collection::NoteCollection;
use crate::models::{Note, NoteId};
use crate::storage::codec::{decode_notes, encode_notes};
use crate::storage::{KeyValueStore, DEFAULT_STORAGE_KEY};

/// Owned note state bound to a key-value backend.
pub struct NoteStore<S, C = SystemClock> {
    notes: NoteCollection,
    backend: S,
    clock: C,
    key: String,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Open the store under [`DEFAULT_STORAGE_KEY`] using the wall clock
    pub fn open(backend: S) -> Self {
        Self::open_with(backend, SystemClock, DEFAULT_STORAGE_KEY)
    }
}

impl<S: KeyValueStore, C: Clock> NoteStore<S, C> {
    /// Open the store, loading whatever `backend` holds under `key`.
    ///
    /// A missing, unreadable or malformed document yields an empty
    /// collection; the failure is logged, never returned.
    pub fn open_with(backend: S, clock: C, key: impl Into<String>) -> Self {
        let key = key.into();
        let notes = load_collection(&backend, &key);
        tracing::info!("Opened note store '{}' with {} notes", key, notes.len());
        Self {
            notes,
            backend,
            clock,
            key,
        }
    }

    /// Create a note from raw form input; returns its id.
    ///
    /// Blank title and body together are ignored and return `None`.
    pub fn create(&mut self, title: &str, body: &str) -> Option<NoteId> {
        let (next, id) = self.notes.with_created(title, body, self.clock.now())?;
        tracing::debug!("Created note {}", id);
        self.commit(next);
        Some(id)
    }

    /// Replace a note's title and body as typed. Returns whether it existed.
    pub fn update(&mut self, id: &NoteId, title: &str, body: &str) -> bool {
        let next = self.notes.with_updated(id, title, body, self.clock.now());
        self.apply(next, "Updated", id)
    }

    pub fn delete(&mut self, id: &NoteId) -> bool {
        let next = self.notes.without(id);
        self.apply(next, "Deleted", id)
    }

    pub fn toggle_pin(&mut self, id: &NoteId) -> bool {
        let next = self.notes.with_pin_toggled(id, self.clock.now());
        self.apply(next, "Toggled pin on", id)
    }

    pub fn toggle_favorite(&mut self, id: &NoteId) -> bool {
        let next = self.notes.with_favorite_toggled(id, self.clock.now());
        self.apply(next, "Toggled favorite on", id)
    }

    /// Notes matching `query` in display order; recomputed on every call
    pub fn view(&self, query: &str) -> Vec<&Note> {
        self.notes.view(query)
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn backend(&self) -> &S {
        &self.backend
    }

    fn apply(&mut self, next: Option<NoteCollection>, action: &str, id: &NoteId) -> bool {
        let Some(next) = next else {
            tracing::debug!("{} unknown note {}; nothing to do", action, id);
            return false;
        };
        tracing::debug!("{} note {}", action, id);
        self.commit(next);
        true
    }

    fn commit(&mut self, next: NoteCollection) {
        self.notes = next;
        self.persist();
    }

    fn persist(&self) {
        let result = encode_notes(&self.notes)
            .and_then(|document| self.backend.save(&self.key, &document));
        if let Err(error) = result {
            tracing::warn!("Failed to save notes under '{}': {}", self.key, error);
        }
    }
}

fn load_collection<S: KeyValueStore>(backend: &S, key: &str) -> NoteCollection {
    let raw = match backend.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return NoteCollection::new(),
        Err(error) => {
            tracing::warn!("Failed to read notes under '{}': {}", key, error);
            return NoteCollection::new();
        }
    };

    decode_notes(&raw).unwrap_or_else(|error| {
        tracing::warn!("Stored notes under '{}' are malformed, starting empty: {}", key, error);
        NoteCollection::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SteppingClock;
    use crate::storage::MemoryStore;
    use crate::{Error, Result};
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    const KEY: &str = "notes";

    fn clock() -> SteppingClock {
        SteppingClock::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap(), Duration::seconds(1))
    }

    fn open(backend: &MemoryStore) -> NoteStore<&MemoryStore, SteppingClock> {
        NoteStore::open_with(backend, clock(), KEY)
    }

    fn titles(store: &NoteStore<&MemoryStore, SteppingClock>, query: &str) -> Vec<String> {
        store
            .view(query)
            .iter()
            .map(|note| note.title.clone())
            .collect()
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage("backend offline".into()))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("backend offline".into()))
        }
    }

    #[test]
    fn fresh_store_has_empty_view() {
        let backend = MemoryStore::new();
        let store = open(&backend);

        assert!(store.is_empty());
        assert!(store.view("").is_empty());
        assert!(store.view("anything").is_empty());
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn create_prepends_and_persists() {
        let backend = MemoryStore::new();
        let mut store = open(&backend);

        let first = store.create("First", "").unwrap();
        let second = store.create("Second", "body").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.notes().as_slice()[0].id, second);
        assert_eq!(store.notes().as_slice()[1].id, first);
        let note = store.get(&second).unwrap();
        assert_eq!(note.created_at, note.updated_at);
        assert_eq!(backend.write_count(), 2);
    }

    #[test]
    fn blank_create_changes_nothing() {
        let backend = MemoryStore::new();
        let mut store = open(&backend);

        assert_eq!(store.create("", ""), None);
        assert_eq!(store.create("   ", ""), None);
        assert!(store.is_empty());
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn update_advances_updated_at_only() {
        let backend = MemoryStore::new();
        let mut store = open(&backend);
        let id = store.create("Draft", "text").unwrap();
        let before = store.get(&id).unwrap().clone();

        assert!(store.update(&id, "Final", " text "));

        let after = store.view("")[0];
        assert_eq!(after.title, "Final");
        assert_eq!(after.body, " text ");
        assert!(after.updated_at > before.updated_at);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.pinned, before.pinned);
        assert_eq!(after.favorite, before.favorite);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let backend = MemoryStore::new();
        let mut store = open(&backend);
        store.create("Only", "").unwrap();
        let snapshot = store.notes().clone();
        let writes = backend.write_count();
        let missing = NoteId::new();

        assert!(!store.update(&missing, "x", "y"));
        assert!(!store.delete(&missing));
        assert!(!store.toggle_pin(&missing));
        assert!(!store.toggle_favorite(&missing));

        assert_eq!(store.notes(), &snapshot);
        assert_eq!(backend.write_count(), writes);
    }

    #[test]
    fn delete_is_idempotent() {
        let backend = MemoryStore::new();
        let mut store = open(&backend);
        let keep = store.create("Keep", "").unwrap();
        let drop = store.create("Drop", "").unwrap();

        assert!(store.delete(&drop));
        assert!(!store.delete(&drop));
        assert_eq!(store.len(), 1);
        assert!(store.get(&keep).is_some());
    }

    #[test]
    fn toggles_are_involutions() {
        let backend = MemoryStore::new();
        let mut store = open(&backend);
        let id = store.create("Note", "").unwrap();
        let mut last = store.get(&id).unwrap().updated_at;

        for _ in 0..2 {
            assert!(store.toggle_pin(&id));
            let now = store.get(&id).unwrap().updated_at;
            assert!(now > last);
            last = now;
        }
        for _ in 0..2 {
            assert!(store.toggle_favorite(&id));
            let now = store.get(&id).unwrap().updated_at;
            assert!(now > last);
            last = now;
        }

        let note = store.get(&id).unwrap();
        assert!(!note.pinned);
        assert!(!note.favorite);
    }

    #[test]
    fn view_orders_pinned_favorite_recent() {
        let backend = MemoryStore::new();
        let mut store = open(&backend);
        let b = store.create("B", "").unwrap();
        let a = store.create("A", "").unwrap();
        let c = store.create("C", "").unwrap();

        store.toggle_pin(&b);
        store.toggle_favorite(&c);
        store.update(&a, "A", "");

        assert_eq!(titles(&store, ""), vec!["B", "C", "A"]);
    }

    #[test]
    fn search_scenario() {
        let backend = MemoryStore::new();
        let mut store = open(&backend);
        store.create("Groceries", "milk, eggs").unwrap();
        store.create("Todo", "buy milk").unwrap();

        assert_eq!(titles(&store, "milk"), vec!["Todo", "Groceries"]);
        assert_eq!(titles(&store, "eggs"), vec!["Groceries"]);
        assert!(store.view("xyz").is_empty());
    }

    #[test]
    fn reopening_restores_saved_collection() {
        let backend = MemoryStore::new();
        let saved = {
            let mut store = open(&backend);
            let id = store.create("Persisted", "body").unwrap();
            store.toggle_favorite(&id);
            store.notes().clone()
        };

        let reopened = open(&backend);
        assert_eq!(reopened.notes(), &saved);
    }

    #[test]
    fn malformed_document_starts_empty() {
        let backend = MemoryStore::with_value(KEY, "{not json");
        let mut store = open(&backend);

        assert!(store.is_empty());
        store.create("Fresh", "").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn notes_without_favorite_flag_survive_a_create() {
        let backend = MemoryStore::with_value(
            KEY,
            r#"[{"id":"0b7f0c4e-2a43-4f0e-9a51-51d8a2a2e0f1","title":"Groceries","body":"milk","pinned":true,"createdAt":"2024-03-01T09:15:00.000Z","updatedAt":"2024-03-01T09:15:00.000Z"}]"#,
        );
        let mut store = open(&backend);
        assert_eq!(store.len(), 1);

        store.create("New", "").unwrap();
        assert_eq!(store.len(), 2);

        let reopened = open(&backend);
        assert_eq!(titles(&reopened, ""), vec!["Groceries", "New"]);
        assert!(!reopened.view("groceries")[0].favorite);
    }

    #[test]
    fn backend_failures_are_not_fatal() {
        let mut store = NoteStore::open_with(FailingStore, clock(), KEY);
        assert!(store.is_empty());

        let id = store.create("Still works", "").unwrap();
        assert!(store.toggle_pin(&id));
        assert!(store.get(&id).unwrap().pinned);
    }

    #[test]
    fn open_uses_default_key() {
        let backend = MemoryStore::new();
        let mut store = NoteStore::open(&backend);
        store.create("Default", "").unwrap();

        assert_eq!(store.key(), DEFAULT_STORAGE_KEY);
        assert!(backend.get(DEFAULT_STORAGE_KEY).is_some());
    }
}
