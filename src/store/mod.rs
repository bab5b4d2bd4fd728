//! The entry store: single source of truth for the diary collection.
//!
//! All mutation and persistence funnel through [`DiaryStore`]. The persisted
//! form is one named slot holding the entire collection as a JSON blob, read
//! once when the store opens and rewritten wholesale on every mutation. That
//! write cost is O(collection size) per mutation, a simplicity-over-throughput
//! tradeoff sized for a single user's personal diary.
//!
//! The backing slot is abstracted behind [`StorageBackend`] and injected at
//! construction: [`FileBackend`] is the production slot, [`MemoryBackend`]
//! serves tests and embedders.

use crate::entry::{Entry, EntryPatch};
use crate::errors::{AppResult, StoreError};
use crate::transfer;
use chrono::Utc;
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};
use uuid::Uuid;

/// A named slot that holds the serialized collection.
///
/// `load` returns `Ok(None)` when the slot has never been written. Both
/// operations are synchronous; the store never suspends mid-mutation.
pub trait StorageBackend {
    /// Reads the persisted blob, or `None` if the slot is absent.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replaces the slot contents with `blob`.
    fn save(&self, blob: &str) -> Result<(), StoreError>;
}

/// File-backed persistence slot.
///
/// Saves go through a temporary file in the slot's directory followed by an
/// atomic rename, so a crash mid-write leaves the previous blob intact.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        FileBackend { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadFailed {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        let persist_failed = |source: io::Error| StoreError::PersistFailed {
            path: self.path.clone(),
            source,
        };

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(persist_failed)?;
        tmp.write_all(blob.as_bytes()).map_err(persist_failed)?;
        tmp.flush().map_err(persist_failed)?;
        tmp.persist(&self.path)
            .map_err(|e| persist_failed(e.error))?;
        Ok(())
    }
}

/// In-memory persistence slot.
///
/// Clones share the same slot, which lets a test keep a handle to inspect
/// what the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    blob: Rc<RefCell<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Creates a backend pre-seeded with a blob, as if previously saved.
    pub fn with_blob(blob: &str) -> Self {
        MemoryBackend {
            blob: Rc::new(RefCell::new(Some(blob.to_string()))),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}

/// Owns the canonical in-memory collection and its persisted mirror.
///
/// Every other component receives read-only snapshots and routes mutations
/// back through this store. Each mutating operation (`create`, `update`,
/// `delete`, `import_all`) immediately serializes the whole collection back
/// to the slot.
///
/// # Examples
///
/// ```
/// use vocalog::store::{DiaryStore, MemoryBackend};
///
/// let mut store = DiaryStore::open(MemoryBackend::new()).unwrap();
/// let entry = store
///     .create("Morning".to_string(), "Dictated a note".to_string(),
///             "en-US".to_string(), None)
///     .unwrap();
/// assert!(store.get(&entry.id).is_some());
/// ```
pub struct DiaryStore<B: StorageBackend> {
    backend: B,
    entries: Vec<Entry>,
}

impl<B: StorageBackend> DiaryStore<B> {
    /// Opens the store, reading the persisted blob once.
    ///
    /// An absent slot yields an empty collection. A malformed blob also
    /// fails safe to empty (with a warning) rather than refusing to start;
    /// import failures, by contrast, are reported to the caller.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if the slot exists but cannot be read.
    pub fn open(backend: B) -> AppResult<Self> {
        let entries = match backend.load()? {
            Some(blob) => match serde_json::from_str::<Vec<Entry>>(&blob) {
                Ok(entries) => {
                    debug!(
                        count = entries.len(),
                        size = %format_blob_size(&blob),
                        "Loaded diary entries from the persistence slot"
                    );
                    entries
                }
                Err(e) => {
                    warn!("Persistence slot is malformed, starting empty: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(DiaryStore { backend, entries })
    }

    /// Number of entries in the collection.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw, unordered collection snapshot (presentation order is always
    /// computed on read, never stored).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns a snapshot ordered by creation time, most recent first.
    pub fn list(&self) -> Vec<Entry> {
        let mut snapshot = self.entries.clone();
        snapshot.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        snapshot
    }

    /// Returns the entry matching `id`, if any. Callers handle the
    /// not-found case explicitly.
    pub fn get(&self, id: &Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == *id)
    }

    /// Allocates a fresh entry, appends it, persists, and returns it.
    ///
    /// The returned entry's id is never reused by a later `create`.
    pub fn create(
        &mut self,
        title: String,
        content: String,
        language: String,
        voice: Option<String>,
    ) -> AppResult<Entry> {
        let entry = Entry::new(title, content, language, voice);
        debug!(id = %entry.id, "Creating diary entry");
        self.entries.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Overwrites the supplied fields of the matching entry and stamps
    /// `updated_at`. A missing id is a silent no-op; callers relying on
    /// confirmation check via [`DiaryStore::get`] afterward.
    pub fn update(&mut self, id: &Uuid, patch: &EntryPatch) -> AppResult<()> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == *id) else {
            debug!(id = %id, "Update targeted an unknown entry id, ignoring");
            return Ok(());
        };
        patch.apply(entry);
        entry.updated_at = Some(Utc::now());
        debug!(id = %id, "Updated diary entry");
        self.persist()
    }

    /// Removes the matching entry if present; a missing id is a no-op.
    /// Persists afterward regardless.
    pub fn delete(&mut self, id: &Uuid) -> AppResult<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != *id);
        if self.entries.len() < before {
            debug!(id = %id, "Deleted diary entry");
        }
        self.persist()
    }

    /// Case-insensitive substring search over each entry's title and content.
    ///
    /// A blank query returns the full list in [`DiaryStore::list`] order;
    /// a non-matching query returns an empty sequence.
    pub fn search(&self, query: &str) -> Vec<Entry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list();
        }
        self.entries
            .iter()
            .filter(|e| {
                format!("{} {}", e.title, e.content)
                    .to_lowercase()
                    .contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Serializes the entire collection to the indented export document.
    /// Pure function of current state; no side effects.
    pub fn export_all(&self) -> AppResult<String> {
        Ok(transfer::export_entries(&self.entries)?)
    }

    /// Parses `text` and wholesale-replaces the collection with it, then
    /// persists. On a format error no mutation occurs.
    ///
    /// This is destructive by design; the calling UI warns the user first.
    pub fn import_all(&mut self, text: &str) -> AppResult<()> {
        let imported = transfer::parse_entries(text)?;
        debug!(count = imported.len(), "Importing diary entries, replacing collection");
        self.entries = imported;
        self.persist()
    }

    fn persist(&self) -> AppResult<()> {
        let blob = serde_json::to_string(&self.entries).map_err(StoreError::Serialize)?;
        self.backend.save(&blob)?;
        Ok(())
    }
}

/// Formats a byte count in a human-readable unit, as logged at load time.
fn format_blob_size(blob: &str) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let bytes = blob.len() as f64;
    if bytes == 0.0 {
        return "0 B".to_string();
    }
    let exponent = (bytes.log2() / 10.0).floor().min((UNITS.len() - 1) as f64);
    let size = bytes / 1024f64.powf(exponent);
    format!("{:.2} {}", size, UNITS[exponent as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn open_empty() -> DiaryStore<MemoryBackend> {
        DiaryStore::open(MemoryBackend::new()).unwrap()
    }

    fn create(store: &mut DiaryStore<MemoryBackend>, title: &str, content: &str) -> Entry {
        store
            .create(
                title.to_string(),
                content.to_string(),
                "en-US".to_string(),
                None,
            )
            .unwrap()
    }

    #[test]
    fn test_open_with_absent_slot_starts_empty() {
        let store = open_empty();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_open_with_malformed_blob_starts_empty() {
        let backend = MemoryBackend::with_blob("{definitely not json");
        let store = DiaryStore::open(backend).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = open_empty();
        let mut ids = std::collections::HashSet::new();
        for i in 0..50 {
            let entry = create(&mut store, &format!("entry {}", i), "");
            assert!(ids.insert(entry.id), "id reused: {}", entry.id);
        }
        assert_eq!(store.len(), 50);
    }

    #[test]
    fn test_create_then_get_has_created_at_and_no_updated_at() {
        let mut store = open_empty();
        let entry = create(&mut store, "Morning", "dictated text");

        let fetched = store.get(&entry.id).expect("entry should exist");
        assert_eq!(fetched.title, "Morning");
        assert!(fetched.updated_at.is_none());
    }

    #[test]
    fn test_get_unknown_id_returns_none() {
        let store = open_empty();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_update_overwrites_fields_and_stamps_updated_at() {
        let mut store = open_empty();
        let entry = create(&mut store, "Morning", "first draft");

        let patch = EntryPatch {
            content: Some("second draft".to_string()),
            voice: Some("Samantha".to_string()),
            ..EntryPatch::default()
        };
        store.update(&entry.id, &patch).unwrap();

        let fetched = store.get(&entry.id).unwrap();
        assert_eq!(fetched.title, "Morning");
        assert_eq!(fetched.content, "second draft");
        assert_eq!(fetched.voice.as_deref(), Some("Samantha"));
        let updated_at = fetched.updated_at.expect("updated_at should be set");
        assert!(updated_at >= fetched.created_at);
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let mut store = open_empty();
        create(&mut store, "Morning", "text");

        let before = store.list();
        let patch = EntryPatch {
            title: Some("hijacked".to_string()),
            ..EntryPatch::default()
        };
        store.update(&Uuid::new_v4(), &patch).unwrap();

        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_delete_removes_exactly_that_entry() {
        let mut store = open_empty();
        let keep = create(&mut store, "keep", "");
        let gone = create(&mut store, "gone", "");

        store.delete(&gone.id).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.get(&keep.id).is_some());
        assert!(store.get(&gone.id).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_a_noop() {
        let mut store = open_empty();
        create(&mut store, "keep", "");
        store.delete(&Uuid::new_v4()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_orders_most_recent_first() {
        // Seed through import so the creation instants are fixed and distinct.
        let t1 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();
        let a = Entry {
            id: Uuid::new_v4(),
            title: "Morning".to_string(),
            content: String::new(),
            created_at: t1,
            updated_at: None,
            language: "en-US".to_string(),
            voice: None,
        };
        let b = Entry {
            id: Uuid::new_v4(),
            title: "Evening".to_string(),
            content: String::new(),
            created_at: t2,
            updated_at: None,
            language: "en-US".to_string(),
            voice: None,
        };

        let mut store = open_empty();
        store
            .import_all(&transfer::export_entries(&[a.clone(), b.clone()]).unwrap())
            .unwrap();

        let listed = store.list();
        assert_eq!(listed[0].id, b.id);
        assert_eq!(listed[1].id, a.id);
    }

    #[test]
    fn test_search_blank_query_equals_list() {
        let mut store = open_empty();
        create(&mut store, "Morning", "coffee");
        create(&mut store, "Evening", "tea");

        assert_eq!(store.search(""), store.list());
        assert_eq!(store.search("   "), store.list());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_content() {
        let mut store = open_empty();
        create(&mut store, "Morning walk", "saw a HERON by the river");
        create(&mut store, "Evening", "quiet night");

        assert_eq!(store.search("heron").len(), 1);
        assert_eq!(store.search("MORNING").len(), 1);
        assert_eq!(store.search("river").len(), 1);
        assert!(store.search("nothing matches this").is_empty());
    }

    #[test]
    fn test_search_never_matches_across_entries() {
        let mut store = open_empty();
        create(&mut store, "alpha", "");
        create(&mut store, "beta", "");

        // "alpha beta" spans two entries and must not match either.
        assert!(store.search("alpha beta").is_empty());
    }

    #[test]
    fn test_export_import_round_trip_reproduces_collection() {
        let mut store = open_empty();
        create(&mut store, "Morning", "coffee");
        let second = create(&mut store, "Tarde", "siesta");
        store
            .update(
                &second.id,
                &EntryPatch {
                    language: Some("es-ES".to_string()),
                    ..EntryPatch::default()
                },
            )
            .unwrap();
        let original = store.entries().to_vec();

        let exported = store.export_all().unwrap();
        let mut fresh = open_empty();
        fresh.import_all(&exported).unwrap();

        assert_eq!(fresh.entries(), original.as_slice());
    }

    #[test]
    fn test_empty_export_import_round_trip() {
        let store = open_empty();
        let exported = store.export_all().unwrap();

        let mut fresh = open_empty();
        create(&mut fresh, "soon gone", "");
        fresh.import_all(&exported).unwrap();
        assert!(fresh.is_empty());
    }

    #[test]
    fn test_failed_import_leaves_collection_intact() {
        let mut store = open_empty();
        create(&mut store, "Morning", "coffee");
        let before = store.entries().to_vec();

        assert!(store.import_all("{\"not\": \"an array\"}").is_err());
        assert!(store.import_all("totally broken").is_err());
        assert!(store.import_all("[{\"title\": \"bad record\"}]").is_err());

        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn test_import_replaces_rather_than_merges() {
        let mut store = open_empty();
        create(&mut store, "old", "");
        let incoming = create(&mut store, "kept", "");
        let exported = transfer::export_entries(&[store.get(&incoming.id).unwrap().clone()]).unwrap();

        store.import_all(&exported).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "kept");
    }

    #[test]
    fn test_every_mutation_persists_to_the_slot() {
        let backend = MemoryBackend::new();
        let slot = backend.clone();
        let mut store = DiaryStore::open(backend).unwrap();

        let entry = create(&mut store, "persisted", "contents");
        let blob = slot.load().unwrap().expect("create should persist");
        assert!(blob.contains("persisted"));

        store
            .update(
                &entry.id,
                &EntryPatch {
                    title: Some("renamed".to_string()),
                    ..EntryPatch::default()
                },
            )
            .unwrap();
        let blob = slot.load().unwrap().unwrap();
        assert!(blob.contains("renamed"));
        assert!(!blob.contains("\"persisted\""));

        store.delete(&entry.id).unwrap();
        let blob = slot.load().unwrap().unwrap();
        assert_eq!(blob, "[]");
    }

    #[test]
    fn test_reopen_from_same_slot_restores_collection() {
        let backend = MemoryBackend::new();
        let slot = backend.clone();
        let mut store = DiaryStore::open(backend).unwrap();
        let entry = create(&mut store, "survives", "reopen");
        drop(store);

        let reopened = DiaryStore::open(slot).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get(&entry.id).unwrap().title, "survives");
    }

    #[test]
    fn test_format_blob_size() {
        assert_eq!(format_blob_size(""), "0 B");
        assert_eq!(format_blob_size("abcd"), "4.00 B");
        assert_eq!(format_blob_size(&"x".repeat(2048)), "2.00 KB");
    }
}
