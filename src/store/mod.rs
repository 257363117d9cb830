//! Read access to persisted journal entries.
//!
//! The analyzer never writes entries. A store hands out a snapshot of every
//! entry in the order it was saved (oldest first), and callers run the pure
//! analysis functions on that snapshot.
//!
//! Two stores are provided:
//!
//! - [`JsonFileStore`] reads the JSON document a journaling front end keeps
//!   under the `journalEntries` key
//! - [`MemoryStore`] holds entries in memory, for tests and embedding

use crate::constants::STORAGE_KEY;
use crate::errors::{AppResult, StoreError};
use crate::journal_core::JournalEntry;
use fs2::FileExt;
use serde::de::Error as _;
use serde_json::Value;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A source of journal entries.
pub trait EntryStore {
    /// Loads every entry, oldest first.
    fn load_entries(&self) -> AppResult<Vec<JournalEntry>>;
}

/// Entries kept in a JSON file.
///
/// The file may hold either a bare array of entries or an object with a
/// `journalEntries` field. That field may itself be a JSON-encoded string,
/// which is how browser local storage exports look. A missing file is an
/// empty journal.
///
/// While reading, the store holds a shared advisory lock on the file so a
/// writer holding an exclusive lock is reported as [`StoreError::Busy`]
/// instead of yielding a half-written snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_locked(&self, mut file: File) -> AppResult<String> {
        match FileExt::try_lock_shared(&file) {
            Ok(()) => {}
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                warn!("Entries file is locked by another process");
                return Err(StoreError::Busy {
                    path: self.path.clone(),
                }
                .into());
            }
            Err(e) => {
                return Err(StoreError::LockFailed {
                    path: self.path.clone(),
                    source: e,
                }
                .into());
            }
        }

        let mut contents = String::new();
        let read = file.read_to_string(&mut contents);
        if let Err(e) = FileExt::unlock(&file) {
            debug!("Failed to release shared lock: {}", e);
        }
        read?;
        Ok(contents)
    }
}

impl EntryStore for JsonFileStore {
    fn load_entries(&self) -> AppResult<Vec<JournalEntry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No entries file found, starting with an empty journal");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let contents = self.read_locked(file)?;
        let entries = parse_entries(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(count = entries.len(), "Loaded journal entries");
        Ok(entries)
    }
}

/// Parses an entries document in any of the accepted shapes.
///
/// Blank input is treated as an empty journal.
pub fn parse_entries(contents: &str) -> Result<Vec<JournalEntry>, serde_json::Error> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(contents)? {
        array @ Value::Array(_) => serde_json::from_value(array),
        Value::Object(mut map) => match map.remove(STORAGE_KEY) {
            Some(Value::String(encoded)) => parse_entries(&encoded),
            Some(Value::Null) => Ok(Vec::new()),
            Some(array @ Value::Array(_)) => serde_json::from_value(array),
            Some(_) => Err(serde_json::Error::custom(format!(
                "`{}` must be an array of entries",
                STORAGE_KEY
            ))),
            None => Err(serde_json::Error::missing_field(STORAGE_KEY)),
        },
        Value::Null => Ok(Vec::new()),
        _ => Err(serde_json::Error::custom(
            "expected an array of entries or an object",
        )),
    }
}

/// An in-memory entry store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<JournalEntry>,
}

impl MemoryStore {
    pub fn new(entries: Vec<JournalEntry>) -> Self {
        MemoryStore { entries }
    }
}

impl EntryStore for MemoryStore {
    fn load_entries(&self) -> AppResult<Vec<JournalEntry>> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use std::fs;
    use tempfile::tempdir;

    const ENTRIES: &str = r#"[
        {"id": 1700000000000, "title": "One", "content": "happy day"},
        {"id": 1700000100000, "content": null, "tags": ["work"]}
    ]"#;

    #[test]
    fn test_parse_bare_array() {
        let entries = parse_entries(ENTRIES).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "One");
        assert_eq!(entries[1].content, "");
        assert_eq!(entries[1].tags, vec!["work".to_string()]);
    }

    #[test]
    fn test_parse_wrapped_forms() {
        let wrapped = format!(r#"{{"journalEntries": {}}}"#, ENTRIES);
        assert_eq!(parse_entries(&wrapped).unwrap().len(), 2);

        let encoded = serde_json::json!({ "journalEntries": ENTRIES }).to_string();
        assert_eq!(parse_entries(&encoded).unwrap().len(), 2);

        assert!(parse_entries(r#"{"journalEntries": null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_blank_and_invalid() {
        assert!(parse_entries("").unwrap().is_empty());
        assert!(parse_entries("  \n").unwrap().is_empty());
        assert!(parse_entries("{not json").is_err());
        assert!(parse_entries(r#"{"other": []}"#).is_err());
        assert!(parse_entries(r#"{"journalEntries": 5}"#).is_err());
        assert!(parse_entries("42").is_err());
    }

    #[test]
    fn test_bad_time_fields_do_not_reject_journal() {
        let entries = parse_entries(
            r#"[
                {"id": 1700000000000, "content": "happy", "timestamp": "1700000000000"},
                {"id": 1700000100000, "date": 1700000000000.5},
                {"id": 1700000200000, "date": {}}
            ]"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 3);
        for entry in &entries {
            assert_eq!(entry.effective_at().timestamp_millis(), entry.id);
        }
    }

    #[test]
    fn test_missing_file_is_empty_journal() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(store.load_entries().unwrap().is_empty());
    }

    #[test]
    fn test_load_from_file_keeps_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journalEntries.json");
        fs::write(&path, ENTRIES).unwrap();

        let entries = JsonFileStore::new(&path).load_entries().unwrap();
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1_700_000_000_000, 1_700_000_100_000]);
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{").unwrap();

        let err = JsonFileStore::new(&path).load_entries().unwrap_err();
        match err {
            AppError::Store(StoreError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_exclusive_lock_reports_busy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journalEntries.json");
        fs::write(&path, ENTRIES).unwrap();

        let writer = File::open(&path).unwrap();
        FileExt::lock_exclusive(&writer).unwrap();

        let err = JsonFileStore::new(&path).load_entries().unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Busy { .. })));

        FileExt::unlock(&writer).unwrap();
        assert_eq!(JsonFileStore::new(&path).load_entries().unwrap().len(), 2);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new(vec![JournalEntry::new(3), JournalEntry::new(4)]);
        assert_eq!(store.load_entries().unwrap().len(), 2);
        assert!(MemoryStore::default().load_entries().unwrap().is_empty());
    }
}
