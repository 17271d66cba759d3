//! Storage layer for the punch clock.
//!
//! Persists the whole ledger snapshot at once: [`LedgerStore::load`] reads
//! it at session start and [`LedgerStore::save`] overwrites it after a
//! mutating command.
//!
//! # Format
//!
//! [`JsonFileStore`] writes pretty-printed JSON: an object keyed by project
//! name, each value an array of entries:
//!
//! ```json
//! {
//!   "work": [
//!     {
//!       "in": "2008-08-23T09:00:00-05:00",
//!       "out": "2008-08-23T10:05:00-05:00",
//!       "log": ["punch in @ 2008-08-23T09:00:00-0500", "punch out @ 2008-08-23T10:05:00-0500"]
//!     }
//!   ]
//! }
//! ```
//!
//! Project order and entry order are preserved. Timestamps keep their UTC
//! offset and second precision.
//!
//! # Concurrency
//!
//! There is no locking. Two processes saving the same file race and the
//! last writer wins.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use punch_core::LedgerData;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the ledger file failed.
    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The ledger file is not valid ledger JSON.
    #[error("invalid ledger data in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The snapshot could not be serialized.
    #[error("failed to serialize ledger")]
    Serialize(#[source] serde_json::Error),
}

/// Loads and saves ledger snapshots.
pub trait LedgerStore {
    /// Reads the snapshot. A store that does not exist yet is empty.
    fn load(&self) -> Result<LedgerData, StoreError>;

    /// Overwrites the stored snapshot.
    fn save(&self, data: &LedgerData) -> Result<(), StoreError>;
}

/// A ledger kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, action: &'static str, source: std::io::Error) -> StoreError {
        StoreError::Io {
            action,
            path: self.path.clone(),
            source,
        }
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<LedgerData, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no ledger yet, starting empty");
                return Ok(LedgerData::new());
            }
            Err(e) => return Err(self.io_error("read", e)),
        };

        if content.trim().is_empty() {
            return Ok(LedgerData::new());
        }

        let data: LedgerData = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), projects = data.len(), "loaded ledger");
        Ok(data)
    }

    /// Writes to a sibling temporary file, then renames it into place.
    fn save(&self, data: &LedgerData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error("create directory for", e))?;
        }

        let mut json = serde_json::to_string_pretty(data).map_err(StoreError::Serialize)?;
        json.push('\n');

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, json).map_err(|e| self.io_error("write", e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error("replace", e))?;

        tracing::debug!(path = %self.path.display(), projects = data.len(), "saved ledger");
        Ok(())
    }
}

/// A ledger held in memory, for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RefCell<LedgerData>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new(data: LedgerData) -> Self {
        Self {
            data: RefCell::new(data),
            saves: Cell::new(0),
        }
    }

    /// The current stored snapshot.
    pub fn snapshot(&self) -> LedgerData {
        self.data.borrow().clone()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<LedgerData, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, data: &LedgerData) -> Result<(), StoreError> {
        self.data.replace(data.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::DateTime;
    use punch_core::{PUNCH_IN, TimeEntry, Timestamp};

    fn at(s: &str) -> Timestamp {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn sample() -> LedgerData {
        let mut first = TimeEntry::new(at("2008-08-23T09:00:00-05:00"));
        first.push_log(PUNCH_IN, first.punched_in);
        first.punched_out = Some(at("2008-08-23T10:05:00-05:00"));
        let active = TimeEntry::new(at("2008-08-24T08:30:15+02:00"));

        let mut data = LedgerData::new();
        data.insert("zeta".into(), vec![first.clone(), active]);
        data.insert("alpha".into(), vec![first]);
        data.insert("alpha/child".into(), Vec::new());
        data
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_offsets() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/ledger.json"));
        let data = sample();

        store.save(&data).unwrap();
        assert!(store.path().is_file());
        let loaded = store.load().unwrap();

        assert_eq!(loaded, data);
        assert_eq!(
            loaded.keys().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "alpha/child"]
        );
        assert_eq!(
            loaded["zeta"][1].punched_in.offset().local_minus_utc(),
            2 * 3600
        );
        assert!(!dir.path().join("nested/ledger.json.tmp").exists());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));
        store.save(&sample()).unwrap();
        store.save(&LedgerData::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("invalid ledger data"));
    }

    #[test]
    fn load_rejects_entries_without_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, r#"{"work": [{"out": "2008-08-23T10:05:00-05:00"}]}"#).unwrap();

        assert!(JsonFileStore::new(&path).load().is_err());
    }

    #[test]
    fn load_reading_a_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, StoreError::Io { action: "read", .. }));
    }

    #[test]
    fn memory_store_counts_saves() {
        let store = MemoryStore::new(sample());
        assert_eq!(store.load().unwrap(), sample());
        store.save(&LedgerData::new()).unwrap();
        assert_eq!(store.save_count(), 1);
        assert!(store.snapshot().is_empty());
    }
}
