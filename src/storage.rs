//! Key/value preference storage
//!
//! Stands in for the browser's durable local storage. Only string slots are
//! kept; callers own the meaning of each key.

use crate::error::{SiteError, SiteResult};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Durable string slots. Either call may fail when the backing store is not
/// reachable yet; callers treat that as an absent value.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> SiteResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> SiteResult<()>;
}

/// In-memory storage. Clones share the same slots so tests can inspect
/// what a store persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
    unavailable: Rc<RefCell<bool>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Simulate a storage backend that cannot be reached
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.borrow_mut() = unavailable;
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        if *self.unavailable.borrow() {
            return Err(SiteError::StorageUnavailable("memory storage offline".into()));
        }
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        if *self.unavailable.borrow() {
            return Err(SiteError::StorageUnavailable("memory storage offline".into()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

/// Slots stored as a JSON object in a single file
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new() -> SiteResult<Self> {
        Ok(Self {
            path: Self::default_path()?,
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_path() -> SiteResult<PathBuf> {
        if let Some(data_dir) = dirs::data_dir() {
            Ok(data_dir.join("chainsite").join("storage.json"))
        } else if let Some(home) = dirs::home_dir() {
            Ok(home.join(".chainsite").join("storage.json"))
        } else {
            Err(SiteError::StorageUnavailable(
                "no data or home directory".to_string(),
            ))
        }
    }

    fn read_all(&self) -> SiteResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        let mut slots = self.read_all().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "discarding unreadable storage file");
            BTreeMap::new()
        });
        slots.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&slots)?;
        fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), key, "storage slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_shares_slots_between_clones() {
        let storage = MemoryStorage::new();
        let mut writer = storage.clone();
        writer.set("language", "tr").unwrap();

        assert_eq!(storage.peek("language"), Some("tr".to_string()));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_memory_storage_unavailable() {
        let mut storage = MemoryStorage::with_slot("language", "ru");
        storage.set_unavailable(true);

        assert!(matches!(
            storage.get("language"),
            Err(SiteError::StorageUnavailable(_))
        ));
        assert!(storage.set("language", "es").is_err());
        assert_eq!(storage.peek("language"), Some("ru".to_string()));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::with_path(dir.path().join("storage.json"));
        assert_eq!(storage.get("language").unwrap(), None);
    }

    #[test]
    fn test_file_storage_overwrites_slot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let mut storage = FileStorage::with_path(path.clone());

        storage.set("language", "uz").unwrap();
        storage.set("other", "kept").unwrap();
        storage.set("language", "ar").unwrap();

        let reopened = FileStorage::with_path(path);
        assert_eq!(reopened.get("language").unwrap(), Some("ar".to_string()));
        assert_eq!(reopened.get("other").unwrap(), Some("kept".to_string()));
    }

    #[test]
    fn test_file_storage_corrupt_file_is_an_error_on_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut storage = FileStorage::with_path(path);
        assert!(matches!(
            storage.get("language"),
            Err(SiteError::Serialization(_))
        ));

        // A write replaces the corrupt file
        storage.set("language", "es").unwrap();
        assert_eq!(storage.get("language").unwrap(), Some("es".to_string()));
    }
}
