//! Key/value storage scopes.
//!
//! The site keeps two scopes: a persistent one that survives restarts (the
//! owner flag) and a session one that is discarded when the browsing session
//! ends (failed attempts, contact cooldown). Both are plain string maps behind
//! the [`Storage`] trait.
//!
//! # Backends
//!
//! - [`MemoryStorage`]: in-process map, clones share state
//! - [`FileStorage`]: one JSON object per file, used by the CLI
//! - [`UnavailableStorage`]: refuses every call, models a browser with storage
//!   disabled

use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::error::StorageError;

/// String key/value store for one scope.
pub trait Storage: Send + Sync {
    /// Read a value, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage.
///
/// Cloning is cheap and clones share the same map, so a "fresh page" in tests
/// can be modelled by building new state over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every key, as the browser does when a session ends.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable { reason: "memory storage poisoned".to_string() })
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Storage that rejects every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl UnavailableStorage {
    fn refuse<T>() -> Result<T, StorageError> {
        Err(StorageError::Unavailable { reason: "storage is disabled".to_string() })
    }
}

impl Storage for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Self::refuse()
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Self::refuse()
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Self::refuse()
    }
}

/// File-backed storage holding one JSON object of string values.
///
/// Every call reads the file and writes it back whole; the files are tiny and
/// only one process touches them at a time. A missing file is an empty scope.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by the file at `path`. The file is created lazily.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the backing file, discarding the whole scope.
    pub fn destroy(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| StorageError::Serialization {
            reason: format!("{}: {e}", self.path.display()),
        })
    }

    /// Entries to start a write from. An unreadable file is replaced
    /// wholesale, like a browser overwriting a mangled value.
    fn load_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.load() {
            Err(StorageError::Serialization { reason }) => {
                tracing::warn!(%reason, "discarding unreadable storage file");
                Ok(BTreeMap::new())
            },
            other => other,
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Serialization { reason: e.to_string() })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let (mut entries, corrupt) = match self.load() {
            Ok(entries) => (entries, false),
            Err(StorageError::Serialization { reason }) => {
                tracing::warn!(%reason, "discarding unreadable storage file");
                (BTreeMap::new(), true)
            },
            Err(e) => return Err(e),
        };
        if entries.remove(key).is_some() || corrupt {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn memory_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn memory_clones_share_state() {
        let a = MemoryStorage::new();
        let b = a.clone();

        a.set("k", "1").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("1"));

        b.clear();
        assert!(a.is_empty());
    }

    #[test]
    fn remove_absent_key_succeeds() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("missing").is_ok());
    }

    #[test]
    fn unavailable_rejects_everything() {
        let storage = UnavailableStorage;
        assert!(matches!(storage.get("k"), Err(StorageError::Unavailable { .. })));
        assert!(matches!(storage.set("k", "v"), Err(StorageError::Unavailable { .. })));
        assert!(matches!(storage.remove("k"), Err(StorageError::Unavailable { .. })));
    }

    #[test]
    fn arc_storage_delegates() {
        let inner = MemoryStorage::new();
        let shared: Arc<dyn Storage> = Arc::new(inner.clone());

        shared.set("k", "v").unwrap();
        assert_eq!(inner.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("local.json");

        FileStorage::new(&path).set("ia_owner_mode", "1").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("ia_owner_mode").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("absent.json"));

        assert_eq!(storage.get("anything").unwrap(), None);
        assert!(storage.remove("anything").is_ok());
        assert!(!storage.path().exists());
    }

    #[test]
    fn file_storage_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get("k"), Err(StorageError::Serialization { .. })));
    }

    #[test]
    fn file_storage_write_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.json");
        fs::write(&path, "garbage").unwrap();

        let storage = FileStorage::new(&path);
        storage.set("ia_owner_mode", "1").unwrap();

        assert_eq!(storage.get("ia_owner_mode").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn file_storage_remove_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.json");
        fs::write(&path, "garbage").unwrap();

        let storage = FileStorage::new(&path);
        storage.remove("ia_owner_mode").unwrap();

        assert_eq!(storage.get("ia_owner_mode").unwrap(), None);
    }

    #[test]
    fn file_storage_destroy() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));

        storage.set("k", "v").unwrap();
        storage.destroy().unwrap();
        assert_eq!(storage.get("k").unwrap(), None);

        // second destroy is a no-op
        storage.destroy().unwrap();
    }
}
