//! Key-value persistence for UI preferences.
//!
//! Mirrors the browser's `localStorage`: string keys, string values, one flat
//! namespace. The UI store treats every failure here as "nothing persisted"
//! and carries on with in-memory values.
//!
//! [`FileStorage`] keeps the map as a JSON object in the data directory
//! (`~/.local/share/gitinbit/local-storage.json` on Linux,
//! `~/Library/Application Support/gitinbit/` on macOS), falling back to
//! `/tmp/gitinbit/` when no data directory is available.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use crate::constants::APP_ID;
use crate::constants::storage::STORAGE_FILE_NAME;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] io::Error),
    /// The backing store exists but does not hold a JSON object of strings.
    #[error("Storage corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A flat string key-value store.
pub trait KeyValueStorage {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> { (**self).get(key) }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> { (**self).set(key, value) }
}

/// Returns the directory holding persisted UI preferences.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(format!("/tmp/{APP_ID}")), |data| data.join(APP_ID))
}

/// Returns the default path of the storage file.
#[must_use]
pub fn default_storage_path() -> PathBuf { get_data_dir().join(STORAGE_FILE_NAME) }

// ============================================================================
// FileStorage
// ============================================================================

/// Storage backed by a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl Default for FileStorage {
    fn default() -> Self { Self::new(default_storage_path()) }
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    /// Reads the whole map. A missing file is an empty map.
    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StorageError::Corrupt(err)) => {
                tracing::warn!(
                    error = %err,
                    path = %self.path.display(),
                    "discarding corrupt storage file"
                );
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

// ============================================================================
// MemoryStorage
// ============================================================================

/// In-memory storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Creates a storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Returns a copy of the value stored under `key`.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> { self.entries.borrow().get(key).cloned() }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> { Ok(self.peek(key)) }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// UnavailableStorage
// ============================================================================

/// Storage that is never reachable, as in a private browsing session.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl KeyValueStorage for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> { Err(unavailable()) }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> { Err(unavailable()) }
}

fn unavailable() -> StorageError {
    StorageError::Unavailable(io::Error::new(io::ErrorKind::Unsupported, "storage is disabled"))
}
