//! Durable key/value text storage
//!
//! Backends store opaque text under string keys. Serialization belongs to the
//! callers (see [`crate::settings::PersistedSettings`]).

use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "am-desktop";

/// Pluggable text storage
pub trait StorageBackend: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &str;

    /// Read the value stored under `key`, `None` if nothing was stored yet
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key` if present
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Check if the backend is usable at all
    fn is_available(&self) -> bool {
        true
    }
}

// ============================================================================
// MEMORY STORAGE
// ============================================================================

/// In-memory storage, lost when the process exits
///
/// Used by tests and by the shell when no config directory exists.
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.data.write().insert(key.to_string(), value.to_string());
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "MemoryStorage"
    }

    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.data.write().remove(key);
        Ok(())
    }
}

// ============================================================================
// FILE STORAGE
// ============================================================================

/// One file per key inside a directory
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<config_dir>/am-desktop`, if the platform has a config dir
    pub fn default_location() -> Option<Self> {
        let mut path = dirs::config_dir()?;
        path.push(APP_DIR_NAME);
        Some(Self::new(path))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl StorageBackend for FileStorage {
    fn name(&self) -> &str {
        "FileStorage"
    }

    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        // Write-then-rename
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        ::log::debug!("Saved '{}' to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn is_available(&self) -> bool {
        self.dir.exists() || fs::create_dir_all(&self.dir).is_ok()
    }
}

// ============================================================================
// UNAVAILABLE STORAGE
// ============================================================================

/// Storage that refuses every operation (blocked or disabled storage)
#[derive(Default)]
pub struct UnavailableStorage;

impl StorageBackend for UnavailableStorage {
    fn name(&self) -> &str {
        "UnavailableStorage"
    }

    fn read(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }

    fn write(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }

    fn is_available(&self) -> bool {
        false
    }
}
