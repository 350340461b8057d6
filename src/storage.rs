//! Synchronous key-value persistence.
//!
//! The application persists small string payloads (the custom-color list)
//! under fixed keys. [`KeyValueStore`] is the seam: production code uses the
//! file-backed [`JsonFileStore`], tests inject a [`MemoryStore`].

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants::APP_NAME;

/// A synchronous string key-value slot.
///
/// Writes are overwrite-only; there is no merge and no versioning.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed store: a single JSON object of string keys and values.
///
/// Every `set` rewrites the whole file using a temp-file + rename so a
/// crash mid-write never leaves a truncated store behind.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Gets the default store path inside the platform config directory.
    ///
    /// - Linux: `~/.config/Huepick/storage.json`
    /// - macOS: `~/Library/Application Support/Huepick/storage.json`
    /// - Windows: `%APPDATA%\Huepick\storage.json`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir.join("storage.json"))
    }

    /// Opens the store at `path`, reading existing entries if the file exists.
    ///
    /// A missing file yields an empty store; a malformed file is an error so
    /// user data is never silently clobbered on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .context(format!("Failed to read store file: {}", path.display()))?;
            serde_json::from_str(&content)
                .context(format!("Failed to parse store file: {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "store file absent, starting empty");
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    /// The file this store reads from and writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "store persisted");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// In-memory store for tests and dry runs. Nothing touches the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path().join("storage.json")).unwrap();
        assert_eq!(store.get("custom-colors"), None);
    }

    #[test]
    fn test_set_then_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("custom-colors", "[\"#FF0000\"]").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("custom-colors").as_deref(),
            Some("[\"#FF0000\"]")
        );
    }

    #[test]
    fn test_set_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("key", "first").unwrap();
        store.set("key", "second").unwrap();

        assert_eq!(store.get("key").as_deref(), Some("second"));
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("key").as_deref(), Some("second"));
    }

    #[test]
    fn test_set_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("storage.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("key", "value").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(JsonFileStore::open(&path).is_err());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("key"), None);

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").as_deref(), Some("value"));

        let seeded = MemoryStore::with_entry("a", "b");
        assert_eq!(seeded.get("a").as_deref(), Some("b"));
    }
}
