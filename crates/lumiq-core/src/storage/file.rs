//! File-backed key-value store.
//!
//! Entries live in a small JSON document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "updated_at": "2026-01-01T00:00:00Z",
//!   "entries": { "lumiq-theme": "ocean", "lumiq-dark-mode": "false" }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::error::{Error, Result};

/// Current version of the store document format.
const STORE_FILE_VERSION: u32 = 1;

/// On-disk document format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDocument {
    /// File format version.
    pub version: u32,
    /// Last update timestamp.
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Stored entries.
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            version: STORE_FILE_VERSION,
            updated_at: chrono::Utc::now(),
            entries: BTreeMap::new(),
        }
    }
}

/// A store persisted as a JSON file.
///
/// Reads go to disk every time so that several processes sharing the file
/// see each other's writes. Every write rewrites the whole document.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform default location.
    pub fn open_default() -> Result<Self> {
        Self::default_path().map(Self::new).ok_or_else(|| {
            Error::StorageUnavailable("could not determine a data directory".to_string())
        })
    }

    /// Get the default preference file path.
    ///
    /// | Platform | Path |
    /// |----------|------|
    /// | Linux | `~/.local/share/lumiq/preferences.json` |
    /// | macOS | `~/Library/Application Support/Lumiq/preferences.json` |
    /// | Windows | `%APPDATA%\Lumiq\data\preferences.json` |
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "lumiq", "Lumiq")
            .map(|dirs| dirs.data_dir().join("preferences.json"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, returning an empty one if the file doesn't exist.
    pub fn load_document(&self) -> Result<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let document: StoreDocument = serde_json::from_str(&content)?;

        if document.version > STORE_FILE_VERSION {
            return Err(Error::StorageUnavailable(format!(
                "preference file version {} is newer than supported version {}",
                document.version, STORE_FILE_VERSION
            )));
        }

        Ok(document)
    }

    fn write_document(&self, document: &mut StoreDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        document.updated_at = chrono::Utc::now();
        let content = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_document()?.entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut document = self.load_document()?;
        document.entries.insert(key.to_string(), value.to_string());
        self.write_document(&mut document)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut document = self.load_document()?;
        if document.entries.remove(key).is_some() {
            self.write_document(&mut document)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));

        assert_eq!(store.get("lumiq-theme").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");
        let mut store = FileStore::new(&path);

        store.set("lumiq-theme", "ocean").unwrap();

        assert!(path.exists());
        assert_eq!(store.get("lumiq-theme").unwrap().as_deref(), Some("ocean"));
    }

    #[test]
    fn test_document_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = FileStore::new(&path);

        store.set("lumiq-dark-mode", "true").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["entries"]["lumiq-dark-mode"], "true");
        assert!(value["updated_at"].is_string());
    }

    #[test]
    fn test_two_handles_share_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let mut writer = FileStore::new(&path);
        let reader = FileStore::new(&path);

        writer.set("lumiq-theme", "terra").unwrap();
        assert_eq!(reader.get("lumiq-theme").unwrap().as_deref(), Some("terra"));
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("prefs.json"));

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        let err = store.get("lumiq-theme").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.is_storage());
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(
            &path,
            r#"{"version": 99, "updated_at": "2026-01-01T00:00:00Z", "entries": {}}"#,
        )
        .unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("lumiq-theme"),
            Err(Error::StorageUnavailable(_))
        ));
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = FileStore::default_path() {
            assert!(path.ends_with("preferences.json"));
        }
    }
}
