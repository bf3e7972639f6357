//! Persistent key-value storage for the favorite-team slots.
//!
//! The browser uses `localStorage` (see `web::WebStorage`); the command line
//! keeps the same flat string map in a JSON file.

use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::error::Result;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::PitwallError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Transient store; contents vanish with the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-file store that survives process restarts.
///
/// Every `set` rewrites the whole file. A missing or corrupt file reads as
/// empty, the same way a fresh browser profile has no saved slots.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn open(path: PathBuf) -> Self {
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();

        Self { path, entries }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PitwallError::StoreWrite(format!("{}: {e}", parent.display())))?;
        }

        let contents = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| PitwallError::StoreWrite(e.to_string()))?;

        std::fs::write(&self.path, contents)
            .map_err(|e| PitwallError::StoreWrite(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("favoriteTeamKey"), None);

        store.set("favoriteTeamKey", "ferrari").unwrap();
        store.set("favoriteTeamKey", "mclaren").unwrap();
        assert_eq!(store.get("favoriteTeamKey").as_deref(), Some("mclaren"));

        store.remove("favoriteTeamKey").unwrap();
        assert_eq!(store.get("favoriteTeamKey"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(path.clone());
        store.set("favoriteTeamKey", "redbull").unwrap();
        store.set("favoriteTeamName", "Red Bull Racing").unwrap();
        drop(store);

        let reopened = FileStore::open(path);
        assert_eq!(reopened.get("favoriteTeamKey").as_deref(), Some("redbull"));
        assert_eq!(
            reopened.get("favoriteTeamName").as_deref(),
            Some("Red Bull Racing")
        );
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ definitely not json").unwrap();

        let mut store = FileStore::open(path.clone());
        assert_eq!(store.get("favoriteTeamKey"), None);

        store.set("favoriteTeamKey", "mercedes").unwrap();
        assert_eq!(
            FileStore::open(path).get("favoriteTeamKey").as_deref(),
            Some("mercedes")
        );
    }
}
