//! Key-value persistence backends.
//!
//! The event store only needs `get`/`set` of a string blob under a key.
//! [`FileStorage`] keeps one JSON file per key in a data directory;
//! [`MemoryStorage`] keeps everything in a map and is used in tests.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::CalendarResult;

/// A string key-value store.
pub trait Storage {
    /// Read the blob stored under `key`, or None if nothing is there.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the blob stored under `key`.
    fn set(&mut self, key: &str, blob: &str) -> CalendarResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, blob: &str) -> CalendarResult<()> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored data yet");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read stored data");
                None
            }
        }
    }

    fn set(&mut self, key: &str, blob: &str) -> CalendarResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));

        std::fs::write(&temp, blob)?;
        std::fs::rename(&temp, &path)?;

        debug!(path = %path.display(), bytes = blob.len(), "stored data");
        Ok(())
    }
}
