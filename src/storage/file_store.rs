//! Directory-backed key-value store
//!
//! Each key is one file under the store directory. Values are written with
//! [`write_text_atomic`], so a crash mid-write leaves the previous value.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::FinanceError;

use super::file_io::{read_text, remove_file_if_exists, write_text_atomic};
use super::KeyValueStore;

/// Key-value store persisted as one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, FinanceError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            FinanceError::Storage(format!(
                "Failed to create store directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        Ok(Self { dir })
    }

    /// Directory holding the value files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the value for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(file_name_for(key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, FinanceError> {
        read_text(self.path_for(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), FinanceError> {
        let path = self.path_for(key);
        debug!(key, path = %path.display(), bytes = value.len(), "writing store value");
        write_text_atomic(path, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), FinanceError> {
        remove_file_if_exists(self.path_for(key))
    }
}

/// Keep `[A-Za-z0-9._-]`, replace everything else with `_`
fn file_name_for(key: &str) -> String {
    let name: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // "." and ".." would escape into the directory itself or its parent
    if name.is_empty() || name.chars().all(|c| c == '.') {
        format!("_{}", name)
    } else {
        name
    }
}
