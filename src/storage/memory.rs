//! In-process key-value store

use std::collections::HashMap;

use crate::error::FinanceError;

use super::KeyValueStore;

/// Key-value store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no keys are present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, FinanceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), FinanceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), FinanceError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_remove() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.read("k").unwrap(), None);

        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
        assert!(store.contains("k"));
        assert_eq!(store.len(), 1);

        store.write("k", "w").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("w"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }
}
