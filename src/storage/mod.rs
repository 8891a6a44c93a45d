//! Storage layer for fintrack
//!
//! A plain string key-value store is the only persistence boundary. The
//! [`codec`] module turns domain values into those strings and back, and
//! [`init`] seeds a fresh store with sample data.

pub mod codec;
pub mod file_io;
pub mod file_store;
pub mod init;
pub mod memory;

pub use file_store::FileStore;
pub use init::{reset_all_data, sample_transactions, seed_sample_data_if_needed};
pub use memory::MemoryStore;

use tracing::warn;

use crate::error::FinanceError;

/// Store keys for every persisted value
pub mod keys {
    pub const TRANSACTIONS: &str = "et.transactions";
    pub const INVESTMENTS: &str = "et.investments";
    pub const BUDGET: &str = "et.budget";
    pub const SETTINGS: &str = "et.settings";

    /// Every key the finance layer owns
    pub const ALL: [&str; 4] = [TRANSACTIONS, INVESTMENTS, BUDGET, SETTINGS];
}

/// Synchronous string key-value storage
pub trait KeyValueStore {
    /// Read the value for `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>, FinanceError>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<(), FinanceError>;

    /// Delete `key`; deleting an absent key succeeds
    fn remove(&mut self, key: &str) -> Result<(), FinanceError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>, FinanceError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), FinanceError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), FinanceError> {
        (**self).remove(key)
    }
}

/// Read a key, treating an unavailable store as an absent value
pub fn read_or_absent<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.read(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "store read failed, using default");
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::BrokenStore;
    use super::*;

    #[test]
    fn test_read_or_absent_passes_values_through() {
        let mut store = MemoryStore::new();
        store.write(keys::BUDGET, "10").unwrap();

        assert_eq!(read_or_absent(&store, keys::BUDGET).as_deref(), Some("10"));
        assert_eq!(read_or_absent(&store, keys::SETTINGS), None);
    }

    #[test]
    fn test_read_or_absent_swallows_errors() {
        assert_eq!(read_or_absent(&BrokenStore, keys::TRANSACTIONS), None);
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.write("k", "v").unwrap();
        assert_eq!(read_or_absent(&store, "k").as_deref(), Some("v"));
    }
}
