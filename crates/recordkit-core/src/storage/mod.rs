//! Durable storage backends.
//!
//! A backend holds one text entry per store key. [`PersistentStore`] is the
//! only component that talks to a backend; nothing else reads or writes keys.
//!
//! [`PersistentStore`]: crate::store::PersistentStore

mod memory;

pub use memory::*;

use thiserror::Error;

use crate::db::{Database, DbError};

/// Storage backend errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<DbError> for StorageError {
    fn from(e: DbError) -> Self {
        StorageError::Backend(e.to_string())
    }
}

/// A textual key/value slot store.
///
/// Writes must be atomic: on failure the previous value stays intact.
pub trait Storage {
    /// Read the text stored under `key`, if any.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the text stored under `key`.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Clear `key`. Returns whether it held a value.
    fn remove(&self, key: &str) -> StorageResult<bool>;

    /// Keys currently holding a value, sorted.
    fn keys(&self) -> StorageResult<Vec<String>>;
}

impl Storage for Database {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_entry(key)?)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        Ok(self.write_entry(key, value)?)
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        Ok(self.remove_entry(key)?)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.list_keys()?)
    }
}
