//! Storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::{Database, DbResult};
use crate::storage::{MemoryStorage, Storage};

/// Environment variable naming the database file.
pub const DB_PATH_ENV: &str = "RECORDKIT_DB_PATH";

/// Where durable entries live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageLocation {
    /// SQLite database file
    File { path: PathBuf },
    /// SQLite in-memory database, lost on drop
    #[default]
    InMemory,
}

/// Host-supplied storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub location: StorageLocation,
}

impl StorageConfig {
    /// File-backed configuration.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StorageLocation::File { path: path.into() },
        }
    }

    /// Read `RECORDKIT_DB_PATH`; unset or blank selects in-memory storage.
    pub fn from_env() -> Self {
        Self::from_path_var(std::env::var(DB_PATH_ENV).ok())
    }

    fn from_path_var(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::file(path.trim()),
            _ => Self::default(),
        }
    }

    /// Open the configured database.
    pub fn open(&self) -> DbResult<Database> {
        match &self.location {
            StorageLocation::File { path } => Database::open(path),
            StorageLocation::InMemory => Database::open_in_memory(),
        }
    }

    /// Open the configured backend, degrading to [`MemoryStorage`] when the
    /// database cannot be opened.
    pub fn open_storage(&self) -> Box<dyn Storage> {
        match self.open() {
            Ok(db) => {
                match db.keys() {
                    Ok(keys) => {
                        info!(location = ?self.location, entries = keys.len(), "opened storage")
                    }
                    Err(e) => {
                        warn!(location = ?self.location, error = %e, "could not list entries")
                    }
                }
                Box::new(db)
            }
            Err(e) => {
                warn!(location = ?self.location, error = %e, "storage unavailable; using memory");
                Box::new(MemoryStorage::new())
            }
        }
    }
}
