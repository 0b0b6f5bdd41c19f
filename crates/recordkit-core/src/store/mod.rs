//! Persistent, typed values bound to a store key.
//!
//! # Invariants
//! - Construction never fails: missing or corrupt data is replaced by the
//!   caller's seed, and an unusable backend degrades to in-memory operation.
//! - `replace` updates the snapshot before persisting, so a failed write
//!   still leaves the new value visible to this instance.
//! - Instances bound to the same key share nothing in memory. A fresh
//!   instance re-reads storage; concurrent writers resolve last-write-wins.

pub mod keys;
mod revision;

pub use revision::*;

use thiserror::Error;
use tracing::{debug, warn};

use crate::codec::{self, CodecError, StoredValue};
use crate::storage::{Storage, StorageError};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error for key `{key}`: {source}")]
    Storage {
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("Encoding error for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: CodecError,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// How a store obtained its initial snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Decoded from existing storage
    Loaded,
    /// Key was absent; seed written
    Seeded,
    /// Stored data was corrupt; seed written over it
    Recovered,
    /// Backend failed; seed held in memory only
    Unavailable,
}

/// One typed value mediated through a storage backend.
pub struct PersistentStore<'a, T: StoredValue> {
    storage: &'a dyn Storage,
    key: String,
    seed: T,
    value: T,
    outcome: LoadOutcome,
    durable: bool,
}

impl<'a, T: StoredValue> PersistentStore<'a, T> {
    /// Bind `key`, loading its stored value or seeding it.
    pub fn new(storage: &'a dyn Storage, key: impl Into<String>, seed: T) -> Self {
        let key = key.into();
        let (value, outcome) = load(storage, &key, &seed);
        Self {
            storage,
            key,
            seed,
            value,
            outcome,
            durable: outcome != LoadOutcome::Unavailable,
        }
    }

    /// Current snapshot. Never re-reads storage.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Bound key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How the snapshot was obtained at construction (or last reload).
    pub fn load_outcome(&self) -> LoadOutcome {
        self.outcome
    }

    /// Whether the last storage interaction succeeded.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    /// Replace the whole value and persist it.
    ///
    /// On error the in-memory snapshot already holds `value`.
    pub fn replace(&mut self, value: T) -> StoreResult<()> {
        self.value = value;
        let result = self.persist();
        self.durable = result.is_ok();
        result
    }

    /// Build the next value from a copy of the current one, then replace.
    pub fn modify<F>(&mut self, f: F) -> StoreResult<()>
    where
        F: FnOnce(&mut T),
    {
        let mut next = self.value.clone();
        f(&mut next);
        self.replace(next)
    }

    /// Digest of the current snapshot's encoding.
    pub fn revision(&self) -> StoreResult<Revision> {
        let text = codec::encode(&self.value).map_err(|source| StoreError::Encode {
            key: self.key.clone(),
            source,
        })?;
        Ok(Revision::of(&text))
    }

    /// Check whether storage no longer holds this instance's snapshot.
    ///
    /// Compares decoded values, so differences in text form alone (number
    /// spelling, zone-less timestamps, whitespace) are not staleness. Absent or
    /// undecodable entries count as stale. Reports only; nothing is merged or
    /// reloaded.
    pub fn is_stale(&self) -> StoreResult<bool> {
        let stored = self.storage.read(&self.key).map_err(|source| StoreError::Storage {
            key: self.key.clone(),
            source,
        })?;
        let stored = stored.and_then(|text| codec::decode::<T>(&text));
        Ok(stored.as_ref() != Some(&self.value))
    }

    /// Drop the snapshot and load again with the original seed.
    pub fn reload(&mut self) -> LoadOutcome {
        let (value, outcome) = load(self.storage, &self.key, &self.seed);
        self.value = value;
        self.outcome = outcome;
        self.durable = outcome != LoadOutcome::Unavailable;
        outcome
    }

    fn persist(&self) -> StoreResult<()> {
        write_value(self.storage, &self.key, &self.value)?;
        debug!(key = %self.key, "persisted value");
        Ok(())
    }
}

fn write_value<T: StoredValue>(storage: &dyn Storage, key: &str, value: &T) -> StoreResult<()> {
    let text = codec::encode(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.write(key, &text).map_err(|source| {
        warn!(key = %key, error = %source, "failed to persist value");
        StoreError::Storage {
            key: key.to_string(),
            source,
        }
    })
}

fn load<T: StoredValue>(storage: &dyn Storage, key: &str, seed: &T) -> (T, LoadOutcome) {
    match storage.read(key) {
        Ok(Some(text)) => match codec::decode_detailed::<T>(&text) {
            Ok(value) => {
                debug!(key = %key, outcome = "loaded", "loaded stored value");
                (value, LoadOutcome::Loaded)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "stored value is corrupt; reseeding");
                reseed(storage, key, seed, LoadOutcome::Recovered)
            }
        },
        Ok(None) => reseed(storage, key, seed, LoadOutcome::Seeded),
        Err(e) => {
            warn!(key = %key, error = %e, "storage unavailable; keeping seed in memory");
            (seed.clone(), LoadOutcome::Unavailable)
        }
    }
}

fn reseed<T: StoredValue>(
    storage: &dyn Storage,
    key: &str,
    seed: &T,
    outcome: LoadOutcome,
) -> (T, LoadOutcome) {
    match write_value(storage, key, seed) {
        Ok(()) => {
            debug!(key = %key, outcome = ?outcome, "seeded value");
            (seed.clone(), outcome)
        }
        Err(_) => (seed.clone(), LoadOutcome::Unavailable),
    }
}
