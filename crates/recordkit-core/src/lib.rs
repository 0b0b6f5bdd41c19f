//! Recordkit Core Library
//!
//! Local persistence and derived metrics shared by an academic dashboard and a
//! respiratory-health tracker.
//!
//! # Architecture
//!
//! ```text
//!                  UI action (form submit, toggle)
//!                                │
//!                 ┌──────────────▼──────────────┐
//!                 │   PersistentStore::get()    │  snapshot, no re-read
//!                 └──────────────┬──────────────┘
//!                                │
//!                 ┌──────────────▼──────────────┐
//!                 │  query: filter/sort/group   │
//!                 └──────────────┬──────────────┘
//!                                │
//!              ┌─────────────────┴─────────────────┐
//!              ▼                                   ▼
//!     metrics / views                      views::with_* builders
//!   (percent, letter, zone,              (next full collection value)
//!    urgency, aggregates)                          │
//!              │                   ┌───────────────▼───────────────┐
//!              ▼                   │  PersistentStore::replace()   │
//!        presentation              │   codec::encode → Storage     │
//!                                  └───────────────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **Nothing here is fatal.** Corrupt data reseeds, an unusable backend
//! degrades to in-memory operation, and degenerate inputs resolve to safe
//! defaults. Callers always receive a usable value.
//!
//! # Modules
//!
//! - [`db`]: SQLite key/value backend
//! - [`storage`]: backend trait and in-memory backend
//! - [`codec`]: all-or-nothing JSON encoding with validation
//! - [`store`]: typed persistent values bound to a key
//! - [`models`]: record kinds (Course, Assignment, Grade, Medication, ...)
//! - [`metrics`]: pure derived values
//! - [`query`]: order-preserving filter/sort/group
//! - [`views`]: per-application views and mutation builders
//! - [`config`]: storage configuration

pub mod codec;
pub mod config;
pub mod db;
pub mod metrics;
pub mod models;
pub mod query;
pub mod storage;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use codec::{CodecError, StoredValue};
pub use config::{StorageConfig, StorageLocation};
pub use db::{Database, DbError};
pub use metrics::{Aggregate, DueUrgency, GradeBand, LetterGrade};
pub use models::{
    Assignment, AssignmentStatus, Course, CourseLevel, Grade, Medication, MedicationType,
    PeakFlowReading, Record, Severity, SymptomEntry, ValidationError, Zone,
};
pub use storage::{MemoryStorage, Storage, StorageError};
pub use store::{keys, LoadOutcome, PersistentStore, Revision, StoreError};
