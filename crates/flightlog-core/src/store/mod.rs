//! Persistence boundary for flight log records.
//!
//! The rest of the crate only talks to storage through [`RecordStore`]. Three
//! adapters ship with the crate:
//!
//! - [`SqliteStore`]: SQLite file, the default backend
//! - [`JsonFileStore`]: a single JSON document rewritten on every mutation
//! - [`MemoryStore`]: process-local, used by tests and embedders
//!
//! Every adapter assigns ids that are never reused and `created_at` values
//! that never go backwards relative to the records already stored.

use std::str::FromStr;

use async_trait::async_trait;
use jiff::Timestamp;

use crate::{
    error::Result,
    models::{FlightLogRecord, NewFlightLog, RecordId},
};

pub mod json_file;
pub mod memory;
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Durable create/list/delete of flight records.
///
/// Stores hold no business rules: validation, ordering, and index resolution
/// live above this trait.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a new record, assigning its `id` and `created_at`.
    async fn create(&self, flight: NewFlightLog) -> Result<RecordId>;

    /// All records owned by `owner_id`, in no particular order.
    async fn list(&self, owner_id: &str) -> Result<Vec<FlightLogRecord>>;

    /// Remove the record with the given identity. Returns `false` when no
    /// such record exists.
    async fn delete(&self, id: RecordId) -> Result<bool>;
}

/// Available storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Sqlite,
    JsonFile,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Sqlite => "sqlite",
            StoreBackend::JsonFile => "json",
            StoreBackend::Memory => "memory",
        }
    }

    /// File name used under the XDG data directory.
    pub(crate) fn default_file_name(&self) -> Option<&'static str> {
        match self {
            StoreBackend::Sqlite => Some("flightlog.db"),
            StoreBackend::JsonFile => Some("flightlog.json"),
            StoreBackend::Memory => None,
        }
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "json" | "file" => Ok(StoreBackend::JsonFile),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {s}")),
        }
    }
}

/// Timestamp for a record inserted after `latest`.
///
/// Falls back to `latest` when the wall clock is behind it.
pub(crate) fn next_created_at(latest: Option<Timestamp>) -> Timestamp {
    let now = Timestamp::now();
    match latest {
        Some(latest) if latest > now => latest,
        _ => now,
    }
}
