//! SQLite-backed record store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::task;

use super::RecordStore;
use crate::{
    db::Database,
    error::{Result, StoreResultExt},
    models::{FlightLogRecord, NewFlightLog, RecordId},
};

/// Record store backed by an SQLite database file.
///
/// Each call opens its own connection on a blocking task, so no connection
/// is ever shared across threads.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (and if needed initializes) the database at `path`.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(|_| ()))
            .await
            .store_context("Database task failed")??;

        debug!("SQLite store ready at {}", db_path.display());
        Ok(Self { db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn create(&self, flight: NewFlightLog) -> Result<RecordId> {
        let db_path = self.db_path.clone();

        let record = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_flight(&flight)
        })
        .await
        .store_context("Database task failed")??;

        Ok(record.id)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<FlightLogRecord>> {
        let db_path = self.db_path.clone();
        let owner_id = owner_id.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_flights(&owner_id)
        })
        .await
        .store_context("Database task failed")?
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_flight(id)
        })
        .await
        .store_context("Database task failed")?
    }
}
