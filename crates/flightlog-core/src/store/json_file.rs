//! Flat-file record store.
//!
//! The whole record set lives in one JSON document that is read on every call
//! and rewritten on every mutation:
//!
//! ```json
//! { "next_id": 3, "records": [ { "id": 1, "owner_id": "...", ... } ] }
//! ```
//!
//! A bare array of records is accepted as well. Missing, truncated, or
//! otherwise unreadable JSON is treated as an empty store.

use std::{
    fs::{self, File},
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::{sync::Mutex, task};

use super::{next_created_at, RecordStore};
use crate::{
    error::{FlightLogError, Result, StoreResultExt},
    models::{FlightLogRecord, NewFlightLog, RecordId},
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct FlightLogDocument {
    #[serde(default)]
    next_id: RecordId,
    #[serde(default)]
    records: Vec<FlightLogRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredForm {
    Document(FlightLogDocument),
    Records(Vec<FlightLogRecord>),
}

impl FlightLogDocument {
    fn parse(contents: &str, path: &Path) -> Self {
        if contents.trim().is_empty() {
            return Self::default();
        }

        match serde_json::from_str::<StoredForm>(contents) {
            Ok(StoredForm::Document(document)) => document,
            Ok(StoredForm::Records(records)) => Self {
                next_id: 0,
                records,
            },
            Err(e) => {
                warn!(
                    "Ignoring unreadable flight log file {}: {e}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Next free id, never below one past the highest id present.
    fn allocate_id(&mut self) -> Result<RecordId> {
        let exhausted = || {
            FlightLogError::store("No flight log ids left")
                .with_source(io::Error::other("record id space exhausted"))
        };

        let floor = match self.records.iter().map(|r| r.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(exhausted)?,
            None => 1,
        };
        let id = self.next_id.max(floor);
        self.next_id = id.checked_add(1).ok_or_else(exhausted)?;
        Ok(id)
    }
}

fn load(path: &Path) -> Result<FlightLogDocument> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(FlightLogDocument::parse(&contents, path)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(FlightLogDocument::default()),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            warn!("Ignoring non-UTF-8 flight log file {}: {e}", path.display());
            Ok(FlightLogDocument::default())
        }
        Err(e) => Err(FlightLogError::store("Failed to read flight log file").with_source(e)),
    }
}

#[cfg(unix)]
fn fsync_dir(path: &Path) -> io::Result<()> {
    File::open(path)?.sync_all()
}

#[cfg(not(unix))]
fn fsync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Write to a sibling temp file, then rename over the original.
///
/// The temp file is synced before the rename and the directory after it, so
/// a crash leaves either the old document or the new one, never an empty
/// file.
fn save(path: &Path, document: &FlightLogDocument) -> Result<()> {
    let contents =
        serde_json::to_vec_pretty(document).store_context("Failed to serialize flight logs")?;

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    let mut file = File::create(&tmp_path).store_context("Failed to create flight log file")?;
    file.write_all(&contents)
        .store_context("Failed to write flight log file")?;
    file.sync_all()
        .store_context("Failed to sync flight log file")?;
    drop(file);

    fs::rename(&tmp_path, path).store_context("Failed to replace flight log file")?;

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fsync_dir(parent).store_context("Failed to sync flight log directory")
}

/// Record store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn create(&self, flight: NewFlightLog) -> Result<RecordId> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();

        task::spawn_blocking(move || -> Result<RecordId> {
            let mut document = load(&path)?;
            let latest = document.records.iter().map(|r| r.created_at).max();
            let id = document.allocate_id()?;

            document
                .records
                .push(flight.into_record(id, next_created_at(latest)));
            save(&path, &document)?;

            debug!("Stored flight {id} in {}", path.display());
            Ok(id)
        })
        .await
        .store_context("File store task failed")?
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<FlightLogRecord>> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        let owner_id = owner_id.to_string();

        task::spawn_blocking(move || -> Result<Vec<FlightLogRecord>> {
            let document = load(&path)?;
            Ok(document
                .records
                .into_iter()
                .filter(|r| r.owner_id == owner_id)
                .collect())
        })
        .await
        .store_context("File store task failed")?
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();

        task::spawn_blocking(move || -> Result<bool> {
            let mut document = load(&path)?;
            let before = document.records.len();
            document.records.retain(|r| r.id != id);

            if document.records.len() == before {
                return Ok(false);
            }

            // keep the removed id retired
            document.next_id = document.next_id.max(id.saturating_add(1));
            save(&path, &document)?;
            Ok(true)
        })
        .await
        .store_context("File store task failed")?
    }
}
