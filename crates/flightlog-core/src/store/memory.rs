//! Process-local record store.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{next_created_at, RecordStore};
use crate::{
    error::Result,
    models::{FlightLogRecord, NewFlightLog, RecordId},
};

#[derive(Debug)]
struct MemoryState {
    next_id: RecordId,
    records: Vec<FlightLogRecord>,
}

/// Record store kept entirely in memory.
#[derive(Debug)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, flight: NewFlightLog) -> Result<RecordId> {
        let mut state = self.state.lock().await;

        let latest = state.records.iter().map(|r| r.created_at).max();
        let id = state.next_id;
        state.next_id += 1;

        let record = flight.into_record(id, next_created_at(latest));
        state.records.push(record);
        Ok(id)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<FlightLogRecord>> {
        let state = self.state.lock().await;
        Ok(state
            .records
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        let mut state = self.state.lock().await;
        let before = state.records.len();
        state.records.retain(|r| r.id != id);
        Ok(state.records.len() != before)
    }
}
