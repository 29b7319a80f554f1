//! Owner-scoped ordering and display-index resolution.
//!
//! The order produced here is the numbering users see in a listing, so a
//! `view` followed by a `remove` addresses the same record as long as nothing
//! changed in between.

use log::debug;

use crate::{
    error::{FlightLogError, Result},
    models::{FlightLogRecord, Owner},
    store::RecordStore,
};

/// Read-side view over a [`RecordStore`].
pub struct QueryEngine<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// The owner's records, oldest first.
    ///
    /// Equal timestamps fall back to the id, which stores hand out in
    /// insertion order.
    pub async fn ordered_for(&self, owner_id: &str) -> Result<Vec<FlightLogRecord>> {
        let mut records = self.store.list(owner_id).await?;
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    /// Resolve a 1-based display index to the stored record.
    ///
    /// # Errors
    ///
    /// Returns `FlightLogError::NoRecords` if the owner has no records and
    /// `FlightLogError::IndexOutOfRange` if `display_index` is outside
    /// `[1, count]`.
    pub async fn resolve_index(
        &self,
        owner: &Owner,
        display_index: i64,
    ) -> Result<FlightLogRecord> {
        let mut records = self.ordered_for(&owner.id).await?;
        let count = records.len();

        if count == 0 {
            return Err(FlightLogError::NoRecords {
                owner: owner.display_name().to_string(),
            });
        }

        let position = usize::try_from(display_index)
            .ok()
            .and_then(|index| index.checked_sub(1))
            .filter(|position| *position < count)
            .ok_or(FlightLogError::IndexOutOfRange {
                index: display_index,
                count,
            })?;

        debug!(
            "Resolved index {display_index} for owner {} to record {}",
            owner.id, records[position].id
        );
        Ok(records.swap_remove(position))
    }
}
