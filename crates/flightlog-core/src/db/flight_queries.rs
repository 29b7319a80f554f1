//! Flight log CRUD queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{Result, StoreResultExt},
    models::{FlightLogRecord, NewFlightLog, RecordId},
    store::next_created_at,
};

const INSERT_FLIGHT_SQL: &str = "INSERT INTO flight_logs (owner_id, owner_label, origin, destination, vehicle_type, callsign, passenger_count, duration, image_url, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_LATEST_CREATED_AT_SQL: &str = "SELECT MAX(created_at) FROM flight_logs";
const SELECT_OWNER_FLIGHTS_SQL: &str = "SELECT id, owner_id, owner_label, origin, destination, vehicle_type, callsign, passenger_count, duration, image_url, created_at FROM flight_logs WHERE owner_id = ?1 ORDER BY id";
const DELETE_FLIGHT_SQL: &str = "DELETE FROM flight_logs WHERE id = ?1";

/// Fixed nanosecond precision keeps the stored text sortable.
fn format_timestamp(ts: &Timestamp) -> String {
    format!("{ts:.9}")
}

fn parse_timestamp(raw: &str, column: usize) -> rusqlite::Result<Timestamp> {
    raw.parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<FlightLogRecord> {
    let created_at: String = row.get(10)?;

    Ok(FlightLogRecord {
        id: row.get::<_, i64>(0)? as RecordId,
        owner_id: row.get(1)?,
        owner_label: row.get(2)?,
        origin: row.get(3)?,
        destination: row.get(4)?,
        vehicle_type: row.get(5)?,
        callsign: row.get(6)?,
        passenger_count: row.get(7)?,
        duration: row.get(8)?,
        image_url: row.get(9)?,
        created_at: parse_timestamp(&created_at, 10)?,
    })
}

impl super::Database {
    /// Inserts a flight log and returns the stored record.
    ///
    /// The insert and the timestamp lookup share one transaction, so
    /// `created_at` is never earlier than any record already stored.
    pub fn insert_flight(&mut self, flight: &NewFlightLog) -> Result<FlightLogRecord> {
        let tx = self
            .connection
            .transaction()
            .store_context("Failed to begin transaction")?;

        let latest: Option<String> = tx
            .query_row(SELECT_LATEST_CREATED_AT_SQL, [], |row| row.get(0))
            .optional()
            .store_context("Failed to query latest flight timestamp")?
            .flatten();
        let latest = latest
            .map(|raw| parse_timestamp(&raw, 0))
            .transpose()
            .store_context("Failed to parse latest flight timestamp")?;

        let created_at = next_created_at(latest);

        tx.execute(
            INSERT_FLIGHT_SQL,
            params![
                flight.owner_id,
                flight.owner_label,
                flight.origin,
                flight.destination,
                flight.vehicle_type,
                flight.callsign,
                flight.passenger_count,
                flight.duration,
                flight.image_url.as_deref(),
                format_timestamp(&created_at),
            ],
        )
        .store_context("Failed to insert flight log")?;

        let id = tx.last_insert_rowid() as RecordId;

        tx.commit().store_context("Failed to commit transaction")?;

        Ok(flight.clone().into_record(id, created_at))
    }

    /// Lists every flight logged for an owner, in insertion order.
    pub fn list_flights(&self, owner_id: &str) -> Result<Vec<FlightLogRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_OWNER_FLIGHTS_SQL)
            .store_context("Failed to prepare query")?;

        let records = stmt
            .query_map(params![owner_id], row_to_record)
            .store_context("Failed to query flight logs")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .store_context("Failed to read flight logs")?;

        Ok(records)
    }

    /// Deletes a flight by identity. Returns whether a row was removed.
    pub fn delete_flight(&mut self, id: RecordId) -> Result<bool> {
        let affected = self
            .connection
            .execute(DELETE_FLIGHT_SQL, params![id as i64])
            .store_context("Failed to delete flight log")?;

        Ok(affected > 0)
    }
}
