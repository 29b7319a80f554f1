//! Flight log record definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Store-assigned identity of a record.
pub type RecordId = u64;

/// Duration recorded when none was submitted.
pub const DEFAULT_DURATION: &str = "N/A";

/// A persisted flight log entry.
///
/// Records are immutable: they are created by a store and only ever removed
/// as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightLogRecord {
    /// Unique identifier assigned by the store, never reused
    pub id: RecordId,

    /// Identity of the pilot the flight belongs to
    pub owner_id: String,

    /// Pilot label at the time of logging
    pub owner_label: String,

    /// Departure airport
    pub origin: String,

    /// Arrival airport
    pub destination: String,

    /// Aircraft type
    pub vehicle_type: String,

    /// Callsign including the organization tag
    pub callsign: String,

    /// Passenger count as submitted
    pub passenger_count: String,

    /// Flight time as submitted
    #[serde(default = "default_duration")]
    pub duration: String,

    /// Optional screenshot or photo of the flight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Timestamp assigned by the store (UTC)
    pub created_at: Timestamp,
}

/// A validated record that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFlightLog {
    pub owner_id: String,
    pub owner_label: String,
    pub origin: String,
    pub destination: String,
    pub vehicle_type: String,
    pub callsign: String,
    pub passenger_count: String,
    pub duration: String,
    pub image_url: Option<String>,
}

impl NewFlightLog {
    /// Attach the store-assigned identity and timestamp.
    pub fn into_record(self, id: RecordId, created_at: Timestamp) -> FlightLogRecord {
        FlightLogRecord {
            id,
            owner_id: self.owner_id,
            owner_label: self.owner_label,
            origin: self.origin,
            destination: self.destination,
            vehicle_type: self.vehicle_type,
            callsign: self.callsign,
            passenger_count: self.passenger_count,
            duration: self.duration,
            image_url: self.image_url,
            created_at,
        }
    }
}

fn default_duration() -> String {
    DEFAULT_DURATION.to_string()
}
