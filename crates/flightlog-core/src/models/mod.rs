//! Data models for flight log records.
//!
//! Display implementations live in [`crate::display`] so the models stay plain
//! data.

pub mod owner;
pub mod record;
pub mod stats;


pub use owner::Owner;
pub use record::{FlightLogRecord, NewFlightLog, RecordId, DEFAULT_DURATION};
pub use stats::{FlightStats, VehicleUsage};
