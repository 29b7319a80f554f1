//! Display implementations for flight records.

use std::fmt;

use crate::models::{FlightLogRecord, VehicleUsage};

/// One numbered listing line:
/// `index. callsign | origin → destination | vehicle | pax pax | duration`.
pub struct FlightLine<'a> {
    pub index: usize,
    pub record: &'a FlightLogRecord,
}

impl fmt::Display for FlightLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.record;
        write!(
            f,
            "{}. {} | {} → {} | {} | {} pax | {}",
            self.index,
            r.callsign,
            r.origin,
            r.destination,
            r.vehicle_type,
            r.passenger_count,
            r.duration
        )
    }
}

/// Short form used in confirmations: `callsign | origin → destination`.
pub struct FlightSummary<'a>(pub &'a FlightLogRecord);

impl fmt::Display for FlightSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} → {}",
            self.0.callsign, self.0.origin, self.0.destination
        )
    }
}

impl fmt::Display for VehicleUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.vehicle_type, self.count)
    }
}
