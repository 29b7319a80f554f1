//! Aggregate statistics over an owner's flight records.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::FlightLogRecord;

/// The most frequently flown aircraft type and how often it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleUsage {
    pub vehicle_type: String,
    pub count: usize,
}

/// Summary numbers shown by the stats command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightStats {
    /// Number of records
    pub total_flights: usize,
    /// Distinct airports across all origins and destinations
    pub unique_airports: usize,
    /// Sum of passenger counts; unparsable counts contribute zero
    pub total_passengers: u64,
    /// `None` only for an empty record set
    pub most_used_vehicle: Option<VehicleUsage>,
}

impl FlightStats {
    /// Aggregate the given records.
    ///
    /// Ties for the most used aircraft go to the type that appears first in
    /// `records`, so callers should pass a deterministically ordered slice.
    pub fn from_records(records: &[FlightLogRecord]) -> Self {
        let airports: HashSet<&str> = records
            .iter()
            .flat_map(|r| [r.origin.as_str(), r.destination.as_str()])
            .collect();

        let total_passengers = records
            .iter()
            .map(|r| parse_passengers(&r.passenger_count))
            .fold(0u64, u64::saturating_add);

        Self {
            total_flights: records.len(),
            unique_airports: airports.len(),
            total_passengers,
            most_used_vehicle: most_used_vehicle(records),
        }
    }
}

/// Passenger counts are free text; anything that is not a non-negative
/// integer counts as zero.
pub fn parse_passengers(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}

fn most_used_vehicle(records: &[FlightLogRecord]) -> Option<VehicleUsage> {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let count = counts.entry(record.vehicle_type.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(record.vehicle_type.as_str());
        }
        *count += 1;
    }

    // strict comparison keeps the earliest type on ties
    first_seen
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, vehicle| {
            let count = counts[vehicle];
            match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((vehicle, count)),
            }
        })
        .map(|(vehicle_type, count)| VehicleUsage {
            vehicle_type: vehicle_type.to_string(),
            count,
        })
}
