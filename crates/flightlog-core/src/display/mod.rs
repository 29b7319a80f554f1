//! Rendering of records and statistics into reply payloads.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Renderer     │    │   Text blocks   │
//! │ (records, stats)│───▶│ (lines, cards)  │───▶│   or a Card     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`blocks`]: packing lines into size-bounded blocks
//! - [`card`]: structured replies
//! - [`models`]: `Display` wrappers for single records
//! - [`datetime`]: local time formatting

pub mod blocks;
pub mod card;
pub mod datetime;
pub mod models;

pub use blocks::pack_lines;
pub use card::{Card, CardField, BRAND_COLOR};
pub use datetime::LocalDateTime;
pub use models::{FlightLine, FlightSummary};

use crate::models::{FlightLogRecord, FlightStats, Owner};

/// Default block size, matching the message limit of common chat platforms.
pub const DEFAULT_BLOCK_LIMIT: usize = 2000;

/// Formats records and statistics for replies.
#[derive(Debug, Clone)]
pub struct Renderer {
    block_limit: usize,
}

impl Renderer {
    /// Create a renderer producing blocks of at most `block_limit`
    /// characters. A limit of zero is treated as one.
    pub fn new(block_limit: usize) -> Self {
        Self {
            block_limit: block_limit.max(1),
        }
    }

    pub fn block_limit(&self) -> usize {
        self.block_limit
    }

    /// Header line of a listing.
    pub fn list_header(owner: &Owner, count: usize) -> String {
        let noun = if count == 1 { "flight" } else { "flights" };
        format!("**Flight records for {owner} ({count} {noun}):**")
    }

    /// Render an ordered listing as one or more blocks.
    ///
    /// `records` must already be in display order; line `i` is numbered
    /// `i + 1`. The header always opens the first block.
    pub fn format_list(&self, owner: &Owner, records: &[FlightLogRecord]) -> Vec<String> {
        let header = format!("{}\n", Self::list_header(owner, records.len()));
        let lines = records.iter().enumerate().map(|(i, record)| {
            format!(
                "{}\n",
                FlightLine {
                    index: i + 1,
                    record
                }
            )
        });

        pack_lines(std::iter::once(header).chain(lines), self.block_limit)
    }

    /// Card confirming a newly logged flight.
    pub fn format_logged(&self, record: &FlightLogRecord) -> Card {
        let pilot = Owner::new(record.owner_id.as_str(), record.owner_label.as_str());

        Card::new(record.callsign.as_str())
            .description("Flight details:")
            .field("Pilot", pilot)
            .field("Departure", &record.origin)
            .field("Arrival", &record.destination)
            .field("Aircraft", &record.vehicle_type)
            .field("Passengers", &record.passenger_count)
            .field("Time", &record.duration)
            .image(record.image_url.clone())
            .footer(format!(
                "Logged {} · Thank you for using Flight Log!",
                LocalDateTime(&record.created_at)
            ))
    }

    /// Confirmation line for a removed flight.
    pub fn format_removed(&self, index: usize, owner: &Owner, record: &FlightLogRecord) -> String {
        format!(
            "Removed flight record #{index} for {owner}: {}",
            FlightSummary(record)
        )
    }

    /// Card summarizing an owner's statistics.
    pub fn format_stats(&self, owner: &Owner, stats: &FlightStats) -> Card {
        let most_used = stats
            .most_used_vehicle
            .as_ref()
            .map_or_else(|| "N/A".to_string(), ToString::to_string);

        Card::new(format!("Flight statistics for {owner}"))
            .field("Total Flights", stats.total_flights)
            .field("Unique Airports", stats.unique_airports)
            .field("Total Passengers", stats.total_passengers)
            .field("Most Used Aircraft", most_used)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_LIMIT)
    }
}
