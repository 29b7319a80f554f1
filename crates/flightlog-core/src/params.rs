//! Parameter structures for flight log commands.
//!
//! These are the typed command invocations the core accepts. They carry no
//! framework-specific derives beyond serde (and `schemars` behind the
//! `schema` feature), so every dispatch layer converts its own argument types
//! into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Fields arrive raw; validation and normalization happen in the
//! [`CommandProcessor`](crate::CommandProcessor).

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Owner;

/// Parameters for logging a flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LogFlight {
    /// Departure airport (required)
    pub origin: String,
    /// Arrival airport (required)
    pub destination: String,
    /// Aircraft type (required)
    pub vehicle_type: String,
    /// Callsign without the organization tag (required)
    pub callsign: String,
    /// Number of passengers (required)
    pub passengers: String,
    /// Flight time, defaults to "N/A"
    #[serde(default)]
    pub duration: Option<String>,
    /// Image URL to attach to the log
    #[serde(default)]
    pub image_url: Option<String>,
    /// Pilot to log the flight for; defaults to the caller
    #[serde(default)]
    pub pilot: Option<Owner>,
}

/// Parameters for listing a pilot's flights.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ViewFlights {
    /// Pilot whose flights to list; defaults to the caller
    #[serde(default)]
    pub pilot: Option<Owner>,
}

/// Parameters for removing a flight by its display index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RemoveFlight {
    /// 1-based index as shown by view
    pub index: i64,
    /// Pilot whose flight to remove; defaults to the caller
    #[serde(default)]
    pub pilot: Option<Owner>,
}

/// Parameters for summarizing a pilot's flights.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowStats {
    /// Pilot to summarize; defaults to the caller
    #[serde(default)]
    pub pilot: Option<Owner>,
}

/// A single command invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    Log(LogFlight),
    View(ViewFlights),
    Remove(RemoveFlight),
    Stats(ShowStats),
}

impl Command {
    /// Command name as users type it.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Log(_) => "log",
            Command::View(_) => "view",
            Command::Remove(_) => "remove",
            Command::Stats(_) => "stats",
        }
    }
}

impl From<LogFlight> for Command {
    fn from(params: LogFlight) -> Self {
        Command::Log(params)
    }
}

impl From<ViewFlights> for Command {
    fn from(params: ViewFlights) -> Self {
        Command::View(params)
    }
}

impl From<RemoveFlight> for Command {
    fn from(params: RemoveFlight) -> Self {
        Command::Remove(params)
    }
}

impl From<ShowStats> for Command {
    fn from(params: ShowStats) -> Self {
        Command::Stats(params)
    }
}
