//! Core library for the FlightLog flight record keeper.
//!
//! This crate owns everything a dispatch layer (the CLI, the MCP server, or
//! a chat bot adapter) needs to serve the `log`, `view`, `remove`, and
//! `stats` commands: validation, persistence, ordering, and rendering.
//!
//! # Architecture
//!
//! - **Stores** ([`store`]): the [`RecordStore`] trait and its SQLite, JSON
//!   file, and in-memory adapters
//! - **Queries** ([`query`]): deterministic ordering and display index
//!   resolution
//! - **Rendering** ([`display`]): size-bounded text blocks and cards
//! - **Processing** ([`processor`]): the [`CommandProcessor`] tying it all
//!   together and producing a [`Response`]
//!
//! Dispatch layers never format errors themselves; [`CommandProcessor::respond`]
//! folds every failure into the same private reply.
//!
//! # Quick Start
//!
//! ```rust
//! use flightlog_core::{params::LogFlight, CommandProcessorBuilder, Owner, StoreBackend};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let processor = CommandProcessorBuilder::new()
//!     .with_backend(StoreBackend::Memory)
//!     .build()
//!     .await?;
//!
//! let caller = Owner::new("1001", "Maverick");
//! let response = processor
//!     .execute(
//!         &caller,
//!         LogFlight {
//!             origin: "TPE".to_string(),
//!             destination: "NRT".to_string(),
//!             vehicle_type: "B777".to_string(),
//!             callsign: "12".to_string(),
//!             passengers: "250".to_string(),
//!             ..Default::default()
//!         }
//!         .into(),
//!     )
//!     .await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod processor;
pub mod query;
pub mod response;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{Card, LocalDateTime, Renderer, DEFAULT_BLOCK_LIMIT};
pub use error::{FlightLogError, Result, StoreResultExt};
pub use models::{FlightLogRecord, FlightStats, NewFlightLog, Owner, RecordId, VehicleUsage};
pub use params::{Command, LogFlight, RemoveFlight, ShowStats, ViewFlights};
pub use processor::{log_failure, CommandProcessor, CommandProcessorBuilder, MAX_FIELD_LEN};
pub use query::QueryEngine;
pub use response::{Response, ResponseBody, Visibility};
pub use store::{JsonFileStore, MemoryStore, RecordStore, SqliteStore, StoreBackend};
