//! Command processing for flight logs.
//!
//! The [`CommandProcessor`] is the single entry point dispatch layers call.
//! It validates arguments, talks to the [`RecordStore`] and [`QueryEngine`],
//! and hands results to the [`Renderer`]:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Command      │    │ CommandProcessor│    │  RecordStore /  │
//! │ (log/view/...)  │───▶│  (validation)   │───▶│  QueryEngine    │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │    Renderer     │───▶ Response
//!                        └─────────────────┘
//! ```
//!
//! Processing is stateless across invocations; every command reads the store
//! afresh.
//!
//! # Example
//!
//! ```rust,no_run
//! use flightlog_core::{params::ViewFlights, CommandProcessorBuilder, Owner, StoreBackend};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let processor = CommandProcessorBuilder::new()
//!     .with_backend(StoreBackend::Memory)
//!     .build()
//!     .await?;
//!
//! let caller = Owner::new("1001", "Maverick");
//! let response = processor
//!     .respond(&caller, ViewFlights::default().into())
//!     .await;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```
//!
//! [`RecordStore`]: crate::store::RecordStore
//! [`QueryEngine`]: crate::query::QueryEngine
//! [`Renderer`]: crate::display::Renderer

use std::sync::Arc;

use log::{debug, warn};

use crate::{
    display::Renderer,
    error::{FlightLogError, Result},
    models::Owner,
    params::Command,
    response::Response,
    store::RecordStore,
};

pub mod builder;
mod commands;


pub use builder::CommandProcessorBuilder;

/// Organization tag prepended to every callsign.
pub const DEFAULT_CALLSIGN_PREFIX: &str = "EVA";

/// Longest accepted value for any submitted text field, in characters.
pub const MAX_FIELD_LEN: usize = 200;

/// Log a failed command: operational faults at `warn` with the full source
/// chain, rejected requests at `debug`.
pub fn log_failure(command: &str, error: &FlightLogError) {
    if error.is_operational() {
        warn!("{command} command failed: {error:#?}");
    } else {
        debug!("{command} command rejected: {error}");
    }
}

/// Orchestrates log, view, remove, and stats commands.
pub struct CommandProcessor {
    store: Arc<dyn RecordStore>,
    renderer: Renderer,
    callsign_prefix: String,
}

impl CommandProcessor {
    pub fn new(store: Arc<dyn RecordStore>, renderer: Renderer, callsign_prefix: String) -> Self {
        Self {
            store,
            renderer,
            callsign_prefix,
        }
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn callsign_prefix(&self) -> &str {
        &self.callsign_prefix
    }

    /// Run one command on behalf of `caller`.
    ///
    /// # Errors
    ///
    /// Returns the [`FlightLogError`] describing why the command failed; no
    /// store mutation happens for validation failures.
    pub async fn execute(&self, caller: &Owner, command: Command) -> Result<Response> {
        debug!("{} command from {}", command.name(), caller.id);

        match command {
            Command::Log(params) => self.log_flight(caller, params).await,
            Command::View(params) => self.view_flights(caller, params).await,
            Command::Remove(params) => self.remove_flight(caller, params).await,
            Command::Stats(params) => self.show_stats(caller, params).await,
        }
    }

    /// Like [`execute`](Self::execute), but folds failures into the private
    /// error reply every dispatch layer shows.
    pub async fn respond(&self, caller: &Owner, command: Command) -> Response {
        let name = command.name();
        match self.execute(caller, command).await {
            Ok(response) => response,
            Err(error) => {
                log_failure(name, &error);
                Response::from_error(&error)
            }
        }
    }
}
