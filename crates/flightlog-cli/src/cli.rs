//! Command-line argument wrappers and the command runner
//!
//! Clap-specific argument structures live here and convert into the core
//! parameter types, keeping the core free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → CommandProcessor → Response
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use flightlog_core::{
    params::{Command, LogFlight, RemoveFlight, ShowStats, ViewFlights},
    log_failure, CommandProcessor, Owner, Response,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Selects whose records a command acts on
#[derive(Args, Debug, Default)]
pub struct PilotArgs {
    /// Act on this pilot's records instead of the caller's
    #[arg(long)]
    pub pilot: Option<String>,
    /// Display label for --pilot
    #[arg(long, requires = "pilot")]
    pub pilot_label: Option<String>,
}

impl PilotArgs {
    fn into_owner(self) -> Option<Owner> {
        self.pilot
            .map(|id| Owner::new(id, self.pilot_label.unwrap_or_default()))
    }
}

impl From<PilotArgs> for ViewFlights {
    fn from(val: PilotArgs) -> Self {
        ViewFlights {
            pilot: val.into_owner(),
        }
    }
}

impl From<PilotArgs> for ShowStats {
    fn from(val: PilotArgs) -> Self {
        ShowStats {
            pilot: val.into_owner(),
        }
    }
}

/// Log a completed flight
///
/// All route fields are required. The callsign is given without the
/// organization tag, which is added automatically.
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Departure airport
    #[arg(long)]
    pub from: String,
    /// Arrival airport
    #[arg(long)]
    pub to: String,
    /// Aircraft type
    #[arg(long)]
    pub aircraft: String,
    /// Callsign without the organization tag
    #[arg(long)]
    pub callsign: String,
    /// Number of passengers
    #[arg(long)]
    pub passengers: String,
    /// Flight time, shown as N/A when omitted
    #[arg(long)]
    pub duration: Option<String>,
    /// URL of an image to attach
    #[arg(long)]
    pub image: Option<String>,
    #[command(flatten)]
    pub pilot: PilotArgs,
}

impl From<LogArgs> for LogFlight {
    fn from(val: LogArgs) -> Self {
        LogFlight {
            origin: val.from,
            destination: val.to,
            vehicle_type: val.aircraft,
            callsign: val.callsign,
            passengers: val.passengers,
            duration: val.duration,
            image_url: val.image,
            pilot: val.pilot.into_owner(),
        }
    }
}

/// Remove a flight by the number `view` shows next to it
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// 1-based position of the flight in `view`
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
    #[command(flatten)]
    pub pilot: PilotArgs,
}

impl From<RemoveArgs> for RemoveFlight {
    fn from(val: RemoveArgs) -> Self {
        RemoveFlight {
            index: val.index,
            pilot: val.pilot.into_owner(),
        }
    }
}

/// Runs flight log commands for one caller and prints the replies
pub struct Cli {
    processor: CommandProcessor,
    renderer: TerminalRenderer,
    caller: Owner,
}

impl Cli {
    pub fn new(processor: CommandProcessor, renderer: TerminalRenderer, caller: Owner) -> Self {
        Self {
            processor,
            renderer,
            caller,
        }
    }

    /// Execute a command, printing the reply to stdout or the error reply to
    /// stderr.
    pub async fn run(&self, command: Command) -> Result<ExitCode> {
        let name = command.name();

        match self.processor.execute(&self.caller, command).await {
            Ok(response) => {
                self.render(&response)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                log_failure(name, &error);
                self.renderer
                    .render_error(&Response::from_error(&error).to_string());
                Ok(ExitCode::FAILURE)
            }
        }
    }

    fn render(&self, response: &Response) -> Result<()> {
        debug!("{:?} reply", response.visibility);
        self.renderer.render(&response.to_string())
    }
}
