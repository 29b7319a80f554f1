//! FlightLog CLI Application
//!
//! Command-line interface and MCP server for the flight log.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use flightlog_core::{params::Command, CommandProcessorBuilder};
use log::info;
use mcp::{run_stdio_server, FlightLogMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let caller = args.caller();

    let mut builder = CommandProcessorBuilder::new()
        .with_backend(args.store)
        .with_database_path(args.database_file);
    if let Some(prefix) = args.callsign_prefix {
        builder = builder.with_callsign_prefix(prefix);
    }
    let processor = builder
        .build()
        .await
        .context("Failed to initialize flight log")?;

    info!("FlightLog started for {}", caller.id);

    let command = match args.command {
        Log(log) => Command::Log(log.into()),
        View(pilot) => Command::View(pilot.into()),
        Remove(remove) => Command::Remove(remove.into()),
        Stats(pilot) => Command::Stats(pilot.into()),
        Serve => {
            info!("Starting FlightLog MCP server");
            run_stdio_server(FlightLogMcpServer::new(processor, caller))
                .await
                .context("MCP server failed")?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    Cli::new(processor, TerminalRenderer::new(!args.no_color), caller)
        .run(command)
        .await
}
