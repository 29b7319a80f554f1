use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flightlog_core::{Owner, StoreBackend};

use crate::cli::{LogArgs, PilotArgs, RemoveArgs};

/// Record, browse, remove, and summarize flight logs
///
/// FlightLog keeps a per-pilot record of completed flights. Every command acts
/// on behalf of a caller (set with --caller or FLIGHTLOG_CALLER) and, unless
/// --pilot is given, on the caller's own records. The same commands are
/// available to AI assistants through the MCP server started by `serve`.
#[derive(Parser)]
#[command(version, about, name = "flightlog")]
pub struct Args {
    /// Path to the data file. Defaults to $XDG_DATA_HOME/flightlog/flightlog.db
    /// (flightlog.json for the json store)
    #[arg(long, global = true, env = "FLIGHTLOG_DATABASE")]
    pub database_file: Option<PathBuf>,

    /// Storage backend: sqlite, json, or memory
    #[arg(long, global = true, env = "FLIGHTLOG_STORE", default_value = "sqlite")]
    pub store: StoreBackend,

    /// Identity the commands run as. Defaults to $USER
    #[arg(long, global = true, env = "FLIGHTLOG_CALLER")]
    pub caller: Option<String>,

    /// Display label for the caller
    #[arg(long, global = true, env = "FLIGHTLOG_CALLER_LABEL")]
    pub caller_label: Option<String>,

    /// Organization tag prepended to every logged callsign
    #[arg(long, global = true, env = "FLIGHTLOG_CALLSIGN_PREFIX")]
    pub callsign_prefix: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// The owner every command runs as.
    pub fn caller(&self) -> Owner {
        let id = self
            .caller
            .clone()
            .filter(|id| !id.trim().is_empty())
            .or_else(|| std::env::var("USER").ok().filter(|u| !u.is_empty()))
            .unwrap_or_else(|| "local".to_string());
        let label = self.caller_label.clone().unwrap_or_default();
        Owner::new(id, label)
    }
}

/// Available commands for the FlightLog CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Log a completed flight
    #[command(alias = "l")]
    Log(LogArgs),
    /// List a pilot's flights, oldest first
    #[command(aliases = ["v", "ls"])]
    View(PilotArgs),
    /// Remove a flight by its position in `view`
    #[command(aliases = ["rm", "delete"])]
    Remove(RemoveArgs),
    /// Show statistics over a pilot's flights
    #[command(alias = "s")]
    Stats(PilotArgs),
    /// Start the MCP server
    Serve,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_log_command() {
        let args = Args::try_parse_from([
            "flightlog",
            "--caller",
            "1001",
            "log",
            "--from",
            "TPE",
            "--to",
            "NRT",
            "--aircraft",
            "B777",
            "--callsign",
            "12",
            "--passengers",
            "250",
        ])
        .expect("log arguments should parse");

        assert_eq!(args.caller().id, "1001");
        assert_eq!(args.store, StoreBackend::Sqlite);
        let Commands::Log(log) = args.command else {
            panic!("expected the log command");
        };
        assert_eq!(log.from, "TPE");
        assert_eq!(log.passengers, "250");
        assert!(log.duration.is_none());
    }

    #[test]
    fn test_parse_store_backend() {
        let args = Args::try_parse_from(["flightlog", "--store", "json", "view"])
            .expect("store should parse");
        assert_eq!(args.store, StoreBackend::JsonFile);

        assert!(Args::try_parse_from(["flightlog", "--store", "cloud", "view"]).is_err());
    }

    #[test]
    fn test_remove_accepts_negative_index() {
        let args = Args::try_parse_from(["flightlog", "remove", "-1"])
            .expect("negative index should parse");
        let Commands::Remove(remove) = args.command else {
            panic!("expected the remove command");
        };
        assert_eq!(remove.index, -1);
    }
}
