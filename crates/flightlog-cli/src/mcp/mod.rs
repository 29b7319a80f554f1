//! MCP server implementation for FlightLog
//!
//! Exposes the flight log commands as Model Context Protocol tools over
//! stdio, so AI assistants can log and browse flights on behalf of the
//! configured caller.

use std::sync::Arc;

use anyhow::Result;
use flightlog_core::{CommandProcessor, Owner};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{LogFlight, McpResult, RemoveFlight, ShowStats, ViewFlights};

/// MCP server for FlightLog
#[derive(Clone)]
pub struct FlightLogMcpServer {
    processor: Arc<Mutex<CommandProcessor>>,
    caller: Owner,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FlightLogMcpServer {
    /// Create a new server acting on behalf of `caller`
    pub fn new(processor: CommandProcessor, caller: Owner) -> Self {
        Self {
            processor: Arc::new(Mutex::new(processor)),
            caller,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.processor.clone(), self.caller.clone())
    }

    #[tool(
        name = "log_flight",
        description = "Log a completed flight. Requires origin, destination, vehicle_type (aircraft), callsign (without the organization tag, which is added automatically) and passengers. Optional: duration (defaults to N/A), image_url, and pilot {id, label} to log for someone other than the caller. Returns the logged flight card."
    )]
    async fn log_flight(&self, params: Parameters<LogFlight>) -> McpResult {
        self.handlers().log_flight(params).await
    }

    #[tool(
        name = "view_flights",
        description = "List a pilot's flights, oldest first, numbered from 1. Defaults to the caller; pass pilot {id, label} to view someone else's records. The numbers shown are the indexes remove_flight expects."
    )]
    async fn view_flights(&self, params: Parameters<ViewFlights>) -> McpResult {
        self.handlers().view_flights(params).await
    }

    #[tool(
        name = "remove_flight",
        description = "Remove one flight by the 1-based index shown by view_flights. Call view_flights first to confirm the number. Optional pilot {id, label} selects whose records to act on."
    )]
    async fn remove_flight(&self, params: Parameters<RemoveFlight>) -> McpResult {
        self.handlers().remove_flight(params).await
    }

    #[tool(
        name = "flight_stats",
        description = "Summarize a pilot's flights: total flights, unique airports, total passengers, and most used aircraft. Defaults to the caller."
    )]
    async fn flight_stats(&self, params: Parameters<ShowStats>) -> McpResult {
        self.handlers().flight_stats(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FlightLogMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "flightlog".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"FlightLog keeps a per-pilot record of completed flights.

## Tools
- `log_flight`: record a flight (route, aircraft, callsign, passengers)
- `view_flights`: list flights oldest first with 1-based numbers
- `remove_flight`: delete the flight at a number shown by `view_flights`
- `flight_stats`: totals, unique airports, and most used aircraft

Every tool acts on the configured caller unless a `pilot` is given. Indexes
shift after a removal, so view again before removing another flight."#
                .to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: FlightLogMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting FlightLog MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
