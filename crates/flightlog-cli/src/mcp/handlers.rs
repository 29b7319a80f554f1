//! MCP tool handlers implementation

use std::sync::Arc;

use flightlog_core::{params as core, params::Command, CommandProcessor, Owner};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_tool_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types only derive JsonSchema behind the core `schema`
// feature. The transparent wrapper adds what rmcp needs for tool arguments
// while deserialization passes straight through to the wrapped type.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub type LogFlight = McpParams<core::LogFlight>;
pub type ViewFlights = McpParams<core::ViewFlights>;
pub type RemoveFlight = McpParams<core::RemoveFlight>;
pub type ShowStats = McpParams<core::ShowStats>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    processor: Arc<Mutex<CommandProcessor>>,
    caller: Owner,
}

impl McpHandlers {
    pub fn new(processor: Arc<Mutex<CommandProcessor>>, caller: Owner) -> Self {
        Self { processor, caller }
    }

    pub async fn log_flight(&self, Parameters(params): Parameters<LogFlight>) -> McpResult {
        debug!("log_flight: {params:?}");
        self.run("log_flight", params.into_inner().into()).await
    }

    pub async fn view_flights(&self, Parameters(params): Parameters<ViewFlights>) -> McpResult {
        debug!("view_flights: {params:?}");
        self.run("view_flights", params.into_inner().into()).await
    }

    pub async fn remove_flight(&self, Parameters(params): Parameters<RemoveFlight>) -> McpResult {
        debug!("remove_flight: {params:?}");
        self.run("remove_flight", params.into_inner().into()).await
    }

    pub async fn flight_stats(&self, Parameters(params): Parameters<ShowStats>) -> McpResult {
        debug!("flight_stats: {params:?}");
        self.run("flight_stats", params.into_inner().into()).await
    }

    async fn run(&self, tool: &str, command: Command) -> McpResult {
        let processor = self.processor.lock().await;

        match processor.execute(&self.caller, command).await {
            Ok(response) => Ok(CallToolResult::success(vec![Content::text(
                response.to_string(),
            )])),
            Err(error) => Ok(to_tool_error(tool, &error)),
        }
    }
}
