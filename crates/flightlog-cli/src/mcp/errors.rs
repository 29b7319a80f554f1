//! Error handling utilities for MCP server

use flightlog_core::{log_failure, FlightLogError, Response};
use rmcp::model::{CallToolResult, Content};

/// Helper to turn a failed command into a tool error result
///
/// The model sees the same message a CLI user would; internals stay in the
/// log.
pub fn to_tool_error(tool: &str, error: &FlightLogError) -> CallToolResult {
    log_failure(tool, error);
    CallToolResult::error(vec![Content::text(
        Response::from_error(error).to_string(),
    )])
}
