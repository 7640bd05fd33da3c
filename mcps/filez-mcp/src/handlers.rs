//! Tool handlers
//!
//! The walk itself is blocking filesystem I/O, so it runs on Tokio's blocking
//! pool. Request-level failures become tool error results; only a failed
//! worker task or serialization surfaces as an MCP protocol error.

use mcp_common::{json_success, text_success, tool_error, CallToolResult, McpResult, ResultExt};

use crate::params::{OutputFormat, WalkDirectoryParams};
use crate::service::{WalkService, ROOT_PATH};
use crate::types::{FilezError, WalkDirectoryResponse};
use crate::walker::WalkResult;

pub fn walk_error_result(err: &FilezError) -> CallToolResult {
    tool_error(format!("Error walking directory: {}", err))
}

pub async fn walk_directory(
    service: &WalkService,
    params: WalkDirectoryParams,
) -> McpResult<CallToolResult> {
    let worker = service.clone();
    let path = params.path.clone();

    let outcome = tokio::task::spawn_blocking(move || worker.walk_directory(path.as_deref()))
        .await
        .to_mcp_err()?;

    match outcome {
        Ok(result) => render(&params, result),
        Err(err) => {
            tracing::debug!(path = ?params.path, error = %err, "walk_directory failed");
            Ok(walk_error_result(&err))
        }
    }
}

fn render(params: &WalkDirectoryParams, result: WalkResult) -> McpResult<CallToolResult> {
    match params.format {
        OutputFormat::Text => Ok(text_success(result.entries.join("\n"))),
        OutputFormat::Json => {
            let response = WalkDirectoryResponse {
                path: params.path.clone().unwrap_or_else(|| ROOT_PATH.to_string()),
                total_count: result.entries.len(),
                entries: result.entries,
                skipped: result.skipped,
            };
            json_success(&response)
        }
    }
}
