//! Error handling utilities for MCP servers
//!
//! Provides traits and types for consistent error handling across MCP servers.

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Trait for converting errors into MCP-compatible errors
///
/// Implement this trait for external error types to enable `to_mcp_err()`
/// in tool implementations.
pub trait IntoMcpError {
    /// Convert this error into an MCP error
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for tokio::task::JoinError {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("Worker task failed: {}", self), None)
    }
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {}", self), None)
    }
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self.to_string(), None)
    }
}

impl IntoMcpError for String {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self, None)
    }
}

/// Extension trait for Result types to convert to MCP errors
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::ResultExt;
///
/// let listing = tokio::task::spawn_blocking(move || walk(&root))
///     .await
///     .to_mcp_err()?;
/// ```
pub trait ResultExt<T> {
    /// Convert the error to an MCP error
    fn to_mcp_err(self) -> Result<T, McpError>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> Result<T, McpError> {
        self.map_err(|e| e.into_mcp_error())
    }
}

/// Create an internal error with a message
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_mcp_error_string() {
        let err = "test error".to_string().into_mcp_error();
        assert!(err.message.contains("test error"));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<(), String> = Err("walk failed".to_string());
        let mcp_result = result.to_mcp_err();
        assert!(mcp_result.unwrap_err().message.contains("walk failed"));
    }

    #[tokio::test]
    async fn test_join_error_converted() {
        let handle = tokio::task::spawn(async {
            if true {
                panic!("boom");
            }
        });
        let result: Result<(), _> = handle.await;
        let err = result.to_mcp_err().unwrap_err();
        assert!(err.message.contains("Worker task failed"));
    }

    #[test]
    fn test_internal_error() {
        let err = internal_error("test");
        assert!(err.message.contains("test"));
    }
}
