//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! transport. Tests use it to drive a server end to end with plain JSON.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use filez_mcp::{FilezMcpServer, WalkOptions};
//!
//! let server = FilezMcpServer::with_root("/srv/data", WalkOptions::default())?;
//! let result = server
//!     .call_tool("walk_directory", serde_json::json!({ "path": "/" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Parameters did not deserialize into the tool's parameter type
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// The tool returned a protocol-level error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync` so tool calls can run from several
/// tasks at once. Servers built on `#[tool_router]` list their tools through
/// `self.tool_router.list_all()` and dispatch `call_tool` by name.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name as used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All tools, with names, descriptions, and input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool by name
    ///
    /// Fails with [`EmbeddableError::ToolNotFound`] for unknown names and
    /// [`EmbeddableError::SerdeError`] when `params` does not match the tool's
    /// parameter type. A tool that fails at its own level still returns `Ok`
    /// with `is_error` set on the result.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
