//! MCP Common - Shared utilities for MCP servers
//!
//! This crate provides common functionality used by the MCP servers in this
//! workspace:
//!
//! - **Initialization**: tracing setup plus [`serve_stdio`] and [`serve_http`]
//!   transport entry points
//! - **Results**: Helper functions for creating `CallToolResult` responses
//! - **Errors**: Traits for converting errors to MCP-compatible format
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{init_tracing, serve_stdio, text_success};
//!
//! init_tracing("my_mcp")?;
//! serve_stdio(MyServer::new()).await?;
//!
//! // In tool implementations
//! fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     Ok(text_success("done"))
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, IntoMcpError, McpResult, ResultExt};
pub use init::{env_filter, init_tracing, serve_http, serve_stdio, MCP_HTTP_PATH};
pub use result::{json_success, text_success, tool_error};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
