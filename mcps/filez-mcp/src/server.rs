//! MCP Server implementation for the sandboxed directory walker
//!
//! This module defines the MCP server that exposes walk_directory as a tool.
//! Handler implementations are in the handlers module.

use std::path::Path;

use mcp_common::{
    async_trait, CallToolResult, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::handlers;
use crate::params::*;
use crate::resolver::RootDirectory;
use crate::service::WalkService;
use crate::types::{FilezResult, WalkOptions};

/// The filez MCP Server
#[derive(Clone)]
pub struct FilezMcpServer {
    service: WalkService,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl FilezMcpServer {
    /// Create a server confined to an already validated root
    pub fn new(root: RootDirectory, options: WalkOptions) -> Self {
        Self {
            service: WalkService::new(root, options),
            tool_router: Self::tool_router(),
        }
    }

    /// Validate `root` and create a server for it
    pub fn with_root(root: impl AsRef<Path>, options: WalkOptions) -> FilezResult<Self> {
        Ok(Self::new(RootDirectory::new(root)?, options))
    }

    pub fn service(&self) -> &WalkService {
        &self.service
    }

    #[tool(
        description = "Recursively lists all files and directories under the specified path"
    )]
    async fn walk_directory(
        &self,
        Parameters(params): Parameters<WalkDirectoryParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::walk_directory(&self.service, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for FilezMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Directory walker MCP server. walk_directory lists every file and \
                 directory under a path, where '/' is the configured root directory. \
                 Paths outside the root are rejected."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for FilezMcpServer {
    fn server_name(&self) -> &str {
        "filez"
    }

    fn server_description(&self) -> Option<&str> {
        Some("Sandboxed directory walker - recursively lists entries under a configured root.")
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "walk_directory" => {
                let params: WalkDirectoryParams = serde_json::from_value(params)?;
                self.walk_directory(Parameters(params))
                    .await
                    .map_err(Into::into)
            }
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
