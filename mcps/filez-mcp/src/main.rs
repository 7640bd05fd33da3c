//! Filez MCP - Sandboxed directory walker server
//!
//! Exposes a single walk_directory tool. Every request is confined to the
//! root directory given on the command line.

use clap::Parser;

use filez_mcp::cli::Cli;
use filez_mcp::config::load_config;
use filez_mcp::{FilezMcpServer, RootDirectory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    mcp_common::init_tracing("filez_mcp")?;

    let config = cli.apply(load_config(cli.config.as_deref())?);

    // Fail before serving if the root is unusable
    let root = RootDirectory::new(&cli.root_directory)?;
    tracing::info!(root = %root.path().display(), "Root directory configured");

    let server = FilezMcpServer::new(root, config.walk.clone());

    if cli.stdio {
        tracing::info!("Starting filez MCP server with stdio transport");
        mcp_common::serve_stdio(server).await
    } else {
        let addr = format!("{}:{}", config.http.host, config.http.port);
        tracing::info!("Starting filez MCP server with HTTP transport on {}", addr);
        mcp_common::serve_http(move || Ok(server.clone()), &addr).await
    }
}
