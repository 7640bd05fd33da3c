//! Server initialization utilities
//!
//! Provides standardized tracing setup and the transport entry points used by
//! MCP server binaries: [`serve_stdio`] and [`serve_http`].

use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use rmcp::{ServerHandler, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Path the streamable HTTP endpoint is mounted at
pub const MCP_HTTP_PATH: &str = "/mcp";

/// Initialize tracing/logging for MCP servers
///
/// Sets up logging to stderr (stdout is reserved for MCP protocol) with:
/// - Formatted output without ANSI colors (for clean logs)
/// - Environment-based filtering via RUST_LOG, which replaces the default
/// - Default log level of `info` for the specified crate when RUST_LOG is unset
///
/// Set `LOG_FORMAT=json` for structured JSON output (useful for production/log aggregation).
/// Default is human-readable text output.
///
/// # Arguments
///
/// * `crate_name` - The name of the MCP server crate (e.g., "filez_mcp")
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(crate_name, env_directives.as_deref());

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

/// Build the log filter from RUST_LOG-style directives
///
/// Empty or unparsable directives fall back to `<crate_name>=info`.
pub fn env_filter(crate_name: &str, env_directives: Option<&str>) -> EnvFilter {
    let default = || EnvFilter::new(format!("{}=info", crate_name));
    match env_directives {
        Some(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(directives).unwrap_or_else(|e| {
                eprintln!("Ignoring invalid RUST_LOG '{}': {}", directives, e);
                default()
            })
        }
        _ => default(),
    }
}

/// Serve `server` over stdio until the client disconnects
pub async fn serve_stdio<S>(server: S) -> anyhow::Result<()>
where
    S: ServerHandler,
{
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}

/// Serve MCP streamable HTTP at [`MCP_HTTP_PATH`] on `addr` until Ctrl-C
///
/// `factory` builds one server per session.
pub async fn serve_http<S, F>(factory: F, addr: &str) -> anyhow::Result<()>
where
    S: ServerHandler,
    F: Fn() -> Result<S, std::io::Error> + Send + Sync + 'static,
{
    let service = StreamableHttpService::new(
        factory,
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service(MCP_HTTP_PATH, service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("MCP server listening on {}{}", addr, MCP_HTTP_PATH);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_crate_info() {
        let filter = env_filter("filez_mcp", None);
        assert_eq!(filter.to_string(), "filez_mcp=info");
    }

    #[test]
    fn test_env_directive_kept() {
        let filter = env_filter("filez_mcp", Some("filez_mcp=debug"));
        assert_eq!(filter.to_string(), "filez_mcp=debug");
    }

    #[test]
    fn test_blank_env_uses_default() {
        let filter = env_filter("filez_mcp", Some("  "));
        assert_eq!(filter.to_string(), "filez_mcp=info");
    }
}
