//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

use crate::types::Config;

#[derive(Parser, Debug)]
#[command(name = "filez-mcp")]
#[command(about = "Directory walker MCP server confined to a root directory")]
#[command(version)]
pub struct Cli {
    /// Root directory exposed as '/'
    pub root_directory: PathBuf,

    /// Use stdio transport instead of HTTP
    #[arg(short = 's', long)]
    pub stdio: bool,

    /// HTTP port (default: from config or 5001)
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// HTTP bind address (default: from config or 0.0.0.0)
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Path to a TOML config file
    #[arg(long, env = "FILEZ_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Descend into symlinked directories that stay inside the root
    #[arg(long)]
    pub follow_symlinks: bool,
}

impl Cli {
    /// Layer command-line overrides on top of file configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if let Some(host) = &self.host {
            config.http.host = host.clone();
        }
        if self.follow_symlinks {
            config.walk.follow_symlinks = true;
        }
        config
    }
}
