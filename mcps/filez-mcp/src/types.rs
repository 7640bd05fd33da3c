//! Type definitions for filez MCP

use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration Types
// ============================================================================

/// Configuration loaded from the optional TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub walk: WalkOptions,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Traversal policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkOptions {
    /// Descend into symlinked directories whose target stays inside the root
    #[serde(default)]
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Structured response for walk_directory (`format = "json"`)
#[derive(Debug, Serialize, Deserialize)]
pub struct WalkDirectoryResponse {
    pub path: String,
    pub entries: Vec<String>,
    pub total_count: usize,
    /// Entries dropped because they could not be read
    pub skipped: usize,
}

// ============================================================================
// Error Types
// ============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilezError {
    #[error("Config error: {0}")]
    Configuration(String),

    #[error("path is outside of allowed root directory: {0}")]
    PathOutsideRoot(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("failed to resolve absolute path: {0}")]
    Resolution(String),

    #[error("cannot read {path}: {source}")]
    WalkRootUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("root directory vanished: {0}")]
    RootVanished(String),
}

pub type FilezResult<T> = Result<T, FilezError>;
