//! Filez MCP Library
//!
//! Sandboxed directory walker. Given a root directory fixed at startup, lists
//! every file and directory under a requested path without ever leaving the
//! root.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use filez_mcp::{RootDirectory, WalkOptions, WalkService};
//!
//! let service = WalkService::new(RootDirectory::new("/srv/data")?, WalkOptions::default());
//! let result = service.walk_directory(Some("/reports"))?;
//! for path in result.entries {
//!     println!("{}", path);
//! }
//! ```
//!
//! # Usage as Binary
//!
//! `filez-mcp -s /srv/data` serves over stdio; without `-s` it serves
//! streamable HTTP on `$PORT` (default 5001) at `/mcp`.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod params;
pub mod resolver;
pub mod server;
pub mod service;
pub mod types;
pub mod walker;

// Re-export main server type
pub use server::FilezMcpServer;

pub use params::*;
pub use resolver::{PathResolver, ResolvedPath, RootDirectory};
pub use service::WalkService;
pub use types::{Config, FilezError, FilezResult, WalkOptions};
pub use walker::{TreeWalker, WalkResult};
