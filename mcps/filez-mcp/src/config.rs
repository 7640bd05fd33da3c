//! Config file loading

use std::path::Path;

use crate::types::{Config, FilezError, FilezResult};

/// Load configuration from an optional TOML file
///
/// With no file, defaults apply. A named file that cannot be read or parsed
/// is a configuration error: the operator asked for it explicitly.
pub fn load_config(path: Option<&Path>) -> FilezResult<Config> {
    let Some(path) = path else {
        tracing::info!("Using default configuration");
        return Ok(Config::default());
    };

    let content = std::fs::read_to_string(path).map_err(|e| {
        FilezError::Configuration(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    let config = toml::from_str::<Config>(&content).map_err(|e| {
        FilezError::Configuration(format!("Failed to parse config {}: {}", path.display(), e))
    })?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
