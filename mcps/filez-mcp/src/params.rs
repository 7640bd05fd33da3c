//! Parameter types for filez MCP tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct WalkDirectoryParams {
    #[schemars(description = "Directory path to walk (use '/' for root directory)")]
    #[serde(default)]
    pub path: Option<String>,

    #[schemars(description = "Output format: 'text' (one path per line, default) or 'json'")]
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
