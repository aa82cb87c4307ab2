//! Output configuration

use serde::Deserialize;

/// How the console renders the assessment result
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    /// Result rendering format
    #[serde(default)]
    pub format: OutputFormat,
}
