//! Option-document parsing
//!
//! Transformation options can be supplied programmatically or parsed from an
//! already-loaded YAML or JSON document. Locating and reading that document
//! (CLI flags, config files, environment) is the caller's concern.

use crate::transform::TransformOptions;

/// Error while parsing an option document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid YAML options: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),
}

impl TransformOptions {
    /// Parses options from a YAML document.
    pub fn from_yaml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(document)?)
    }

    /// Parses options from a JSON document.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}
