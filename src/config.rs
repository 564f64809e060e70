//! File-based configuration.
//!
//! A small TOML file can pin the run parameters for CI invocations; CLI
//! flags override anything the file sets.

use crate::validator::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file was not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
///
/// ```toml
/// [validation]
/// sample_count = 1000
/// sample_length = 32
/// significance = "0.01"
///
/// [output]
/// json = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Emit the report as JSON instead of the text rendering.
    #[serde(default)]
    pub json: bool,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Significance;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.validation.sample_count, 1000);
        assert_eq!(config.validation.sample_length, 32);
        assert!(!config.output.json);
    }

    #[test]
    fn test_parse_full_file() {
        let toml = r#"
            [validation]
            sample_count = 200
            sample_length = 16
            significance = "0.05"

            [output]
            json = true
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.validation.sample_count, 200);
        assert_eq!(config.validation.sample_length, 16);
        assert_eq!(config.validation.significance, Significance::FivePercent);
        assert!(config.output.json);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.validation.sample_count, 1000);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        assert!(matches!(
            FileConfig::from_file("/nonexistent/entropy.toml"),
            Err(ConfigError::FileReadError(_))
        ));
    }
}
