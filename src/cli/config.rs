//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every run can live in a file:
//!
//! ```toml
//! # gcquant.toml
//! [integration]
//! tolerance = 0.5
//! max_bound = 0
//! include_shared = true
//!
//! [export]
//! minutes = true
//! ```
//!
//! Flags given on the command line take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use gcquant::peak::IntegrationConfig;

/// Root configuration structure for gcquant.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Peak integration settings.
    #[serde(default)]
    pub integration: IntegrationSection,

    /// Chromatogram export settings.
    #[serde(default)]
    pub export: ExportSection,
}

/// Configuration for the quantify command.
#[derive(Debug, Default, Deserialize)]
pub struct IntegrationSection {
    /// Boundary tolerance in percent.
    pub tolerance: Option<f64>,

    /// Maximum points on each side of the apex.
    pub max_bound: Option<usize>,

    /// Include shared boundaries in the median width.
    pub include_shared: Option<bool>,
}

/// Configuration for the export-ic command.
#[derive(Debug, Default, Deserialize)]
pub struct ExportSection {
    /// Write times in minutes.
    pub minutes: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file if one was given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Integration settings with file values over built-in defaults.
    pub fn integration(&self) -> IntegrationConfig {
        let defaults = IntegrationConfig::default();
        IntegrationConfig {
            tolerance: self.integration.tolerance.unwrap_or(defaults.tolerance),
            max_bound: self.integration.max_bound.unwrap_or(defaults.max_bound),
            include_shared: self
                .integration
                .include_shared
                .unwrap_or(defaults.include_shared),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [integration]
            tolerance = 1.5
            max_bound = 20
            include_shared = false

            [export]
            minutes = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.integration.tolerance, Some(1.5));
        assert_eq!(config.integration.max_bound, Some(20));
        assert_eq!(config.integration.include_shared, Some(false));
        assert_eq!(config.export.minutes, Some(true));

        let integration = config.integration();
        assert_eq!(integration.tolerance, 1.5);
        assert!(!integration.include_shared);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [integration]
            max_bound = 10
        "#;

        let config = Config::from_str(toml).unwrap();
        let integration = config.integration();
        assert_eq!(integration.max_bound, 10);
        assert_eq!(integration.tolerance, 0.5);
        assert!(integration.include_shared);
        assert_eq!(config.export.minutes, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.integration.tolerance, None);
        assert_eq!(config.integration(), IntegrationConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[integration]\ntolerance = \"high\"\n").is_err());
    }
}
