//! Packaging Configuration

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Switches that change how discount packages are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagingConfig {
    /// When off, every package is expanded per unit regardless of the discount's restriction flag.
    pub performance_tweaks: bool,
}

impl PackagingConfig {
    /// Configuration with performance tweaks switched on.
    #[must_use]
    pub fn with_performance_tweaks() -> Self {
        Self {
            performance_tweaks: true,
        }
    }

    /// Parse configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is malformed or has unknown keys.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_norway::from_str(contents)?;

        debug!(
            performance_tweaks = config.performance_tweaks,
            "loaded packaging config"
        );

        Ok(config)
    }

    /// Read configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }
}
