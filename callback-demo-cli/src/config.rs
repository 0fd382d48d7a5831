//! Configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::OutputFormat;

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Selectors dispatched in order
    #[serde(default = "default_selectors")]
    pub selectors: Vec<i64>,
    /// Print the value captured from inside the callback after each dispatch
    #[serde(default)]
    pub show_captured: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            selectors: default_selectors(),
            show_captured: false,
        }
    }
}

/// Error, success, then a value with no handler
fn default_selectors() -> Vec<i64> {
    vec![1, 2, 9]
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Semantic problems in an otherwise well-formed config
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No selectors configured: [run] selectors must not be empty")]
    NoSelectors,
}

impl AppConfig {
    /// Check the config can drive a run
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.run.selectors.is_empty() {
            return Err(ConfigError::NoSelectors);
        }
        Ok(())
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    config
        .validate()
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(config)
}
