//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command line flags override whatever is loaded here.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Receipt output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain receipt text
    #[default]
    Text,
    /// Structured receipt (amounts in cents)
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("TALLY_FORMAT".to_string())),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,

    /// Output format when --format is not given
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: "warn".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = CliConfig::default();

        let config = CliConfig {
            log_filter: lookup("TALLY_LOG")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_filter),

            format: match lookup("TALLY_FORMAT") {
                Some(value) => value.parse()?,
                None => defaults.format,
            },
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
