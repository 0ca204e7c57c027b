//! Sluice Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! An empty config runs a base64 encode stage over every part.
//!
//! # Loading
//!
//! Files are loaded in two steps: environment placeholders (`${NAME}`,
//! `${NAME:default}`) are substituted in the raw text, then the result is
//! parsed and validated.
//!
//! ```
//! use sluice_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[processor]\ntype = \"encode\"").unwrap();
//! assert_eq!(config.processor.processor_type, "encode");
//! ```
//!
//! # Example Config
//!
//! ```toml
//! [log]
//! level = "${LOG_LEVEL:info}"
//!
//! [metrics]
//! enabled = true
//!
//! [processor]
//! type = "encode"
//! scheme = "base64"
//! parts = [0, 2]
//! ```

mod env;
mod error;
mod logging;
mod metrics;
mod processor;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use env::{replace_env_vars, replace_env_vars_with};
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel, LogOutput};
pub use metrics::MetricsConfig;
pub use processor::{
    DEFAULT_PROCESSOR_TYPE, KNOWN_PROCESSOR_TYPES, ProcessorConfig, is_known_processor_type,
};

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,

    /// Metrics reporting configuration
    pub metrics: MetricsConfig,

    /// The processor stage to run
    pub processor: ProcessorConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Environment placeholders are substituted before parsing. With
    /// `strict_env` set, a placeholder without a default that names an
    /// unset variable fails the load.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, templating fails in strict
    /// mode, or the result is invalid TOML or fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P, strict_env: bool) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_template(&contents, strict_env)
    }

    /// Substitute environment placeholders in `contents`, then parse it
    pub fn from_template(contents: &str, strict_env: bool) -> Result<Self> {
        let templated = replace_env_vars(contents, strict_env)?;
        Self::parse(&templated)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Counter namespace for the configured processor
    pub fn metrics_namespace(&self) -> String {
        self.metrics.namespace(&self.processor.processor_type)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
