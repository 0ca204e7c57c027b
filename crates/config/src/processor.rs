//! Processor configuration
//!
//! Names the processor type to run and carries its type-specific options.
//! The options are interpreted by the processor's own config type in
//! `sluice-transform`.
//!
//! # Example
//!
//! ```toml
//! [processor]
//! type = "encode"
//! scheme = "base64"
//! parts = [0, 2]
//! ```
//!
//! `enabled = false` keeps the stage configured but inactive: messages pass
//! through it unchanged.

use serde::Deserialize;
use std::collections::HashMap;

/// Processor type used when none is configured
pub const DEFAULT_PROCESSOR_TYPE: &str = "encode";

/// Known processor types for validation
pub const KNOWN_PROCESSOR_TYPES: &[&str] = &["encode", "decode"];

/// Check if a processor type is known
pub fn is_known_processor_type(processor_type: &str) -> bool {
    KNOWN_PROCESSOR_TYPES.contains(&processor_type)
}

/// Configuration for a single processor instance
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProcessorConfig {
    /// Processor type (e.g., "encode", "decode")
    #[serde(rename = "type", default = "default_processor_type")]
    pub processor_type: String,

    /// Whether this processor is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Type-specific configuration options
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

fn default_processor_type() -> String {
    DEFAULT_PROCESSOR_TYPE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::encode()
    }
}

impl ProcessorConfig {
    /// Create a config for the given processor type with no options
    pub fn new(processor_type: impl Into<String>) -> Self {
        Self {
            processor_type: processor_type.into(),
            enabled: true,
            options: HashMap::new(),
        }
    }

    /// Create a new encode processor config with defaults
    pub fn encode() -> Self {
        Self::new("encode")
    }

    /// Create a new decode processor config with defaults
    pub fn decode() -> Self {
        Self::new("decode")
    }

    /// Enable or disable the processor
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set an option
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Get an option as string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_str())
    }

    /// Get an option as i64
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.options.get(key).and_then(|v| v.as_integer())
    }

    /// Get an option as bool
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.options.get(key).and_then(|v| v.as_bool())
    }

    /// Get an array option as Vec<i64>
    ///
    /// Returns `None` if the option is missing, is not an array, or holds a
    /// non-integer element.
    pub fn get_int_array(&self, key: &str) -> Option<Vec<i64>> {
        self.options
            .get(key)
            .and_then(|v| v.as_array())
            .and_then(|arr| arr.iter().map(|v| v.as_integer()).collect())
    }
}
