//! Part codec stage configuration

use sluice_config::ProcessorConfig;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Scheme used when none is configured
pub const DEFAULT_SCHEME: &str = "base64";

/// Configuration for an encode or decode stage
///
/// Immutable once the stage is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartCodecConfig {
    /// Codec scheme name, resolved against a `CodecRegistry`
    pub scheme: String,

    /// Part indices to transform, taken verbatim
    ///
    /// Order and duplicates are kept. Empty means every part. Indices are
    /// checked against each message when it is processed.
    pub parts: Vec<i64>,

    /// A disabled stage forwards messages untouched
    pub enabled: bool,
}

impl Default for PartCodecConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            parts: Vec::new(),
            enabled: true,
        }
    }
}

impl PartCodecConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the codec scheme
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the target part indices
    pub fn with_parts(mut self, parts: impl Into<Vec<i64>>) -> Self {
        self.parts = parts.into();
        self
    }

    /// Enable or disable the stage
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.scheme.is_empty() {
            return Err("scheme must not be empty".into());
        }
        Ok(())
    }
}

impl TryFrom<&ProcessorConfig> for PartCodecConfig {
    type Error = String;

    fn try_from(config: &ProcessorConfig) -> Result<Self, Self::Error> {
        let mut codec_config = PartCodecConfig {
            enabled: config.enabled,
            ..PartCodecConfig::default()
        };

        if let Some(value) = config.options.get("scheme") {
            codec_config.scheme = value
                .as_str()
                .ok_or("scheme must be a string")?
                .to_string();
        }

        if config.options.contains_key("parts") {
            codec_config.parts = config
                .get_int_array("parts")
                .ok_or("parts must be an array of integers")?;
        }

        codec_config.validate()?;
        Ok(codec_config)
    }
}
