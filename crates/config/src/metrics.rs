//! Metrics reporting configuration
//!
//! Stage counters are always collected; this section controls whether the
//! CLI reports them and under which name prefix.

use serde::Deserialize;

/// Metrics configuration
///
/// # Example
///
/// ```toml
/// [metrics]
/// enabled = true
/// prefix = "processor"
/// ```
///
/// With the defaults an `encode` stage reports `processor.encode.count`,
/// `processor.encode.sent`, and so on.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MetricsConfig {
    /// Print a counter snapshot when the run ends
    /// Default: false
    pub enabled: bool,

    /// Prefix placed before the processor type in counter names
    /// Default: "processor"
    pub prefix: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: "processor".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Counter namespace for a processor of the given type
    pub fn namespace(&self, processor_type: &str) -> String {
        if self.prefix.is_empty() {
            processor_type.to_string()
        } else {
            format!("{}.{}", self.prefix, processor_type)
        }
    }
}
