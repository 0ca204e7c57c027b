//! `[log]` section
//!
//! Stdout carries processed messages, so diagnostics go to stderr unless the
//! config says otherwise.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Verbosity threshold for diagnostics
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    /// Shows every part that failed to transform
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// All levels, most verbose first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Name as accepted by `tracing_subscriber::EnvFilter`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("unknown log level '{s}', expected trace, debug, info, warn or error")
            })
    }
}

/// How log lines are rendered
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Console,
    /// One JSON object per line
    Json,
}

/// Stream diagnostics are written to
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Shares stdout with forwarded messages
    Stdout,
    #[default]
    Stderr,
}

/// Logging configuration
///
/// ```toml
/// [log]
/// level = "${SLUICE_LOG_LEVEL:info}"
/// format = "json"
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
}

impl LogConfig {
    /// Replace the configured level, e.g. from a command-line flag
    pub fn with_level(mut self, level: Option<LogLevel>) -> Self {
        if let Some(level) = level {
            self.level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_log_to_stderr() {
        let config: LogConfig = toml::from_str("").unwrap();
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Console);
        assert_eq!(config.output, LogOutput::Stderr);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: LogConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.output, LogOutput::Stderr);
    }

    #[test]
    fn test_output_stdout() {
        let config: LogConfig = toml::from_str("output = \"stdout\"").unwrap();
        assert_eq!(config.output, LogOutput::Stdout);
    }

    #[test]
    fn test_level_names_round_trip() {
        for level in LogLevel::ALL {
            let config: LogConfig = toml::from_str(&format!("level = \"{level}\"")).unwrap();
            assert_eq!(config.level, level);
            assert_eq!(level.as_str().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_level_parse_ignores_case() {
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().unwrap_err().contains("'loud'"));
    }

    #[test]
    fn test_levels_are_ordered_by_verbosity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_unknown_level_rejected_in_toml() {
        assert!(toml::from_str::<LogConfig>("level = \"loud\"").is_err());
    }

    #[test]
    fn test_with_level_override() {
        let config = LogConfig::default();
        assert_eq!(config.with_level(None).level, LogLevel::Info);
        assert_eq!(config.with_level(Some(LogLevel::Warn)).level, LogLevel::Warn);
    }
}
