//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading, templating or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file '{path}': {source}")]
    IoError {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Strict env mode - a placeholder without default names an unset variable
    #[error("environment variable '{name}' is unset and has no default (strict env mode)")]
    EnvVarUnset {
        /// Name of the unset variable
        name: String,
    },

    /// Validation error - required field missing
    #[error("{component} '{name}' is missing required field '{field}'")]
    MissingField {
        /// Component type (e.g., "processor")
        component: &'static str,
        /// Name of the component
        name: String,
        /// Missing field name
        field: &'static str,
    },

    /// Validation error - invalid value
    #[error("{component} '{name}' has invalid {field}: {message}")]
    InvalidValue {
        /// Component type
        component: &'static str,
        /// Name of the component
        name: String,
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// Create an EnvVarUnset error
    pub fn env_var_unset(name: impl Into<String>) -> Self {
        Self::EnvVarUnset { name: name.into() }
    }

    /// Create a MissingField error
    pub fn missing_field(
        component: &'static str,
        name: impl Into<String>,
        field: &'static str,
    ) -> Self {
        Self::MissingField {
            component,
            name: name.into(),
            field,
        }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(
        component: &'static str,
        name: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            component,
            name: name.into(),
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_unset_error() {
        let err = ConfigError::env_var_unset("FOO");
        assert!(err.to_string().contains("'FOO'"));
        assert!(err.to_string().contains("strict env mode"));
    }

    #[test]
    fn test_missing_field_error() {
        let err = ConfigError::missing_field("processor", "encode", "type");
        assert!(err.to_string().contains("processor"));
        assert!(err.to_string().contains("encode"));
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::invalid_value(
            "processor",
            "encode",
            "parts",
            "must be an array of integers",
        );
        assert!(err.to_string().contains("encode"));
        assert!(err.to_string().contains("parts"));
        assert!(err.to_string().contains("array of integers"));
    }

    #[test]
    fn test_io_error_display() {
        let err = ConfigError::IoError {
            path: "missing.toml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.toml"));
    }
}
