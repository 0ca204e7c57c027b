//! Transform error types
//!
//! Errors that can occur while building or running a stage.

use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Errors that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// No codec is registered under the configured scheme name
    #[error("unknown scheme '{scheme}', available: [{available}]")]
    UnknownScheme {
        /// The scheme that failed to resolve
        scheme: String,
        /// Comma-separated list of registered schemes
        available: String,
    },

    /// A single part could not be transformed; the rest of the batch continues
    #[error("part {index}: {reason}")]
    PartFailed {
        /// Configured index of the part
        index: i64,
        /// Why the part was left unchanged
        reason: String,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TransformError {
    /// Create an unknown scheme error
    pub fn unknown_scheme(scheme: impl Into<String>, available: &[&str]) -> Self {
        Self::UnknownScheme {
            scheme: scheme.into(),
            available: available.join(", "),
        }
    }

    /// Create a per-part failure
    pub fn part_failed(index: i64, reason: impl ToString) -> Self {
        Self::PartFailed {
            index,
            reason: reason.to_string(),
        }
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether processing can continue past this error
    ///
    /// Only construction-time errors are fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PartFailed { .. })
    }
}

/// Failure returned by a codec function
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CodecError(String);

impl CodecError {
    /// Create a codec error with a message
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
