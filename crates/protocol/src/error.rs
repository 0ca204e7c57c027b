//! Protocol error types
//!
//! Errors that can occur when addressing parts of a message.

use thiserror::Error;

/// Errors that can occur during protocol operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Part index does not address a part of this message
    #[error("part index {index} out of range for message with {len} parts")]
    IndexOutOfRange { index: i64, len: usize },
}

impl ProtocolError {
    /// Create an index out of range error
    #[inline]
    pub fn out_of_range(index: i64, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this is a recoverable error (can continue processing)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
