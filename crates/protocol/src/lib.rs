//! Sluice Protocol - Core types flowing through sluice stages
//!
//! This crate provides the data model every stage consumes and produces:
//! - `Message` - Ordered collection of independently addressable parts
//! - `Part` - One opaque binary segment of a message
//!
//! # Design Principles
//!
//! - **Copy isolation**: `Message::copy` yields a message whose parts can be
//!   replaced without the original ever observing it
//! - **Cheap copies**: part buffers are `bytes::Bytes`, so copying a message
//!   costs one reference-count bump per part, never a buffer copy
//! - **Checked access**: signed indices from configuration are validated
//!   against the message at access time, never assumed

mod error;
mod message;

pub use error::ProtocolError;
pub use message::{Message, Part};

// Re-export bytes for convenience
pub use bytes::Bytes;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;
