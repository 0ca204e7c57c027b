//! Sluice - Transform
//!
//! Codec registry and the part-selective codec stage.
//!
//! # Overview
//!
//! A stage receives a message made of ordered binary parts, applies a codec
//! to a configured subset of them, and either forwards the result or
//! acknowledges an empty message.
//!
//! # Design Principles
//!
//! - **Fail fast at construction**: an unknown scheme stops the stage from
//!   being built at all
//! - **Degrade per part at runtime**: a part that fails to transform stays
//!   unchanged; the message is still forwarded
//! - **Immutable input**: stages work on `Message::copy`, so callers may keep
//!   using the message they passed in
//! - **Thread-safe**: `process` takes `&self`; counters are atomic and codecs
//!   are pure
//! - **Synchronous**: codecs are CPU-bound, so `process` runs to completion
//!   without suspension points
//!
//! # Architecture
//!
//! ```text
//! CodecRegistry ── resolve(scheme) ──► CodecFn
//!                                        │
//! [Message] ──► PartCodecProcessor ──────┴──► Outcome::Forward(copy) | Outcome::Ack
//!                      │
//!                      └──► StatsSink counters (count, success, error, ...)
//! ```
//!
//! # Adding a New Scheme
//!
//! Register a function on a `CodecRegistry` and hand that registry to a
//! `PartCodecFactory` (or `PartCodecProcessor::new`). No stage code changes.
//!
//! # Modules
//!
//! - `codec` - Scheme name → codec function registry, built-in codecs
//! - `part_codec` - Encode/decode stage over selected parts
//! - `registry` - Dynamic processor creation from config

pub mod codec;
mod error;
mod outcome;
pub mod part_codec;
pub mod registry;

pub use codec::{CodecFn, CodecRegistry, CodecResult};
pub use error::{CodecError, TransformError};
pub use outcome::Outcome;
pub use part_codec::{
    CodecDirection, DEFAULT_SCHEME, PartCodecConfig, PartCodecFactory, PartCodecMetrics,
    PartCodecProcessor,
};
pub use registry::{ProcessorFactory, ProcessorRegistry, default_registry};

use sluice_protocol::Message;

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

/// Trait for pipeline stages
///
/// Implementors must be `Send + Sync` so one instance can serve concurrent
/// callers.
///
/// # Design
///
/// Processors should be:
/// - **Fast**: Complete in microseconds, not milliseconds
/// - **Non-blocking**: Never block on I/O in the process path
/// - **Infallible per message**: Failures inside a message are absorbed and
///   counted; the outcome is always forward or acknowledge
pub trait Processor: Send + Sync {
    /// Process one message
    ///
    /// The input is borrowed and must not be modified; a forwarded message
    /// is a new value.
    fn process(&self, msg: &Message) -> Outcome;

    /// Name of this processor for logging and metrics
    fn name(&self) -> &'static str;

    /// Check if this processor is enabled
    ///
    /// Callers may skip a disabled processor entirely.
    fn enabled(&self) -> bool {
        true
    }
}
