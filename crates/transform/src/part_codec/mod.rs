//! Part Codec Processor - Encode or decode selected message parts
//!
//! Applies a codec, chosen by scheme name, to a subset of the parts of each
//! message. The input message is never modified; the stage works on a copy
//! and forwards that copy downstream.
//!
//! # Configuration
//!
//! | Option | Type | Default | Description |
//! |--------|------|---------|-------------|
//! | `scheme` | string | `"base64"` | Codec scheme (`base64`, `hex`, or any registered name) |
//! | `parts` | array | `[]` | Part indices to transform; empty means all parts |
//! | `enabled` | bool | `true` | When false, messages are forwarded unchanged |
//!
//! # TOML Example
//!
//! ```toml
//! # Base64 encode the first and third part of every message
//! [processor]
//! type = "encode"
//! scheme = "base64"
//! parts = [0, 2]
//! ```
//!
//! # Failure Handling
//!
//! A part that fails to transform (codec error, or an index the message does
//! not have) is left as it was, counted under `error` and logged at debug
//! level. The remaining parts are still processed and the message is still
//! forwarded. Only an unknown scheme is fatal, and only at construction.
//!
//! # Metrics
//!
//! | Counter | Incremented |
//! |---------|-------------|
//! | `count` | once per message received |
//! | `success` | once per part transformed |
//! | `error` | once per part left unchanged by a failure |
//! | `skipped` | once per message with no parts (acknowledged) |
//! | `sent` | once per message forwarded |
//! | `parts.sent` | by the part count of each forwarded message |
//!
//! # Rust Example
//!
//! ```
//! use sluice_metrics::LocalStats;
//! use sluice_protocol::Message;
//! use sluice_transform::{CodecRegistry, Outcome, PartCodecConfig, PartCodecProcessor};
//!
//! let stats = LocalStats::new();
//! let encoder = PartCodecProcessor::encoder(PartCodecConfig::new(), &stats).unwrap();
//!
//! let outcome = encoder.process(&Message::from_slices(&["abc"]));
//! assert_eq!(outcome, Outcome::Forward(Message::from_slices(&["YWJj"])));
//! assert_eq!(stats.get("sent"), Some(1));
//! ```

mod config;

pub use config::{DEFAULT_SCHEME, PartCodecConfig};

use crate::codec::{CodecFn, CodecRegistry};
use crate::registry::ProcessorFactory;
use crate::{Outcome, Processor, TransformError, TransformResult};
use sluice_config::ProcessorConfig;
use sluice_metrics::{Counter, StatsSink};
use sluice_protocol::Message;
use std::sync::Arc;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Which way a part codec stage transforms its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecDirection {
    /// Apply an encoder (`CodecRegistry::encoders()` by default)
    Encode,
    /// Apply a decoder (`CodecRegistry::decoders()` by default)
    Decode,
}

impl CodecDirection {
    /// Processor type name for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
        }
    }

    /// Built-in codecs for this direction
    pub fn default_codecs(&self) -> CodecRegistry {
        match self {
            Self::Encode => CodecRegistry::encoders(),
            Self::Decode => CodecRegistry::decoders(),
        }
    }
}

/// Counter handles for a part codec stage
///
/// Resolved once from the injected `StatsSink` when the stage is built.
#[derive(Debug, Clone)]
pub struct PartCodecMetrics {
    /// Messages received
    pub count: Arc<Counter>,
    /// Parts transformed
    pub success: Arc<Counter>,
    /// Parts left unchanged after a failure
    pub error: Arc<Counter>,
    /// Empty messages acknowledged
    pub skipped: Arc<Counter>,
    /// Messages forwarded
    pub sent: Arc<Counter>,
    /// Parts forwarded
    pub parts_sent: Arc<Counter>,
}

impl PartCodecMetrics {
    /// Look up the stage counters by name
    pub fn new(stats: &dyn StatsSink) -> Self {
        Self {
            count: stats.counter("count"),
            success: stats.counter("success"),
            error: stats.counter("error"),
            skipped: stats.counter("skipped"),
            sent: stats.counter("sent"),
            parts_sent: stats.counter("parts.sent"),
        }
    }
}

/// Part codec processor
///
/// Stateless apart from its counters; `process` may be called concurrently
/// from any number of threads.
pub struct PartCodecProcessor {
    direction: CodecDirection,
    config: PartCodecConfig,
    codec: CodecFn,
    metrics: PartCodecMetrics,
}

impl PartCodecProcessor {
    /// Create a new part codec processor
    ///
    /// # Errors
    ///
    /// Returns `TransformError::UnknownScheme` if `codecs` has nothing
    /// registered under the configured scheme, or `TransformError::Config`
    /// if the config is invalid.
    pub fn new(
        direction: CodecDirection,
        config: PartCodecConfig,
        codecs: &CodecRegistry,
        stats: &dyn StatsSink,
    ) -> TransformResult<Self> {
        config.validate().map_err(TransformError::config)?;
        let codec = codecs.resolve(&config.scheme)?;

        tracing::info!(
            processor = direction.as_str(),
            scheme = %config.scheme,
            parts = ?config.parts,
            "part codec stage ready"
        );

        Ok(Self {
            direction,
            config,
            codec,
            metrics: PartCodecMetrics::new(stats),
        })
    }

    /// Create an encode stage using the built-in encoders
    pub fn encoder(config: PartCodecConfig, stats: &dyn StatsSink) -> TransformResult<Self> {
        Self::new(
            CodecDirection::Encode,
            config,
            &CodecRegistry::encoders(),
            stats,
        )
    }

    /// Create a decode stage using the built-in decoders
    pub fn decoder(config: PartCodecConfig, stats: &dyn StatsSink) -> TransformResult<Self> {
        Self::new(
            CodecDirection::Decode,
            config,
            &CodecRegistry::decoders(),
            stats,
        )
    }

    /// Get the stage configuration
    pub fn config(&self) -> &PartCodecConfig {
        &self.config
    }

    /// Get the stage counters
    pub fn metrics(&self) -> &PartCodecMetrics {
        &self.metrics
    }

    /// Direction of this stage
    pub fn direction(&self) -> CodecDirection {
        self.direction
    }

    /// Process one message
    ///
    /// Returns `Outcome::Forward` with the transformed copy, or
    /// `Outcome::Ack` if the message has no parts. Part failures never
    /// change which outcome is returned. A disabled stage forwards an
    /// untouched copy (or acknowledges an empty message) and counts nothing.
    pub fn process(&self, msg: &Message) -> Outcome {
        if !self.config.enabled {
            return if msg.is_empty() {
                Outcome::Ack
            } else {
                Outcome::Forward(msg.copy())
            };
        }

        self.metrics.count.inc();

        let mut copy = msg.copy();

        if self.config.parts.is_empty() {
            for index in 0..copy.len() {
                self.apply(&mut copy, index as i64);
            }
        } else {
            for &index in &self.config.parts {
                self.apply(&mut copy, index);
            }
        }

        if copy.is_empty() {
            self.metrics.skipped.inc();
            return Outcome::Ack;
        }

        self.metrics.sent.inc();
        self.metrics.parts_sent.incr(copy.len() as u64);
        Outcome::Forward(copy)
    }

    /// Transform one part of `msg` in place, recording the result
    fn apply(&self, msg: &mut Message, index: i64) {
        match self.transform_part(msg, index) {
            Ok(()) => self.metrics.success.inc(),
            Err(err) => {
                tracing::debug!(
                    processor = self.direction.as_str(),
                    error = %err,
                    "failed to {} message part",
                    self.direction.as_str()
                );
                self.metrics.error.inc();
            }
        }
    }

    fn transform_part(&self, msg: &mut Message, index: i64) -> TransformResult<()> {
        let part = msg
            .try_get(index)
            .map_err(|e| TransformError::part_failed(index, e))?;
        let transformed =
            (self.codec)(part.get()).map_err(|e| TransformError::part_failed(index, e))?;
        msg.try_set(index, transformed)
            .map_err(|e| TransformError::part_failed(index, e))
    }
}

impl Processor for PartCodecProcessor {
    fn process(&self, msg: &Message) -> Outcome {
        PartCodecProcessor::process(self, msg)
    }

    fn name(&self) -> &'static str {
        self.direction.as_str()
    }

    fn enabled(&self) -> bool {
        self.config.enabled
    }
}

impl std::fmt::Debug for PartCodecProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartCodecProcessor")
            .field("direction", &self.direction)
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Factory for creating encode or decode processors
///
/// Holds the codec registry that configured schemes resolve against, so
/// custom schemes can be registered before the factory is.
#[derive(Debug, Clone)]
pub struct PartCodecFactory {
    direction: CodecDirection,
    codecs: CodecRegistry,
}

impl PartCodecFactory {
    /// Create a factory resolving schemes against `codecs`
    pub fn new(direction: CodecDirection, codecs: CodecRegistry) -> Self {
        Self { direction, codecs }
    }

    /// Factory for encode stages with the built-in encoders
    pub fn encode() -> Self {
        Self::new(CodecDirection::Encode, CodecRegistry::encoders())
    }

    /// Factory for decode stages with the built-in decoders
    pub fn decode() -> Self {
        Self::new(CodecDirection::Decode, CodecRegistry::decoders())
    }
}

impl ProcessorFactory for PartCodecFactory {
    fn create(
        &self,
        config: &ProcessorConfig,
        stats: &dyn StatsSink,
    ) -> TransformResult<Box<dyn Processor>> {
        let codec_config = PartCodecConfig::try_from(config).map_err(TransformError::config)?;
        let processor = PartCodecProcessor::new(self.direction, codec_config, &self.codecs, stats)?;
        Ok(Box::new(processor))
    }

    fn name(&self) -> &'static str {
        self.direction.as_str()
    }
}
