//! Processor Registry - Dynamic processor creation
//!
//! The registry maps processor type names to factories, enabling
//! configuration-driven stage construction.
//!
//! # Design
//!
//! - **Compile-time extensibility**: Users implement the `ProcessorFactory` trait
//! - **Type-safe**: Factories return `Box<dyn Processor>`
//! - **Config-driven**: The `[processor]` table names its type
//!
//! # Example
//!
//! ```
//! use sluice_config::ProcessorConfig;
//! use sluice_metrics::NullStats;
//! use sluice_transform::default_registry;
//!
//! let registry = default_registry();
//! let processor = registry.create(&ProcessorConfig::decode(), &NullStats).unwrap();
//! assert_eq!(processor.name(), "decode");
//! ```

use crate::part_codec::PartCodecFactory;
use crate::{Processor, TransformError, TransformResult};
use sluice_config::ProcessorConfig;
use sluice_metrics::StatsSink;
use std::collections::HashMap;

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

/// Factory trait for creating processors
///
/// Implement this trait to register custom processors with the registry.
pub trait ProcessorFactory: Send + Sync {
    /// Create a processor instance from configuration
    ///
    /// Counters are looked up on `stats` at creation time.
    ///
    /// # Errors
    /// Returns `TransformError::Config` if configuration is invalid, or
    /// `TransformError::UnknownScheme` if the configured scheme is unknown.
    fn create(
        &self,
        config: &ProcessorConfig,
        stats: &dyn StatsSink,
    ) -> TransformResult<Box<dyn Processor>>;

    /// Human-readable name for this factory (for error messages)
    fn name(&self) -> &'static str;
}

/// Registry for processor factories
///
/// Maps processor type names (e.g., "encode", "decode") to their
/// factory implementations.
pub struct ProcessorRegistry {
    factories: HashMap<String, Box<dyn ProcessorFactory>>,
}

impl ProcessorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a processor factory
    ///
    /// # Panics
    /// Panics if a factory is already registered with this name.
    /// Use `try_register` for fallible registration.
    pub fn register<F: ProcessorFactory + 'static>(&mut self, type_name: &str, factory: F) {
        if self.factories.contains_key(type_name) {
            panic!("Processor factory '{}' already registered", type_name);
        }
        self.factories
            .insert(type_name.to_string(), Box::new(factory));
    }

    /// Try to register a processor factory
    ///
    /// Returns `false` if a factory is already registered with this name.
    pub fn try_register<F: ProcessorFactory + 'static>(
        &mut self,
        type_name: &str,
        factory: F,
    ) -> bool {
        if self.factories.contains_key(type_name) {
            return false;
        }
        self.factories
            .insert(type_name.to_string(), Box::new(factory));
        true
    }

    /// Create a processor from its configuration
    ///
    /// # Errors
    /// - `TransformError::Config` if the type is not registered
    /// - Any error the factory returns
    pub fn create(
        &self,
        config: &ProcessorConfig,
        stats: &dyn StatsSink,
    ) -> TransformResult<Box<dyn Processor>> {
        let type_name = config.processor_type.as_str();
        let factory = self.factories.get(type_name).ok_or_else(|| {
            TransformError::config(format!(
                "unknown processor type '{}', available: [{}]",
                type_name,
                self.available_types().join(", ")
            ))
        })?;

        factory.create(config, stats)
    }

    /// Check if a processor type is registered
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Get list of registered processor types, sorted
    pub fn available_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        types
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry with all built-in processors registered
///
/// Includes:
/// - `encode` - Part codec stage with the built-in encoders
/// - `decode` - Part codec stage with the built-in decoders
pub fn default_registry() -> ProcessorRegistry {
    let mut registry = ProcessorRegistry::new();
    registry.register("encode", PartCodecFactory::encode());
    registry.register("decode", PartCodecFactory::decode());
    registry
}
