//! Codec Registry - scheme name to byte transform
//!
//! A codec is a pure function from bytes to bytes that may fail. The
//! registry maps scheme names (e.g. "base64") to codecs so stages resolve
//! their codec once at construction and new schemes can be added without
//! touching the stages that use them.
//!
//! # Built-in Schemes
//!
//! | Scheme | `encoders()` | `decoders()` |
//! |--------|--------------|--------------|
//! | `base64` | standard alphabet, padded, never fails | fails on invalid input |
//! | `hex` | lowercase, never fails | fails on odd length or non-hex |
//!
//! # Example
//!
//! ```
//! use sluice_transform::CodecRegistry;
//!
//! let mut registry = CodecRegistry::encoders();
//! registry.register("reverse", |input: &[u8]| {
//!     Ok(input.iter().rev().copied().collect())
//! });
//!
//! let codec = registry.resolve("reverse").unwrap();
//! assert_eq!(codec(&b"abc"[..]).unwrap(), b"cba");
//! ```

pub mod base64_codec;
pub mod hex_codec;

use crate::error::CodecError;
use crate::{TransformError, TransformResult};
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Result of applying a codec to one part
pub type CodecResult = Result<Vec<u8>, CodecError>;

/// A resolved codec
///
/// Codecs must not depend on mutable state, so one instance can be shared by
/// every concurrent invocation of a stage.
pub type CodecFn = Arc<dyn Fn(&[u8]) -> CodecResult + Send + Sync>;

/// Registry of codecs keyed by scheme name
///
/// Lookup is by exact string match.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: HashMap<String, CodecFn>,
}

impl CodecRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    /// Registry with the built-in encoding schemes
    pub fn encoders() -> Self {
        let mut registry = Self::new();
        registry.register("base64", base64_codec::encode);
        registry.register("hex", hex_codec::encode);
        registry
    }

    /// Registry with the built-in decoding schemes
    pub fn decoders() -> Self {
        let mut registry = Self::new();
        registry.register("base64", base64_codec::decode);
        registry.register("hex", hex_codec::decode);
        registry
    }

    /// Register a codec under a scheme name
    ///
    /// # Panics
    /// Panics if a codec is already registered with this name.
    /// Use `try_register` for fallible registration.
    pub fn register<F>(&mut self, scheme: &str, codec: F)
    where
        F: Fn(&[u8]) -> CodecResult + Send + Sync + 'static,
    {
        if !self.try_register(scheme, codec) {
            panic!("Codec scheme '{}' already registered", scheme);
        }
    }

    /// Try to register a codec
    ///
    /// Returns `false` if a codec is already registered with this name.
    pub fn try_register<F>(&mut self, scheme: &str, codec: F) -> bool
    where
        F: Fn(&[u8]) -> CodecResult + Send + Sync + 'static,
    {
        if self.codecs.contains_key(scheme) {
            return false;
        }
        self.codecs.insert(scheme.to_string(), Arc::new(codec));
        true
    }

    /// Resolve a scheme name to its codec
    ///
    /// # Errors
    /// Returns `TransformError::UnknownScheme` naming the scheme and the
    /// registered alternatives if nothing matches.
    pub fn resolve(&self, scheme: &str) -> TransformResult<CodecFn> {
        self.codecs
            .get(scheme)
            .cloned()
            .ok_or_else(|| TransformError::unknown_scheme(scheme, &self.schemes()))
    }

    /// Check if a scheme is registered
    pub fn contains(&self, scheme: &str) -> bool {
        self.codecs.contains_key(scheme)
    }

    /// Registered scheme names, sorted
    pub fn schemes(&self) -> Vec<&str> {
        let mut schemes: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        schemes.sort_unstable();
        schemes
    }

    /// Get the number of registered codecs
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("schemes", &self.schemes())
            .finish()
    }
}
