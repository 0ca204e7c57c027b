//! Base64 codec (standard alphabet, padded, no line wrapping)
//!
//! Encoding `n` bytes always succeeds and yields `ceil(n / 3) * 4` bytes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::CodecResult;
use crate::error::CodecError;

/// Encode bytes as base64
pub fn encode(input: &[u8]) -> CodecResult {
    Ok(STANDARD.encode(input).into_bytes())
}

/// Decode base64 bytes
pub fn decode(input: &[u8]) -> CodecResult {
    STANDARD
        .decode(input)
        .map_err(|e| CodecError::new(format!("invalid base64: {}", e)))
}
