//! Hex codec (lowercase)

use super::CodecResult;
use crate::error::CodecError;

/// Encode bytes as lowercase hex
pub fn encode(input: &[u8]) -> CodecResult {
    Ok(hex::encode(input).into_bytes())
}

/// Decode hex bytes (either case)
pub fn decode(input: &[u8]) -> CodecResult {
    hex::decode(input).map_err(|e| CodecError::new(format!("invalid hex: {}", e)))
}
