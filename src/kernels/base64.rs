//! Base64 text kernels for blueprint header fields and bodies.
//!
//! Blueprints use the standard alphabet with canonical padding. Decoding works on
//! raw bytes so arbitrary (even non-UTF-8-aligned) input can never panic on a
//! char boundary.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::BlueprintError;

/// Decodes standard base64 text into raw bytes.
pub fn decode(text: &[u8]) -> Result<Vec<u8>, BlueprintError> {
    Ok(STANDARD.decode(text)?)
}

/// Encodes raw bytes as standard, padded base64 text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
