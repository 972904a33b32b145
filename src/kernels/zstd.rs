//! This module contains the pure, stateless kernels for Zstandard compression and
//! decompression of layer payloads.
//!
//! Decoding is bounded: the caller passes the exact number of bytes it expects and
//! the decoder never materializes more than one byte past that, so a small but
//! hostile stream cannot inflate into an unbounded allocation.
//! This module is a safe, panic-free wrapper around the `zstd` crate.

use std::io::{Read, Write};
use zstd::stream::{Decoder, Encoder};

use crate::error::BlueprintError;

/// Why a layer payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    /// The stream itself is invalid or truncated.
    Corrupt(String),
    /// The stream decoded, but not to the expected length. Holds the observed
    /// length, which is capped at `expected + 1`.
    Length(u64),
}

//==================================================================================
// 1. Public API
//==================================================================================

/// Compresses a layer buffer into a single zstd frame.
pub fn encode(input_bytes: &[u8], level: i32) -> Result<Vec<u8>, BlueprintError> {
    let mut output_buf = Vec::with_capacity(input_bytes.len() / 2 + 16);

    let mut encoder = Encoder::new(&mut output_buf, level)
        .map_err(|e| BlueprintError::MalformedContainer(format!("zstd encoder: {}", e)))?;
    encoder
        .write_all(input_bytes)
        .map_err(|e| BlueprintError::MalformedContainer(format!("zstd encoder: {}", e)))?;

    // `finish` is essential to finalize the Zstd frame.
    encoder
        .finish()
        .map_err(|e| BlueprintError::MalformedContainer(format!("zstd encoder: {}", e)))?;
    Ok(output_buf)
}

/// Decompresses `input_bytes`, requiring exactly `expected_len` bytes of output.
pub fn decode_exact(input_bytes: &[u8], expected_len: usize) -> Result<Vec<u8>, DecodeFailure> {
    let decoder = Decoder::new(input_bytes).map_err(|e| DecodeFailure::Corrupt(e.to_string()))?;

    let mut output_buf = Vec::with_capacity(expected_len);
    let cap = expected_len as u64 + 1;
    decoder
        .take(cap)
        .read_to_end(&mut output_buf)
        .map_err(|e| DecodeFailure::Corrupt(e.to_string()))?;

    if output_buf.len() != expected_len {
        return Err(DecodeFailure::Length(output_buf.len() as u64));
    }
    Ok(output_buf)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
