//! This module collects the pure, stateless primitives the container layer is
//! built on: text decoding, checksumming and stream (de)compression.
//!
//! Every kernel maps its collaborator crate's failures into `BlueprintError` at
//! the point of use, so no lower-level error type escapes the crate.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Text Layer: base64 body and header fields.
pub mod base64;

/// Integrity Layer: the 48-bit SHA-1 prefix checksum.
pub mod checksum;

/// Payload Layer: zstd-compressed layer buffers.
pub mod zstd;
