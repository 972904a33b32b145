// In: src/error.rs

//! This module defines the single, unified error type for the vcbview library.
//! It uses the `thiserror` crate so every failure is a distinct, inspectable value
//! that callers can branch on, log, and turn into a uniform user-facing message.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlueprintError {
    // =========================================================================
    // === Container-Level Errors (header and body text)
    // =========================================================================
    #[error("Blueprint container is malformed: {0}")]
    MalformedContainer(String),

    #[error("Blueprint version {0} is not supported (expected 0)")]
    UnsupportedVersion(u32),

    #[error("Blueprint checksum is not valid: declared {declared:#014x}, computed {computed:#014x}")]
    ChecksumMismatch { declared: u64, computed: u64 },

    #[error("Blueprint is smaller than a pixel: {width}x{height}")]
    DegenerateDimensions { width: u32, height: u32 },

    // =========================================================================
    // === Block-Level Errors (the body's block sequence)
    // =========================================================================
    #[error("Block at offset {offset} needs {needed} bytes but only {available} remain")]
    BlockOutOfBounds {
        offset: usize,
        needed: u64,
        available: usize,
    },

    #[error("Block at offset {offset} declares size {size}, smaller than its 12-byte header")]
    BlockTooSmall { offset: usize, size: u32 },

    #[error("Block at offset {offset} declares {declared} uncompressed bytes, limit is {limit}")]
    OversizedPayload {
        offset: usize,
        declared: u64,
        limit: u64,
    },

    #[error("Layer size mismatch at offset {offset}: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        offset: usize,
        expected: u64,
        actual: u64,
    },

    #[error("Duplicate logic layer in block at offset {offset}")]
    DuplicateLogicLayer { offset: usize },

    #[error("Compressed data of block at offset {offset} is likely corrupt: {reason}")]
    CorruptPayload { offset: usize, reason: String },

    #[error("Blueprint has no logic layer")]
    MissingLogicLayer,

    // =========================================================================
    // === External Error Wrappers (configuration and reports, never parsing)
    // =========================================================================
    /// An error from the Serde JSON library, raised while loading a config or
    /// serializing an analysis report.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl BlueprintError {
    /// A stable, machine-readable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            BlueprintError::MalformedContainer(_) => "malformed_container",
            BlueprintError::UnsupportedVersion(_) => "unsupported_version",
            BlueprintError::ChecksumMismatch { .. } => "checksum_mismatch",
            BlueprintError::DegenerateDimensions { .. } => "degenerate_dimensions",
            BlueprintError::BlockOutOfBounds { .. } => "block_out_of_bounds",
            BlueprintError::BlockTooSmall { .. } => "block_too_small",
            BlueprintError::OversizedPayload { .. } => "oversized_payload",
            BlueprintError::SizeMismatch { .. } => "size_mismatch",
            BlueprintError::DuplicateLogicLayer { .. } => "duplicate_logic_layer",
            BlueprintError::CorruptPayload { .. } => "corrupt_payload",
            BlueprintError::MissingLogicLayer => "missing_logic_layer",
            BlueprintError::SerdeJson(_) => "serde_json",
        }
    }
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<base64::DecodeError> for BlueprintError {
    fn from(err: base64::DecodeError) -> Self {
        BlueprintError::MalformedContainer(format!("invalid base64 text: {}", err))
    }
}

#[cfg(feature = "python")]
impl From<BlueprintError> for pyo3::PyErr {
    fn from(err: BlueprintError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(format!("[{}] {}", err.code(), err))
    }
}
