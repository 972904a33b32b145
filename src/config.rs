// In: src/config.rs

//! The single source of truth for all blueprint parsing and encoding configuration.
//!
//! `BlueprintConfig` is created once at the application boundary (e.g. from a JSON
//! file or a Python call) and passed by reference into the parser and encoder.
//! Nothing in the core reads configuration from the environment or the filesystem.

use serde::{Deserialize, Serialize};

use crate::bridge::format::MAX_UNCOMPRESSED_LAYER_LEN;
use crate::error::BlueprintError;

/// Defines the trade-off between encoding speed and blueprint size.
///
/// Only the encoder consults it; parsing is independent of the level the
/// layers were compressed with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompressionProfile {
    /// Prioritizes speed over size.
    Fast,

    /// A balance between speed and size. This is the recommended default.
    #[default]
    Balanced,

    /// Prioritizes the smallest possible blueprint at the cost of CPU time.
    HighCompression,
}

impl CompressionProfile {
    /// The zstd level used for layer payloads.
    pub fn zstd_level(self) -> i32 {
        match self {
            CompressionProfile::Fast => 1,
            CompressionProfile::Balanced => 3,
            CompressionProfile::HighCompression => 19,
        }
    }
}

/// The unified configuration for parsing and encoding blueprints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct BlueprintConfig {
    /// The profile guiding the encoder's zstd level.
    #[serde(default)]
    pub profile: CompressionProfile,

    /// Optional tighter cap on any block's declared uncompressed size.
    /// It can only lower the format limit, never raise it.
    #[serde(default)]
    pub max_layer_bytes: Option<u64>,
}

impl Default for BlueprintConfig {
    fn default() -> Self {
        Self {
            profile: CompressionProfile::default(),
            max_layer_bytes: None,
        }
    }
}

impl BlueprintConfig {
    /// Loads a config from its JSON form. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, BlueprintError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The effective upper bound on declared uncompressed layer sizes.
    pub fn layer_limit(&self) -> u64 {
        match self.max_layer_bytes {
            Some(limit) => limit.min(MAX_UNCOMPRESSED_LAYER_LEN),
            None => MAX_UNCOMPRESSED_LAYER_LEN,
        }
    }
}
