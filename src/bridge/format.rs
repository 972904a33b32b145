// In: src/bridge/format.rs

//! Defines all wire-level constants and report structures for the blueprint
//! container format. This is the single source of truth shared by the parser
//! (`container::header`, `container::walker`) and the encoder (`container::writer`).

use serde::{Deserialize, Serialize};

//==================================================================================
// I. Container Header
//==================================================================================

/// The textual magic marker every blueprint starts with.
pub const CONTAINER_MAGIC: &[u8; 4] = b"VCB+";
/// The single supported container revision.
pub const CONTAINER_FORMAT_VERSION: u32 = 0;
/// Length of the base64 text holding `version(3) ++ checksum(6)`.
pub const HEADER_FIELD_TEXT_LEN: usize = 12;
/// Decoded length of the header field.
pub const HEADER_FIELD_LEN: usize = 9;
/// Offset of the body text; everything from here on is checksummed.
pub const BODY_TEXT_OFFSET: usize = CONTAINER_MAGIC.len() + HEADER_FIELD_TEXT_LEN;
/// Number of digest bytes that form the 48-bit checksum.
pub const CHECKSUM_LEN: usize = 6;

//==================================================================================
// II. Body & Block Layout
//==================================================================================

/// `width(4) ++ height(4)` at the start of the decoded body.
pub const DIMENSIONS_LEN: usize = 8;
/// `size(4) ++ layer_id(4) ++ uncompressed_size(4)`.
pub const BLOCK_HEADER_LEN: usize = 12;
/// The layer id of the renderable logic layer.
pub const LOGIC_LAYER_ID: u32 = 0;
/// Bytes per board cell in a layer buffer (RGBA8).
pub const BYTES_PER_PIXEL: u64 = 4;
/// Side of the largest board the game supports.
pub const MAX_BOARD_SIDE: u64 = 2048;
/// Upper bound on any declared uncompressed layer size. Four times the full
/// 2048x2048 RGBA8 board.
pub const MAX_UNCOMPRESSED_LAYER_LEN: u64 = MAX_BOARD_SIDE * MAX_BOARD_SIDE * BYTES_PER_PIXEL * 4;
/// Block iteration stops once the next block would start within this many
/// bytes of the end of the body.
pub const TRAILER_MARGIN: usize = 20;

//==================================================================================
// III. Analysis Report
//==================================================================================

/// Metadata of one block as reported by `analyze_blueprint`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    pub offset: usize,
    pub size: u32,
    pub layer_id: u32,
    pub uncompressed_size: u32,
    pub decoded: bool,
}

/// The public-facing analysis result, returned by `analyze_blueprint`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlueprintStats {
    pub version: u32,
    pub checksum: u64,
    pub width: u32,
    pub height: u32,
    /// Length of the blueprint text, magic and header included.
    pub text_size: usize,
    /// Length of the decoded body in bytes.
    pub body_size: usize,
    pub blocks: Vec<BlockInfo>,
    pub logic_index: usize,
}

impl BlueprintStats {
    pub fn to_json(&self) -> Result<String, crate::error::BlueprintError> {
        Ok(serde_json::to_string(self)?)
    }
}
