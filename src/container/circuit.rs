//! The parse result: an immutable circuit with its block metadata and the
//! decompressed logic layer.

use crate::bridge::format::{BYTES_PER_PIXEL, LOGIC_LAYER_ID};
use crate::container::body::Dimensions;
use crate::container::header::ContainerHeader;

/// One self-describing block of the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Byte offset of the block header within the decoded body.
    pub offset: usize,
    /// Declared total length, header included.
    pub size: u32,
    pub layer_id: u32,
    pub uncompressed_size: u32,
    /// The decompressed buffer. Only ever populated for the logic layer.
    pub payload: Option<Vec<u8>>,
}

impl Block {
    pub fn is_logic(&self) -> bool {
        self.layer_id == LOGIC_LAYER_ID
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }
}

/// A fully validated blueprint.
///
/// Holds exactly one logic block whose payload is `width * height * 4` RGBA8
/// bytes in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    version: u32,
    checksum: u64,
    width: u32,
    height: u32,
    blocks: Vec<Block>,
    logic_index: usize,
}

impl Circuit {
    /// Aggregates the outputs of the header, body and block stages.
    pub(crate) fn assemble(
        header: ContainerHeader,
        dims: Dimensions,
        blocks: Vec<Block>,
        logic_index: usize,
    ) -> Self {
        Self {
            version: header.version,
            checksum: header.checksum,
            width: dims.width,
            height: dims.height,
            blocks,
            logic_index,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// The 48-bit checksum declared in the header.
    pub fn checksum(&self) -> u64 {
        self.checksum
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All blocks in body order, the logic block included.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Index into `blocks()` of the logic layer.
    pub fn logic_index(&self) -> usize {
        self.logic_index
    }

    pub fn logic_block(&self) -> &Block {
        &self.blocks[self.logic_index]
    }

    /// The RGBA8 pixel buffer of the logic layer.
    pub fn logic_pixels(&self) -> &[u8] {
        self.logic_block().payload().unwrap_or_default()
    }

    /// Consumes the circuit, returning the logic layer's pixel buffer.
    pub fn into_logic_pixels(mut self) -> Vec<u8> {
        self.blocks
            .swap_remove(self.logic_index)
            .payload
            .unwrap_or_default()
    }

    /// The RGBA8 value of the cell at (`x`, `y`), or `None` outside the board.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = BYTES_PER_PIXEL as usize;
        let start = (y as usize * self.width as usize + x as usize) * bpp;
        let px = self.logic_pixels().get(start..start + bpp)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
