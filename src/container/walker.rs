//! The block walker: iterates the body's length-prefixed blocks, validates every
//! declared size and decompresses the single logic layer.

use crate::bridge::format::{BLOCK_HEADER_LEN, DIMENSIONS_LEN, LOGIC_LAYER_ID, TRAILER_MARGIN};
use crate::container::body::Dimensions;
use crate::container::circuit::Block;
use crate::container::cursor::ByteCursor;
use crate::error::BlueprintError;
use crate::kernels::zstd::{self, DecodeFailure};

/// The validated block sequence of one body.
#[derive(Debug)]
pub(crate) struct WalkOutcome {
    pub blocks: Vec<Block>,
    pub logic_index: usize,
}

/// The fixed 12-byte header in front of every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockHeader {
    size: u32,
    layer_id: u32,
    uncompressed_size: u32,
}

impl BlockHeader {
    fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, BlueprintError> {
        cursor.ensure(BLOCK_HEADER_LEN as u64)?;
        Ok(Self {
            size: cursor.read_u32_be()?,
            layer_id: cursor.read_u32_be()?,
            uncompressed_size: cursor.read_u32_be()?,
        })
    }
}

/// Walks `body` from offset 8. `layer_limit` caps every declared uncompressed size.
pub(crate) fn walk_blocks(
    body: &[u8],
    dims: Dimensions,
    layer_limit: u64,
) -> Result<WalkOutcome, BlueprintError> {
    let expected_len = dims.layer_len();
    let mut cursor = ByteCursor::at(body, DIMENSIONS_LEN);
    let mut blocks = Vec::new();
    let mut logic_index: Option<usize> = None;

    while !cursor.is_empty() {
        let offset = cursor.position();
        let header = BlockHeader::read(&mut cursor)?;

        // The declared size covers the header we just consumed.
        let available = body.len() - offset;
        if u64::from(header.size) > available as u64 {
            return Err(BlueprintError::BlockOutOfBounds {
                offset,
                needed: u64::from(header.size),
                available,
            });
        }
        if (header.size as usize) < BLOCK_HEADER_LEN {
            return Err(BlueprintError::BlockTooSmall {
                offset,
                size: header.size,
            });
        }

        let declared = u64::from(header.uncompressed_size);
        if declared > layer_limit {
            return Err(BlueprintError::OversizedPayload {
                offset,
                declared,
                limit: layer_limit,
            });
        }
        if declared != expected_len {
            return Err(BlueprintError::SizeMismatch {
                offset,
                expected: expected_len,
                actual: declared,
            });
        }

        let payload_bytes = cursor.read_exact(header.size as usize - BLOCK_HEADER_LEN)?;
        log::trace!(
            "block @{}: size={} layer={} uncompressed={}",
            offset,
            header.size,
            header.layer_id,
            header.uncompressed_size
        );

        let payload = if header.layer_id == LOGIC_LAYER_ID {
            if logic_index.is_some() {
                return Err(BlueprintError::DuplicateLogicLayer { offset });
            }
            let pixels = decode_logic_payload(payload_bytes, offset, declared)?;
            logic_index = Some(blocks.len());
            Some(pixels)
        } else {
            None
        };

        blocks.push(Block {
            offset,
            size: header.size,
            layer_id: header.layer_id,
            uncompressed_size: header.uncompressed_size,
            payload,
        });

        // Whatever follows within the trailing margin is never parsed as a block.
        if cursor.position() + TRAILER_MARGIN > body.len() {
            break;
        }
    }

    match logic_index {
        Some(logic_index) => Ok(WalkOutcome {
            blocks,
            logic_index,
        }),
        None => Err(BlueprintError::MissingLogicLayer),
    }
}

fn decode_logic_payload(
    payload_bytes: &[u8],
    offset: usize,
    declared: u64,
) -> Result<Vec<u8>, BlueprintError> {
    // `declared` is bounded by the layer limit, so it fits in memory and in usize.
    zstd::decode_exact(payload_bytes, declared as usize).map_err(|failure| match failure {
        DecodeFailure::Corrupt(reason) => BlueprintError::CorruptPayload { offset, reason },
        DecodeFailure::Length(actual) => BlueprintError::SizeMismatch {
            offset,
            expected: declared,
            actual,
        },
    })
}
