//! Body decoding: base64 text to raw bytes and the global board dimensions.

use crate::bridge::format::{BODY_TEXT_OFFSET, BYTES_PER_PIXEL};
use crate::container::cursor::ByteCursor;
use crate::error::BlueprintError;
use crate::kernels::base64;

/// The board size declared at the start of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Byte length of one full-board RGBA8 layer, saturating at `u64::MAX`.
    pub fn layer_len(&self) -> u64 {
        (u64::from(self.width) * u64::from(self.height)).saturating_mul(BYTES_PER_PIXEL)
    }
}

#[derive(Debug)]
pub(crate) struct DecodedBody {
    pub dims: Dimensions,
    /// The whole decoded body, dimensions included. Blocks start at offset 8.
    pub bytes: Vec<u8>,
}

/// Decodes the body text of a blueprint whose header already validated.
pub(crate) fn decode_body(input: &[u8]) -> Result<DecodedBody, BlueprintError> {
    let text = input.get(BODY_TEXT_OFFSET..).unwrap_or_default();
    let bytes = base64::decode(text)?;

    let mut cursor = ByteCursor::new(&bytes);
    let (width, height) = match (cursor.read_u32_be(), cursor.read_u32_be()) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(BlueprintError::MalformedContainer(format!(
                "body is {} bytes, too short to hold the board dimensions",
                bytes.len()
            )))
        }
    };

    if width.min(height) < 1 {
        return Err(BlueprintError::DegenerateDimensions { width, height });
    }

    Ok(DecodedBody {
        dims: Dimensions { width, height },
        bytes,
    })
}
