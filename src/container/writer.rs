//! The blueprint encoder. This is the authoritative writer for version-0
//! containers and the inverse of the parser: every blueprint it produces parses
//! back to the same board.

use std::time::Instant;

use crate::bridge::format::{
    BLOCK_HEADER_LEN, CONTAINER_FORMAT_VERSION, CONTAINER_MAGIC, LOGIC_LAYER_ID,
};
use crate::config::BlueprintConfig;
use crate::container::body::Dimensions;
use crate::error::BlueprintError;
use crate::kernels::{base64, checksum, zstd};

/// A non-logic layer to embed alongside the logic layer.
#[derive(Debug, Clone, Copy)]
pub struct LayerBuffer<'a> {
    pub layer_id: u32,
    /// A full-board RGBA8 buffer, `width * height * 4` bytes.
    pub rgba: &'a [u8],
}

/// Encodes a board into blueprint text.
pub(crate) fn encode_container(
    width: u32,
    height: u32,
    logic_rgba: &[u8],
    extra_layers: &[LayerBuffer<'_>],
    config: &BlueprintConfig,
) -> Result<String, BlueprintError> {
    let start = Instant::now();
    if width.min(height) < 1 {
        return Err(BlueprintError::DegenerateDimensions { width, height });
    }
    let dims = Dimensions { width, height };

    let mut body = Vec::new();
    body.extend_from_slice(&width.to_be_bytes());
    body.extend_from_slice(&height.to_be_bytes());

    write_layer(&mut body, dims, LOGIC_LAYER_ID, logic_rgba, config)?;
    for layer in extra_layers {
        if layer.layer_id == LOGIC_LAYER_ID {
            return Err(BlueprintError::DuplicateLogicLayer {
                offset: body.len(),
            });
        }
        write_layer(&mut body, dims, layer.layer_id, layer.rgba, config)?;
    }

    let body_text = base64::encode(&body);
    let mut field = Vec::with_capacity(9);
    checksum::write_be(u64::from(CONTAINER_FORMAT_VERSION), 3, &mut field);
    checksum::write_be(checksum::checksum48(body_text.as_bytes()), 6, &mut field);

    let mut out = String::with_capacity(16 + body_text.len());
    out.extend(CONTAINER_MAGIC.iter().map(|&b| char::from(b)));
    out.push_str(&base64::encode(&field));
    out.push_str(&body_text);

    log::debug!(
        "encoded {}x{} blueprint: {} layers, {} body bytes in {:.2?}",
        width,
        height,
        1 + extra_layers.len(),
        body.len(),
        start.elapsed()
    );
    log_metric!(
        "event" = "encode_blueprint",
        "width" = width,
        "height" = height,
        "text_len" = out.len(),
        "elapsed_us" = start.elapsed().as_micros()
    );
    Ok(out)
}

fn write_layer(
    body: &mut Vec<u8>,
    dims: Dimensions,
    layer_id: u32,
    rgba: &[u8],
    config: &BlueprintConfig,
) -> Result<(), BlueprintError> {
    let offset = body.len();
    let expected = dims.layer_len();
    let limit = config.layer_limit();
    if expected > limit {
        return Err(BlueprintError::OversizedPayload {
            offset,
            declared: expected,
            limit,
        });
    }
    if rgba.len() as u64 != expected {
        return Err(BlueprintError::SizeMismatch {
            offset,
            expected,
            actual: rgba.len() as u64,
        });
    }

    let compressed = zstd::encode(rgba, config.profile.zstd_level())?;
    let size = u32::try_from(BLOCK_HEADER_LEN + compressed.len()).map_err(|_| {
        BlueprintError::OversizedPayload {
            offset,
            declared: (BLOCK_HEADER_LEN + compressed.len()) as u64,
            limit: u64::from(u32::MAX),
        }
    })?;

    body.extend_from_slice(&size.to_be_bytes());
    body.extend_from_slice(&layer_id.to_be_bytes());
    // `expected` is within the layer limit, which fits in u32.
    body.extend_from_slice(&(expected as u32).to_be_bytes());
    body.extend_from_slice(&compressed);
    Ok(())
}
