// In: src/bridge/stateless_api.rs

use crate::bridge::format::{BlockInfo, BlueprintStats};
use crate::config::BlueprintConfig;
use crate::container::{self, Circuit, LayerBuffer};
use crate::error::BlueprintError;

/// An owned RGBA8 image ready for a raster encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, row-major.
    pub rgba: Vec<u8>,
}

/// Parses a blueprint with the default configuration.
pub fn parse_blueprint(input: &str) -> Result<Circuit, BlueprintError> {
    parse_blueprint_with_config(input, &BlueprintConfig::default())
}

pub fn parse_blueprint_with_config(
    input: &str,
    config: &BlueprintConfig,
) -> Result<Circuit, BlueprintError> {
    container::parse_container(input.as_bytes(), config).map(|parsed| parsed.circuit)
}

/// Parses a blueprint and hands back only what an image encoder needs.
pub fn render_rgba(input: &str) -> Result<RenderTarget, BlueprintError> {
    let circuit = parse_blueprint(input)?;
    let (width, height) = (circuit.width(), circuit.height());
    Ok(RenderTarget {
        width,
        height,
        rgba: circuit.into_logic_pixels(),
    })
}

/// Validates a blueprint and reports its structure.
pub fn analyze_blueprint(input: &str) -> Result<BlueprintStats, BlueprintError> {
    let parsed = container::parse_container(input.as_bytes(), &BlueprintConfig::default())?;
    let circuit = &parsed.circuit;

    let blocks = circuit
        .blocks()
        .iter()
        .map(|b| BlockInfo {
            offset: b.offset,
            size: b.size,
            layer_id: b.layer_id,
            uncompressed_size: b.uncompressed_size,
            decoded: b.payload.is_some(),
        })
        .collect();

    Ok(BlueprintStats {
        version: circuit.version(),
        checksum: circuit.checksum(),
        width: circuit.width(),
        height: circuit.height(),
        text_size: input.len(),
        body_size: parsed.body_len,
        blocks,
        logic_index: circuit.logic_index(),
    })
}

/// Encodes a board, plus optional non-logic layers, into blueprint text.
pub fn encode_blueprint(
    width: u32,
    height: u32,
    logic_rgba: &[u8],
    extra_layers: &[LayerBuffer<'_>],
) -> Result<String, BlueprintError> {
    encode_blueprint_with_config(width, height, logic_rgba, extra_layers, &BlueprintConfig::default())
}

pub fn encode_blueprint_with_config(
    width: u32,
    height: u32,
    logic_rgba: &[u8],
    extra_layers: &[LayerBuffer<'_>],
    config: &BlueprintConfig,
) -> Result<String, BlueprintError> {
    container::writer::encode_container(width, height, logic_rgba, extra_layers, config)
}
