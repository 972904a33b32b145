// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Container Pipeline
// ====================================================================================
//
// Parsing is one synchronous pass over an untrusted blueprint string. Each stage
// owns its validation and hands a strictly more structured value to the next:
//
//   1. [header::validate_header]   "VCB+" marker, version == 0, SHA-1 checksum
//         |                          over the body text
//         `-> ContainerHeader { version, checksum }
//
//   2. [body::decode_body]         base64 body -> bytes, width/height >= 1
//         |
//         `-> DecodedBody { dims, bytes }
//
//   3. [walker::walk_blocks]       length-prefixed blocks, size checks, zstd for
//         |                          the logic layer only
//         `-> WalkOutcome { blocks, logic_index }
//
//   4. [Circuit::assemble]         pure aggregation
//
// `writer::encode_container` is the inverse and produces containers stage 1-4
// accept unchanged.
// ====================================================================================
pub(crate) mod body;
pub mod circuit;
pub(crate) mod cursor;
pub(crate) mod header;
pub(crate) mod walker;
pub mod writer;

use std::time::Instant;

use crate::config::BlueprintConfig;
use crate::error::BlueprintError;

pub use circuit::{Block, Circuit};
pub use writer::LayerBuffer;

/// A parsed circuit together with facts about its encoding.
#[derive(Debug)]
pub(crate) struct ParsedContainer {
    pub circuit: Circuit,
    pub body_len: usize,
}

/// Runs the full parse pipeline over the raw blueprint bytes.
pub(crate) fn parse_container(
    input: &[u8],
    config: &BlueprintConfig,
) -> Result<ParsedContainer, BlueprintError> {
    let start = Instant::now();

    let header = header::validate_header(input)?;
    let body = body::decode_body(input)?;
    let walk = walker::walk_blocks(&body.bytes, body.dims, config.layer_limit())?;
    let circuit = Circuit::assemble(header, body.dims, walk.blocks, walk.logic_index);

    log::debug!(
        "parsed {}x{} blueprint: {} blocks, logic at #{}, in {:.2?}",
        circuit.width(),
        circuit.height(),
        circuit.blocks().len(),
        circuit.logic_index(),
        start.elapsed()
    );
    log_metric!(
        "event" = "parse_blueprint",
        "width" = circuit.width(),
        "height" = circuit.height(),
        "blocks" = circuit.blocks().len(),
        "elapsed_us" = start.elapsed().as_micros()
    );

    Ok(ParsedContainer {
        circuit,
        body_len: body.bytes.len(),
    })
}

#[cfg(test)]
pub(crate) mod fixtures;
