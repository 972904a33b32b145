// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the vcbview library. It wraps the
// `container` pipeline behind plain functions that take blueprint text and a
// config, and return either a `Circuit`, a render-ready buffer, or a report.
//
// Data Flow (Rendering):
//
//   1. [Caller]                               -> blueprint text (chat message, attachment)
//         |
//   2. [Stateless API (render_rgba)]          -> container::parse_container
//         |
//         `-> Returns `RenderTarget { width, height, rgba }` for a PNG encoder
//
// Data Flow (Encoding):
//
//   1. [Stateless API (encode_blueprint)]     -> container::writer::encode_container
//         |
//         `-> Returns the blueprint text
//
// ====================================================================================
pub(crate) mod format;
pub mod stateless_api;

// --- Stateless API ---
pub use stateless_api::{
    analyze_blueprint, encode_blueprint, encode_blueprint_with_config, parse_blueprint,
    parse_blueprint_with_config, render_rgba, RenderTarget,
};

// --- Report Structs ---
pub use format::{BlockInfo, BlueprintStats};
