//! This file is the root of the `vcbview` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`container`, `kernels`, etc.)
//!     so the Rust compiler knows they exist, and re-exporting the public API.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into Python (feature `python`).

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod container;
pub mod kernels;

mod error;
#[cfg(feature = "python")]
mod ffi;

pub use bridge::{
    analyze_blueprint, encode_blueprint, encode_blueprint_with_config, parse_blueprint,
    parse_blueprint_with_config, render_rgba, BlockInfo, BlueprintStats, RenderTarget,
};
pub use config::{BlueprintConfig, CompressionProfile};
pub use container::{Block, Circuit, LayerBuffer};
pub use error::BlueprintError;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `vcbview` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn vcbview(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::parse_blueprint_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::analyze_blueprint_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::encode_blueprint_py, m)?)?;

    // --- Turn on logging for the parse pipeline ---
    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    Ok(())
}
