// In: src/ffi/python.rs

use log::LevelFilter;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};
use std::fs::OpenOptions;
use std::sync::Once;

use crate::config::{BlueprintConfig, CompressionProfile};

//==================================================================================
// I. Parsing & Rendering
//==================================================================================

/// Parses a blueprint and returns its board as a dict with raw RGBA8 `pixels`.
#[pyfunction]
#[pyo3(name = "parse_blueprint")]
pub fn parse_blueprint_py(py: Python<'_>, blueprint: &str) -> PyResult<PyObject> {
    let circuit = py.allow_threads(|| crate::bridge::parse_blueprint(blueprint))?;

    let result_dict = PyDict::new_bound(py);
    result_dict.set_item("version", circuit.version())?;
    result_dict.set_item("checksum", circuit.checksum())?;
    result_dict.set_item("width", circuit.width())?;
    result_dict.set_item("height", circuit.height())?;
    result_dict.set_item("logic_index", circuit.logic_index())?;
    result_dict.set_item("pixels", PyBytes::new_bound(py, circuit.logic_pixels()))?;

    Ok(result_dict.into_any().unbind())
}

/// Validates a blueprint and reports its block structure without returning pixels.
#[pyfunction]
#[pyo3(name = "analyze_blueprint")]
pub fn analyze_blueprint_py(py: Python<'_>, blueprint: &str) -> PyResult<PyObject> {
    let stats = py.allow_threads(|| crate::bridge::analyze_blueprint(blueprint))?;

    let blocks: Vec<(usize, u32, u32, u32, bool)> = stats
        .blocks
        .iter()
        .map(|b| (b.offset, b.size, b.layer_id, b.uncompressed_size, b.decoded))
        .collect();

    let result_dict = PyDict::new_bound(py);
    result_dict.set_item("version", stats.version)?;
    result_dict.set_item("checksum", stats.checksum)?;
    result_dict.set_item("width", stats.width)?;
    result_dict.set_item("height", stats.height)?;
    result_dict.set_item("text_size", stats.text_size)?;
    result_dict.set_item("body_size", stats.body_size)?;
    result_dict.set_item("logic_index", stats.logic_index)?;
    result_dict.set_item("blocks", blocks)?;

    Ok(result_dict.into_any().unbind())
}

//==================================================================================
// II. Encoding
//==================================================================================

/// Encodes a raw RGBA8 board into blueprint text.
#[pyfunction]
#[pyo3(name = "encode_blueprint", signature = (width, height, rgba, profile = "balanced"))]
pub fn encode_blueprint_py(
    py: Python<'_>,
    width: u32,
    height: u32,
    rgba: &[u8],
    profile: &str,
) -> PyResult<String> {
    let parsed_profile = match profile.to_lowercase().as_str() {
        "fast" => CompressionProfile::Fast,
        "balanced" => CompressionProfile::Balanced,
        "high_compression" => CompressionProfile::HighCompression,
        _ => {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Invalid profile. Must be 'fast', 'balanced', or 'high_compression'.",
            ))
        }
    };
    let config = BlueprintConfig {
        profile: parsed_profile,
        ..Default::default()
    };

    let text = py.allow_threads(|| {
        crate::bridge::encode_blueprint_with_config(width, height, rgba, &[], &config)
    })?;
    Ok(text)
}

//==================================================================================
// III. Logging
//==================================================================================

static INIT_LOGGER: Once = Once::new();

#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None, level = "debug"))]
pub fn enable_verbose_logging_py(log_file: Option<String>, level: &str) -> PyResult<()> {
    let filter = match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Invalid level. Must be 'error', 'warn', 'info', 'debug', or 'trace'.",
            ))
        }
    };

    let file = match log_file {
        Some(filename) => Some(OpenOptions::new().append(true).create(true).open(filename)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(filter);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
