//! Foreign-language bindings. Only built with the `python` feature.

pub mod python;

pub use python::{
    analyze_blueprint_py, enable_verbose_logging_py, encode_blueprint_py, parse_blueprint_py,
};
