//! Structured diagnostics for the parse and encode pipelines.
//!
//! The `log_metric!` macro emits one key/value line per event through the `log`
//! facade at debug level. It is compiled out of release builds entirely.

/// Logs a structured key-value metric line, only in debug builds.
///
/// # Example
/// ```ignore
/// log_metric!("event" = "parse_blueprint", "blocks" = 3);
/// ```
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            log::debug!("VCBVIEW_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}
