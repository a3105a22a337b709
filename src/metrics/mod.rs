// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{gather_metrics, DEEPL_API_CALLS, TOOL_CALLS, TOOL_DURATION};

/// Helper to record a finished tool invocation
pub fn record_tool_call(tool: &str, outcome: &str, duration_secs: f64) {
    TOOL_CALLS.with_label_values(&[tool, outcome]).inc();
    TOOL_DURATION.with_label_values(&[tool]).observe(duration_secs);
}

/// Helper to record a DeepL API round trip
pub fn record_deepl_call(endpoint: &str, status_code: u16) {
    DEEPL_API_CALLS
        .with_label_values(&[endpoint, &status_code.to_string()])
        .inc();
}
