// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec, Encoder,
    HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // TOOL METRICS
    // ============================================================================

    /// Total tool invocations
    pub static ref TOOL_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("tool_calls_total", "Total MCP tool invocations"),
        &["tool", "outcome"], // outcome: success, or the error kind
        REGISTRY
    ).unwrap();

    /// Tool invocation duration
    pub static ref TOOL_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("tool_call_duration_seconds", "Tool invocation duration in seconds")
            .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["tool"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // DEEPL API METRICS
    // ============================================================================

    /// Total DeepL API calls
    pub static ref DEEPL_API_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("deepl_api_calls_total", "Total DeepL API calls"),
        &["endpoint", "status_code"], // status_code 0: transport failure
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_metrics_are_exported() {
        crate::metrics::record_tool_call("get_usage", "success", 0.02);
        crate::metrics::record_deepl_call("usage", 200);

        let metrics = gather_metrics();
        assert!(metrics.contains("tool_calls_total"));
        assert!(metrics.contains("tool_call_duration_seconds"));
        assert!(metrics.contains("deepl_api_calls_total"));
    }
}
