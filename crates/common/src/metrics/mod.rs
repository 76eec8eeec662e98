//! Metrics and observability utilities
//!
//! Thin wrappers over the `metrics` facade with standardized naming.
//! Nothing is exported unless the embedding application installs a recorder.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Unit};

/// Metrics prefix for all Graphcite metrics
pub const METRICS_PREFIX: &str = "graphcite";

/// Buckets for `graphcite_analysis_duration_seconds` (in seconds).
///
/// Nothing in graphcite installs an exporter. Embedders that do should pass
/// these to their recorder, e.g. `PrometheusBuilder::set_buckets_for_metric`
/// with `Matcher::Suffix("duration_seconds")`. All-pairs centrality on a few
/// thousand works lands in the upper buckets.
pub const ANALYSIS_BUCKETS: &[f64] = &[
    0.001,  // 1ms
    0.010,  // 10ms
    0.050,  // 50ms
    0.100,  // 100ms
    0.500,  // 500ms
    1.000,  // 1s
    5.000,  // 5s
    30.00,  // 30s
    120.0,  // 2m
];

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_analysis_runs_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of analysis runs by algorithm"
    );

    describe_histogram!(
        format!("{}_analysis_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Analysis run time in seconds"
    );

    describe_gauge!(
        format!("{}_analysis_nodes", METRICS_PREFIX),
        Unit::Count,
        "Number of works in the graph of the last run"
    );

    describe_counter!(
        format!("{}_dangling_references_total", METRICS_PREFIX),
        Unit::Count,
        "References to works outside the corpus, skipped during indexing"
    );

    tracing::info!("Metrics registered");
}

/// Record one completed analysis run
pub fn record_analysis(algorithm: &str, duration_secs: f64, node_count: usize) {
    counter!(
        format!("{}_analysis_runs_total", METRICS_PREFIX),
        "algorithm" => algorithm.to_string()
    )
    .increment(1);

    histogram!(
        format!("{}_analysis_duration_seconds", METRICS_PREFIX),
        "algorithm" => algorithm.to_string()
    )
    .record(duration_secs);

    gauge!(
        format!("{}_analysis_nodes", METRICS_PREFIX),
        "algorithm" => algorithm.to_string()
    )
    .set(node_count as f64);
}

/// Record references skipped because their target is not in the corpus
pub fn record_dangling_references(count: usize) {
    counter!(format!("{}_dangling_references_total", METRICS_PREFIX)).increment(count as u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_buckets_sorted() {
        let mut prev = 0.0;
        for &bucket in ANALYSIS_BUCKETS {
            assert!(bucket > prev);
            prev = bucket;
        }
    }

    #[test]
    fn test_record_without_recorder() {
        register_metrics();
        record_analysis("k_core", 0.002, 12);
        record_dangling_references(3);
        // No recorder installed: just verify it runs without panic
    }
}
