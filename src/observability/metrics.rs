//! Metrics for the mart build pipeline
//!
//! This module provides a straightforward API for recording metrics using
//! the standard Prometheus naming conventions.

use std::fmt;

/// Enum representing all metric names used in the system
/// This eliminates magic strings and provides compile-time safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Pipeline-level metrics
    MartRunsStarted,
    MartBuildDuration,

    // Aggregation metrics
    AggregateSummariesBuilt,

    // Composition metrics
    ComposeRowsComposed,
    ComposeMissingCustomer,

    // Qualification metrics
    QualifyRecordsRetained,
    QualifyRecordsDropped,

    // Output metrics
    OutputRecordsWritten,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::MartRunsStarted => "order_mart_runs_started_total",
            MetricName::MartBuildDuration => "order_mart_build_duration_seconds",
            MetricName::AggregateSummariesBuilt => "order_mart_aggregate_summaries_built",
            MetricName::ComposeRowsComposed => "order_mart_compose_rows_composed_total",
            MetricName::ComposeMissingCustomer => "order_mart_compose_missing_customer_total",
            MetricName::QualifyRecordsRetained => "order_mart_qualify_records_retained_total",
            MetricName::QualifyRecordsDropped => "order_mart_qualify_records_dropped_total",
            MetricName::OutputRecordsWritten => "order_mart_output_records_written_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Install the Prometheus recorder; call once at process start.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    builder
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;
    tracing::info!("Metrics system initialized");
    Ok(())
}

// ============================================================================
// Pipeline Metrics
// ============================================================================

pub mod mart {
    use super::MetricName;

    /// Record the start of a mart build run
    pub fn run_started() {
        ::metrics::counter!(MetricName::MartRunsStarted.as_str()).increment(1);
    }

    /// Record the wall-clock duration of a build
    pub fn build_duration(secs: f64) {
        ::metrics::histogram!(MetricName::MartBuildDuration.as_str()).record(secs);
    }
}

// ============================================================================
// Aggregation Metrics
// ============================================================================

pub mod aggregate {
    use super::MetricName;

    /// Record how many per-order summaries one child aggregation produced
    pub fn summaries_built(entity: &str, count: usize) {
        ::metrics::histogram!(
            MetricName::AggregateSummariesBuilt.as_str(),
            "entity" => entity.to_string()
        )
        .record(count as f64);
    }
}

// ============================================================================
// Composition Metrics
// ============================================================================

pub mod compose {
    use super::MetricName;

    /// Record the composed base-relation cardinality
    pub fn rows_composed(count: usize) {
        ::metrics::counter!(MetricName::ComposeRowsComposed.as_str()).increment(count as u64);
    }

    /// Record orders excluded for lacking a customer row
    pub fn missing_customer(count: usize) {
        ::metrics::counter!(MetricName::ComposeMissingCustomer.as_str()).increment(count as u64);
    }
}

// ============================================================================
// Qualification Metrics
// ============================================================================

pub mod qualify {
    use super::MetricName;

    /// Record rows that passed the qualification filter
    pub fn records_retained(count: usize) {
        ::metrics::counter!(MetricName::QualifyRecordsRetained.as_str()).increment(count as u64);
    }

    /// Record rows the qualification filter dropped
    pub fn records_dropped(count: usize) {
        ::metrics::counter!(MetricName::QualifyRecordsDropped.as_str()).increment(count as u64);
    }
}

// ============================================================================
// Output Metrics
// ============================================================================

pub mod output {
    use super::MetricName;

    /// Record records handed to the output port
    pub fn records_written(count: usize) {
        ::metrics::counter!(MetricName::OutputRecordsWritten.as_str()).increment(count as u64);
    }
}
