//! Counters
//!
//! Recorded through the `metrics` facade. Without an installed recorder the
//! calls are no-ops.

/// Counter metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMetric {
    /// Trend classifications, labelled by trend
    Classification,
    /// Analyses refused before classification, labelled by reason
    AnalysisRejected,
    /// History exports written
    HistoryExported,
}

impl CounterMetric {
    pub fn name(&self) -> &'static str {
        match self {
            CounterMetric::Classification => "crash_tool_classifications_total",
            CounterMetric::AnalysisRejected => "crash_tool_analysis_rejected_total",
            CounterMetric::HistoryExported => "crash_tool_history_exports_total",
        }
    }
}

/// Increment a counter with a single `kind` label
pub fn increment_counter(metric: CounterMetric, kind: &'static str) {
    let metric_name = metric.name();
    ::metrics::counter!(metric_name, "kind" => kind).increment(1);
    tracing::trace!(metric = metric_name, kind, "Counter incremented");
}
