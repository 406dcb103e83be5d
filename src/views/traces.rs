//! Trace shaping.

use crate::client::query::TraceFilter;
use crate::client::types::Trace;

/// Display form of a trace duration: stored milliseconds rendered as seconds
/// with two decimals, e.g. 125340 -> "125.34s". The raw value is untouched.
pub fn duration_display(duration_ms: u64) -> String {
    format!("{:.2}s", duration_ms as f64 / 1000.0)
}

/// Apply the local status filter to a fetched trace page.
///
/// The traces listing has no server-side status parameter, so this filter
/// only narrows the already-fetched page.
pub fn filter_traces(traces: &[Trace], status: TraceFilter) -> Vec<&Trace> {
    traces
        .iter()
        .filter(|t| status.matches(t.status))
        .collect()
}
