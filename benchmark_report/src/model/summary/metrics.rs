//!
//! Per-system latency metrics inside a benchmark summary.
//!

use crate::model::run::Run;
use crate::util::round_to;

///
/// Per-system latency metrics inside a benchmark summary.
///
/// Timings are absent when the system could not execute the benchmark.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Metrics {
    /// Average latency in milliseconds, rounded to two decimals.
    pub avg_ms: Option<f64>,
    /// Minimum latency in milliseconds, rounded to two decimals.
    pub min_ms: Option<f64>,
    /// Maximum latency in milliseconds, rounded to two decimals.
    pub max_ms: Option<f64>,
    /// The number of rows or hits returned by the last measured execution.
    pub result_count: Option<u64>,
    /// The number of measured executions.
    pub runs: u64,
    /// Whether the system cannot execute this benchmark at all.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub not_possible: bool,
    /// The human-readable explanation of the capability gap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitation: Option<String>,
}

impl Metrics {
    ///
    /// Metrics measured from a completed run.
    ///
    pub fn measured(run: &Run) -> Self {
        Self {
            avg_ms: Some(round_to(run.average_ms(), 2)),
            min_ms: Some(round_to(run.min_ms(), 2)),
            max_ms: Some(round_to(run.max_ms(), 2)),
            result_count: Some(run.result_count),
            runs: run.samples_ms.len() as u64,
            not_possible: false,
            limitation: None,
        }
    }

    ///
    /// Placeholder metrics for a system that cannot execute the benchmark.
    ///
    pub fn not_possible(limitation: Option<String>) -> Self {
        Self {
            avg_ms: None,
            min_ms: None,
            max_ms: None,
            result_count: None,
            runs: 0,
            not_possible: true,
            limitation,
        }
    }
}
