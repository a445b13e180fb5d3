//!
//! The measurement configuration recorded with each result file.
//!

///
/// The measurement configuration recorded with each result file.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunConfig {
    /// Executions discarded before measurement starts.
    pub warmup_runs: u64,
    /// Executions that contribute latency samples.
    pub measured_runs: u64,
}
