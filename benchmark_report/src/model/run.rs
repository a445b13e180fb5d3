//!
//! A benchmark run against one database system.
//!

use crate::model::system::SystemKind;

///
/// A benchmark run against one database system.
///
/// The latency samples are ordered as measured and are never mutated once
/// the run is complete.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Run {
    /// The benchmark name.
    pub benchmark_name: String,
    /// The system the benchmark ran against.
    pub system: SystemKind,
    /// The ordered wall-clock latency samples in milliseconds.
    pub samples_ms: Vec<f64>,
    /// The number of rows or hits returned by the last measured execution.
    pub result_count: u64,
}

impl Run {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        benchmark_name: String,
        system: SystemKind,
        samples_ms: Vec<f64>,
        result_count: u64,
    ) -> Self {
        Self {
            benchmark_name,
            system,
            samples_ms,
            result_count,
        }
    }

    ///
    /// Average latency in milliseconds.
    ///
    pub fn average_ms(&self) -> f64 {
        if self.samples_ms.is_empty() {
            return 0.0;
        }

        self.samples_ms.iter().sum::<f64>() / (self.samples_ms.len() as f64)
    }

    ///
    /// Minimum latency in milliseconds.
    ///
    pub fn min_ms(&self) -> f64 {
        if self.samples_ms.is_empty() {
            return 0.0;
        }

        self.samples_ms.iter().copied().fold(f64::INFINITY, f64::min)
    }

    ///
    /// Maximum latency in milliseconds.
    ///
    pub fn max_ms(&self) -> f64 {
        self.samples_ms.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::Run;
    use crate::model::system::SystemKind;

    #[test]
    fn averages() {
        let run = Run::new(
            "Top-N Query".to_owned(),
            SystemKind::ClickHouse,
            vec![10.0, 20.0, 30.0],
            10,
        );
        assert_eq!(run.average_ms(), 20.0);
        assert_eq!(run.min_ms(), 10.0);
        assert_eq!(run.max_ms(), 30.0);
    }

    #[test]
    fn empty_samples() {
        let run = Run::new(
            "Top-N Query".to_owned(),
            SystemKind::Elasticsearch,
            vec![],
            0,
        );
        assert_eq!(run.average_ms(), 0.0);
        assert_eq!(run.min_ms(), 0.0);
        assert_eq!(run.max_ms(), 0.0);
    }
}
