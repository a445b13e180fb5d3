//!
//! The benchmark runner summary element.
//!

use colored::Colorize;

use benchmark_report::BenchmarkSummary;
use benchmark_report::Speedup;
use benchmark_report::SystemKind;

///
/// The benchmark outcome.
///
#[derive(Debug)]
pub enum Outcome {
    /// Both systems ran the benchmark and one of them was faster.
    Decided {
        /// The faster system.
        winner: SystemKind,
        /// The slower average over the faster average.
        speedup: Speedup,
        /// The ClickHouse average latency in milliseconds.
        clickhouse_ms: f64,
        /// The Elasticsearch average latency in milliseconds.
        elasticsearch_ms: f64,
    },
    /// Elasticsearch cannot execute the benchmark at all.
    NotPossible {
        /// Why the benchmark is out of reach.
        limitation: String,
    },
}

///
/// The benchmark runner summary element.
///
#[derive(Debug)]
pub struct Element {
    /// The benchmark name.
    pub name: String,
    /// The benchmark outcome.
    pub outcome: Outcome,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, outcome: Outcome) -> Self {
        Self { name, outcome }
    }

    ///
    /// Builds an element from a finished benchmark comparison.
    ///
    pub fn from_summary(summary: &BenchmarkSummary) -> Self {
        let outcome = if summary.elasticsearch.not_possible {
            Outcome::NotPossible {
                limitation: summary
                    .elasticsearch
                    .limitation
                    .clone()
                    .unwrap_or_else(|| "not possible".to_owned()),
            }
        } else {
            Outcome::Decided {
                winner: summary.winner,
                speedup: summary.speedup,
                clickhouse_ms: summary.clickhouse.avg_ms.unwrap_or_default(),
                elasticsearch_ms: summary.elasticsearch.avg_ms.unwrap_or_default(),
            }
        };
        Self::new(summary.name.clone(), outcome)
    }

    ///
    /// Prints the element.
    ///
    pub fn print(&self) -> String {
        match self.outcome {
            Outcome::Decided {
                winner,
                speedup,
                clickhouse_ms,
                elasticsearch_ms,
            } => {
                let winner = match winner {
                    SystemKind::ClickHouse => "CLICKHOUSE".yellow(),
                    SystemKind::Elasticsearch => "ELASTICSEARCH".cyan(),
                };
                format!(
                    "{:>13} {} ({}, ClickHouse {clickhouse_ms:.2} ms, Elasticsearch {elasticsearch_ms:.2} ms)",
                    winner,
                    self.name,
                    speedup.to_string().bright_white(),
                )
            }
            Outcome::NotPossible { ref limitation } => {
                format!(
                    "{:>13} {} ({limitation})",
                    "NOT POSSIBLE".bright_black(),
                    self.name,
                )
            }
        }
    }
}
