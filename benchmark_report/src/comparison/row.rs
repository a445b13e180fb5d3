//!
//! One benchmark compared across scale tiers.
//!

use std::collections::BTreeMap;

use crate::model::category::Category;
use crate::model::scale::Scale;
use crate::model::summary::speedup::Speedup;
use crate::model::summary::Summary;
use crate::model::system::SystemKind;

///
/// The per-scale outcome of one benchmark.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    /// The winning system at this scale.
    pub winner: SystemKind,
    /// The slower-over-faster ratio at this scale.
    pub speedup: Speedup,
    /// The ClickHouse average latency in milliseconds.
    pub clickhouse_avg_ms: Option<f64>,
    /// The Elasticsearch average latency in milliseconds.
    pub elasticsearch_avg_ms: Option<f64>,
}

impl From<&Summary> for Outcome {
    fn from(summary: &Summary) -> Self {
        Self {
            winner: summary.winner,
            speedup: summary.speedup,
            clickhouse_avg_ms: summary.clickhouse.avg_ms,
            elasticsearch_avg_ms: summary.elasticsearch.avg_ms,
        }
    }
}

///
/// One benchmark compared across scale tiers.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    /// The benchmark name.
    pub name: String,
    /// The benchmark category.
    pub category: Category,
    /// The outcome per scale tier the benchmark was run at.
    pub outcomes: BTreeMap<Scale, Outcome>,
}
