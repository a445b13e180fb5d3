//!
//! The cross-scale comparison assembled from saved result files.
//!

pub mod row;

use std::collections::BTreeMap;

use colored::Colorize;
use itertools::Itertools;

use crate::model::dataset::ScaleDataset;
use crate::model::scale::Scale;

use self::row::Outcome;
use self::row::Row;

///
/// The cross-scale comparison assembled from saved result files.
///
/// Each row is one benchmark with its outcome at every scale tier it was
/// run at; the storage map carries the compression ratio per tier.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Comparison {
    /// The scale tiers found in the result files, ascending.
    pub scales: Vec<Scale>,
    /// The per-benchmark rows.
    pub benchmarks: Vec<Row>,
    /// The storage compression ratio per scale tier, when measured.
    pub storage_ratios: BTreeMap<Scale, Option<f64>>,
}

impl Comparison {
    ///
    /// Assembles the comparison from one result file per scale tier.
    ///
    pub fn new(datasets: &[ScaleDataset]) -> Self {
        let scales: Vec<Scale> = datasets
            .iter()
            .map(|dataset| dataset.scale)
            .sorted()
            .dedup()
            .collect();

        let names: Vec<String> = datasets
            .iter()
            .flat_map(|dataset| dataset.benchmarks.keys().cloned())
            .sorted()
            .dedup()
            .collect();

        let benchmarks = names
            .into_iter()
            .map(|name| {
                let mut category = None;
                let mut outcomes = BTreeMap::new();
                for dataset in datasets.iter() {
                    if let Some(summary) = dataset.benchmarks.get(name.as_str()) {
                        category.get_or_insert(summary.category);
                        outcomes.insert(dataset.scale, Outcome::from(summary));
                    }
                }
                Row {
                    name,
                    category: category.expect("Always exists"),
                    outcomes,
                }
            })
            .collect();

        let storage_ratios = datasets
            .iter()
            .map(|dataset| {
                (
                    dataset.scale,
                    dataset
                        .storage
                        .as_ref()
                        .and_then(|storage| storage.compression_ratio),
                )
            })
            .collect();

        Self {
            scales,
            benchmarks,
            storage_ratios,
        }
    }

    ///
    /// Prints the comparison as a console table.
    ///
    pub fn print(&self) {
        for row in self.benchmarks.iter() {
            println!(
                "{:32} [{}]",
                row.name.bold(),
                row.category.to_string().bright_black()
            );
            for (scale, outcome) in row.outcomes.iter() {
                println!(
                    "    {:>4}: {} {} ({})",
                    scale.to_string(),
                    "winner".bright_black(),
                    outcome.winner.to_string().bright_green().bold(),
                    outcome.speedup,
                );
            }
        }

        for (scale, ratio) in self.storage_ratios.iter() {
            let rendered = match ratio {
                Some(ratio) => format!("{ratio:.1}x").bright_green().bold(),
                None => "not measured".bright_black(),
            };
            println!(
                "{:32} {:>4}: {}",
                "Storage Compression".bold(),
                scale.to_string(),
                rendered,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Comparison;
    use crate::model::category::Category;
    use crate::model::dataset::run_config::RunConfig;
    use crate::model::dataset::ScaleDataset;
    use crate::model::run::Run;
    use crate::model::scale::Scale;
    use crate::model::summary::speedup::Speedup;
    use crate::model::summary::Summary;
    use crate::model::system::SystemKind;

    fn dataset(scale: Scale, clickhouse_ms: f64, elasticsearch_ms: f64) -> ScaleDataset {
        let mut dataset = ScaleDataset::new(
            scale,
            RunConfig {
                warmup_runs: 2,
                measured_runs: 5,
            },
        );
        let clickhouse = Run::new(
            "Top-N Query".to_owned(),
            SystemKind::ClickHouse,
            vec![clickhouse_ms; 5],
            10,
        );
        let elasticsearch = Run::new(
            "Top-N Query".to_owned(),
            SystemKind::Elasticsearch,
            vec![elasticsearch_ms; 5],
            10,
        );
        dataset.benchmarks.insert(
            "Top-N Query".to_owned(),
            Summary::compare(
                "Top-N Query".to_owned(),
                Category::Query,
                &clickhouse,
                Some(&elasticsearch),
                None,
            ),
        );
        dataset
    }

    #[test]
    fn rows_span_scales() {
        let datasets = vec![
            dataset(Scale::M10, 10.0, 30.0),
            dataset(Scale::M1, 20.0, 10.0),
        ];
        let comparison = Comparison::new(datasets.as_slice());

        assert_eq!(comparison.scales, vec![Scale::M1, Scale::M10]);
        assert_eq!(comparison.benchmarks.len(), 1);

        let row = &comparison.benchmarks[0];
        assert_eq!(
            row.outcomes
                .get(&Scale::M1)
                .expect("Always exists")
                .winner,
            SystemKind::Elasticsearch
        );
        let at_10m = row.outcomes.get(&Scale::M10).expect("Always exists");
        assert_eq!(at_10m.winner, SystemKind::ClickHouse);
        assert_eq!(at_10m.speedup, Speedup::Ratio(3.0));
    }
}
