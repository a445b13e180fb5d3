//!
//! The result file for one scale tier.
//!

pub mod run_config;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::model::scale::Scale;
use crate::model::storage::comparison::Comparison as StorageComparison;
use crate::model::summary::Summary;

use self::run_config::RunConfig;

///
/// The result file for one scale tier.
///
/// Produced once by a full load-and-benchmark pass, written to JSON, and
/// read many times afterwards. The JSON round trip is lossless.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleDataset {
    /// The dataset name, e.g. `healthcare_10m`.
    pub dataset: String,
    /// The scale tier.
    pub scale: Scale,
    /// When the benchmark pass finished.
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// The measurement configuration.
    pub config: RunConfig,
    /// The benchmark summaries, keyed by benchmark name.
    pub benchmarks: BTreeMap<String, Summary>,
    /// The storage comparison, when measured.
    pub storage: Option<StorageComparison>,
}

impl ScaleDataset {
    ///
    /// A shortcut constructor for a dataset without results yet.
    ///
    pub fn new(scale: Scale, config: RunConfig) -> Self {
        Self {
            dataset: scale.dataset_name(),
            scale,
            timestamp: chrono::Utc::now(),
            config,
            benchmarks: BTreeMap::new(),
            storage: None,
        }
    }

    ///
    /// The canonical result file name for this dataset.
    ///
    pub fn file_name(&self) -> String {
        format!("{}_benchmark_results.json", self.dataset)
    }
}

impl TryFrom<PathBuf> for ScaleDataset {
    type Error = anyhow::Error;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Result file {path:?} reading: {error}"))?;
        let dataset: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Result file {path:?} parsing: {error}"))?;
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::run_config::RunConfig;
    use super::ScaleDataset;
    use crate::model::category::Category;
    use crate::model::run::Run;
    use crate::model::scale::Scale;
    use crate::model::storage::comparison::Comparison as StorageComparison;
    use crate::model::storage::Measurement;
    use crate::model::summary::Summary;
    use crate::model::system::SystemKind;

    fn sample_dataset() -> ScaleDataset {
        let mut dataset = ScaleDataset::new(
            Scale::M1,
            RunConfig {
                warmup_runs: 2,
                measured_runs: 5,
            },
        );

        let clickhouse = Run::new(
            "Simple Aggregation".to_owned(),
            SystemKind::ClickHouse,
            vec![10.5, 11.5, 12.0, 10.0, 11.0],
            15,
        );
        let elasticsearch = Run::new(
            "Simple Aggregation".to_owned(),
            SystemKind::Elasticsearch,
            vec![8.0, 8.5, 9.0, 8.5, 8.0],
            15,
        );
        dataset.benchmarks.insert(
            "Simple Aggregation".to_owned(),
            Summary::compare(
                "Simple Aggregation".to_owned(),
                Category::Query,
                &clickhouse,
                Some(&elasticsearch),
                None,
            ),
        );

        let join = Run::new(
            "Patient-Event JOIN".to_owned(),
            SystemKind::ClickHouse,
            vec![55.0; 5],
            20,
        );
        dataset.benchmarks.insert(
            "Patient-Event JOIN".to_owned(),
            Summary::compare(
                "Patient-Event JOIN".to_owned(),
                Category::Capability,
                &join,
                None,
                Some("Elasticsearch cannot perform JOINs".to_owned()),
            ),
        );

        dataset.storage = Some(StorageComparison::new(vec![
            Measurement::new(
                SystemKind::ClickHouse,
                "medical_events".to_owned(),
                500_000,
                7_340_032,
            ),
            Measurement::new(
                SystemKind::Elasticsearch,
                "healthcare_1m_medical_events".to_owned(),
                500_000,
                97_517_568,
            ),
        ]));

        dataset
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let dataset = sample_dataset();
        let json = serde_json::to_string_pretty(&dataset).expect("Always valid");
        let back: ScaleDataset = serde_json::from_str(json.as_str()).expect("Always valid");
        assert_eq!(back, dataset);
    }

    #[test]
    fn file_name_is_namespaced_by_scale() {
        let dataset = sample_dataset();
        assert_eq!(
            dataset.file_name(),
            "healthcare_1m_benchmark_results.json"
        );
    }
}
