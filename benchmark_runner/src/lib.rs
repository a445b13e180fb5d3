//!
//! The benchmark runner library.
//!

pub(crate) mod clients;
pub(crate) mod config;
pub(crate) mod filters;
pub(crate) mod generator;
pub(crate) mod loaders;
pub(crate) mod runner;
pub(crate) mod storage;
pub(crate) mod suite;
pub(crate) mod summary;
pub(crate) mod workflow;

pub use self::clients::clickhouse::ClickHouseClient;
pub use self::clients::elasticsearch::ElasticsearchClient;
pub use self::clients::ClientError;
pub use self::config::env_file;
pub use self::config::ClickHouseConfig;
pub use self::config::ElasticsearchConfig;
pub use self::filters::Filters;
pub use self::generator::DataGenerator;
pub use self::loaders::clickhouse::ClickHouseLoader;
pub use self::loaders::elasticsearch::ElasticsearchLoader;
pub use self::runner::QueryBencher;
pub use self::storage::StorageCollector;
pub use self::summary::Summary;
pub use self::workflow::Workflow;

use std::sync::Arc;
use std::sync::Mutex;

use colored::Colorize;

use benchmark_report::BenchmarkSummary;
use benchmark_report::RunConfig;
use benchmark_report::Scale;
use benchmark_report::ScaleDataset;

///
/// The benchmark runner.
///
/// Walks the suite catalog for one scale tier, runs every selected
/// benchmark against both systems, and assembles the result file.
///
pub struct BenchmarkRunner {
    /// The summary.
    summary: Arc<Mutex<Summary>>,
    /// The filters.
    filters: Filters,
}

impl BenchmarkRunner {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(summary: Arc<Mutex<Summary>>, filters: Filters) -> Self {
        Self { summary, filters }
    }

    ///
    /// Runs the suite and returns the result dataset.
    ///
    /// Benchmarks run sequentially so that they never contend with each
    /// other for server resources; only the concurrent-load benchmark fans
    /// out internally.
    ///
    pub fn run(
        self,
        clickhouse: &ClickHouseClient,
        elasticsearch: &ElasticsearchClient,
        scale: Scale,
        verbosity: bool,
        quiet: bool,
    ) -> anyhow::Result<ScaleDataset> {
        let mut dataset = ScaleDataset::new(
            scale,
            RunConfig {
                warmup_runs: runner::WARMUP_RUNS,
                measured_runs: runner::MEASURED_RUNS,
            },
        );

        for definition in suite::catalog(scale) {
            if !self.filters.check(&definition) {
                continue;
            }

            if !quiet {
                println!(
                    "     {} {} ({})",
                    "Running".bright_green().bold(),
                    definition.name,
                    definition.description,
                );
            }

            let clickhouse_run = QueryBencher::run_clickhouse(clickhouse, &definition)?;
            let elasticsearch_run = if definition.is_possible_on_elasticsearch() {
                Some(QueryBencher::run_elasticsearch(elasticsearch, &definition)?)
            } else {
                None
            };

            if verbosity {
                for run in std::iter::once(&clickhouse_run).chain(elasticsearch_run.iter()) {
                    println!(
                        "{:>13} samples {:?} ms ({} rows)",
                        run.system.to_string().bright_white(),
                        run.samples_ms
                            .iter()
                            .map(|sample| (sample * 100.0).round() / 100.0)
                            .collect::<Vec<f64>>(),
                        run.result_count,
                    );
                }
            }

            let benchmark = BenchmarkSummary::compare(
                definition.name.to_owned(),
                definition.category,
                &clickhouse_run,
                elasticsearch_run.as_ref(),
                definition.es_limitation.map(str::to_owned),
            );
            Summary::record(self.summary.clone(), &benchmark);
            dataset
                .benchmarks
                .insert(definition.key.to_owned(), benchmark);
        }

        dataset.timestamp = chrono::Utc::now();
        Ok(dataset)
    }
}
