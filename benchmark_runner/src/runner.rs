//!
//! The query bencher.
//!

use std::time::Instant;

use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

use benchmark_report::BenchmarkRun;
use benchmark_report::SystemKind;

use crate::clients::clickhouse::ClickHouseClient;
use crate::clients::elasticsearch::ElasticsearchClient;
use crate::clients::ClientError;
use crate::suite::definition::Definition;

/// The number of unmeasured executions before timing starts.
pub const WARMUP_RUNS: u64 = 2;

/// The number of measured executions per benchmark.
pub const MEASURED_RUNS: u64 = 5;

/// The fan-out of the concurrent benchmark: queries in flight per round.
pub const CONCURRENT_FANOUT: usize = 5;

/// The number of measured rounds of the concurrent benchmark.
pub const CONCURRENT_ROUNDS: u64 = 3;

///
/// The query bencher: executes one benchmark definition against one system
/// and returns the measured latency samples.
///
/// Sequential benchmarks run `WARMUP_RUNS` unmeasured executions and then
/// `MEASURED_RUNS` timed ones. The concurrent benchmark instead times each
/// round of `CONCURRENT_FANOUT` simultaneous queries, so its samples are
/// round latencies rather than query latencies.
///
pub struct QueryBencher;

impl QueryBencher {
    ///
    /// Runs the benchmark against ClickHouse.
    ///
    pub fn run_clickhouse(
        client: &ClickHouseClient,
        definition: &Definition,
    ) -> Result<BenchmarkRun, ClientError> {
        if definition.concurrent {
            return Self::run_clickhouse_concurrent(client, definition);
        }

        for _ in 0..WARMUP_RUNS {
            client.execute(definition.sql.as_str())?;
        }

        let mut samples_ms = Vec::with_capacity(MEASURED_RUNS as usize);
        let mut result_count = 0;
        for _ in 0..MEASURED_RUNS {
            let start = Instant::now();
            let output = client.execute(definition.sql.as_str())?;
            samples_ms.push(start.elapsed().as_secs_f64() * 1000.0);
            result_count = output.rows;
        }

        Ok(BenchmarkRun::new(
            definition.name.to_owned(),
            SystemKind::ClickHouse,
            samples_ms,
            result_count,
        ))
    }

    ///
    /// Runs the benchmark against Elasticsearch.
    ///
    /// Fails when the definition carries no query DSL, which the caller is
    /// expected to rule out via [`Definition::is_possible_on_elasticsearch`].
    ///
    pub fn run_elasticsearch(
        client: &ElasticsearchClient,
        definition: &Definition,
    ) -> Result<BenchmarkRun, ClientError> {
        let (index, dsl) = Self::elasticsearch_query(definition)?;

        if definition.concurrent {
            return Self::run_elasticsearch_concurrent(client, definition, index, dsl);
        }

        for _ in 0..WARMUP_RUNS {
            client.search(index, dsl)?;
        }

        let mut samples_ms = Vec::with_capacity(MEASURED_RUNS as usize);
        let mut result_count = 0;
        for _ in 0..MEASURED_RUNS {
            let start = Instant::now();
            let output = client.search(index, dsl)?;
            samples_ms.push(start.elapsed().as_secs_f64() * 1000.0);
            result_count = output.hits;
        }

        Ok(BenchmarkRun::new(
            definition.name.to_owned(),
            SystemKind::Elasticsearch,
            samples_ms,
            result_count,
        ))
    }

    ///
    /// Builds the thread pool for the concurrent fan-out.
    ///
    /// The global pool is sized by the core count and may admit fewer than
    /// `CONCURRENT_FANOUT` blocking requests at once, which would serialize
    /// parts of a round and inflate its latency.
    ///
    fn fanout_pool() -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(CONCURRENT_FANOUT)
            .build()
            .expect("Thread pool configuration failure")
    }

    ///
    /// Times `CONCURRENT_ROUNDS` rounds of `CONCURRENT_FANOUT` simultaneous
    /// ClickHouse queries. The first query failure aborts the benchmark.
    ///
    fn run_clickhouse_concurrent(
        client: &ClickHouseClient,
        definition: &Definition,
    ) -> Result<BenchmarkRun, ClientError> {
        let pool = Self::fanout_pool();

        let mut samples_ms = Vec::with_capacity(CONCURRENT_ROUNDS as usize);
        let mut result_count = 0;
        for _ in 0..CONCURRENT_ROUNDS {
            let start = Instant::now();
            let outputs = pool.install(|| {
                (0..CONCURRENT_FANOUT)
                    .into_par_iter()
                    .map(|_| client.execute(definition.sql.as_str()))
                    .collect::<Result<Vec<_>, ClientError>>()
            })?;
            samples_ms.push(start.elapsed().as_secs_f64() * 1000.0);
            result_count = outputs.last().map(|output| output.rows).unwrap_or_default();
        }

        Ok(BenchmarkRun::new(
            definition.name.to_owned(),
            SystemKind::ClickHouse,
            samples_ms,
            result_count,
        ))
    }

    ///
    /// The Elasticsearch rendition of the concurrent round loop.
    ///
    fn run_elasticsearch_concurrent(
        client: &ElasticsearchClient,
        definition: &Definition,
        index: &str,
        dsl: &serde_json::Value,
    ) -> Result<BenchmarkRun, ClientError> {
        let pool = Self::fanout_pool();

        let mut samples_ms = Vec::with_capacity(CONCURRENT_ROUNDS as usize);
        let mut result_count = 0;
        for _ in 0..CONCURRENT_ROUNDS {
            let start = Instant::now();
            let outputs = pool.install(|| {
                (0..CONCURRENT_FANOUT)
                    .into_par_iter()
                    .map(|_| client.search(index, dsl))
                    .collect::<Result<Vec<_>, ClientError>>()
            })?;
            samples_ms.push(start.elapsed().as_secs_f64() * 1000.0);
            result_count = outputs.last().map(|output| output.hits).unwrap_or_default();
        }

        Ok(BenchmarkRun::new(
            definition.name.to_owned(),
            SystemKind::Elasticsearch,
            samples_ms,
            result_count,
        ))
    }

    fn elasticsearch_query(
        definition: &Definition,
    ) -> Result<(&str, &serde_json::Value), ClientError> {
        match (definition.es_index.as_deref(), definition.dsl.as_ref()) {
            (Some(index), Some(dsl)) => Ok((index, dsl)),
            _ => Err(ClientError::query(
                SystemKind::Elasticsearch,
                format!("benchmark `{}` has no Elasticsearch query", definition.key),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use rayon::iter::IntoParallelIterator;
    use rayon::iter::ParallelIterator;

    use benchmark_report::Scale;

    use crate::suite;

    #[test]
    fn fanout_pool_admits_a_full_round_at_once() {
        let pool = super::QueryBencher::fanout_pool();
        let barrier = std::sync::Barrier::new(super::CONCURRENT_FANOUT);

        // Every task blocks on the barrier. This only completes when the
        // pool runs all of them simultaneously.
        let in_flight: Vec<usize> = pool.install(|| {
            (0..super::CONCURRENT_FANOUT)
                .into_par_iter()
                .map(|index| {
                    barrier.wait();
                    index
                })
                .collect()
        });
        assert_eq!(in_flight.len(), super::CONCURRENT_FANOUT);
    }

    #[test]
    fn capability_benchmarks_are_rejected() {
        for definition in suite::capability_benchmarks(Scale::M1) {
            assert!(super::QueryBencher::elasticsearch_query(&definition).is_err());
        }
    }

    #[test]
    fn query_benchmarks_resolve_index_and_dsl() {
        for definition in suite::query_benchmarks(Scale::M1) {
            let (index, _) = super::QueryBencher::elasticsearch_query(&definition)
                .expect("Always valid");
            assert!(index.starts_with("healthcare_1m_"));
        }
    }
}
