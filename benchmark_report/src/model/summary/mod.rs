//!
//! The comparative benchmark summary.
//!

pub mod metrics;
pub mod speedup;

use crate::model::category::Category;
use crate::model::run::Run;
use crate::model::system::SystemKind;
use crate::util::round_to;

use self::metrics::Metrics;
use self::speedup::Speedup;

///
/// The comparative benchmark summary.
///
/// Derived from a pair of runs of the same benchmark, one per system.
/// Purely computed, never mutated after aggregation.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    /// The benchmark name.
    pub name: String,
    /// The benchmark category.
    pub category: Category,
    /// The ClickHouse metrics.
    pub clickhouse: Metrics,
    /// The Elasticsearch metrics.
    pub elasticsearch: Metrics,
    /// The system with the lower average latency.
    pub winner: SystemKind,
    /// The slower-over-faster latency ratio.
    pub speedup: Speedup,
}

impl Summary {
    ///
    /// Aggregates two runs of the same benchmark into a summary.
    ///
    /// The system with the strictly lower average wins. When the
    /// Elasticsearch run is absent the benchmark is a capability gap:
    /// ClickHouse wins unconditionally and the speedup is not applicable.
    ///
    pub fn compare(
        name: String,
        category: Category,
        clickhouse: &Run,
        elasticsearch: Option<&Run>,
        limitation: Option<String>,
    ) -> Self {
        match elasticsearch {
            Some(elasticsearch) => {
                let clickhouse_avg = clickhouse.average_ms();
                let elasticsearch_avg = elasticsearch.average_ms();

                let winner = if clickhouse_avg < elasticsearch_avg {
                    SystemKind::ClickHouse
                } else {
                    SystemKind::Elasticsearch
                };
                let (slower, faster) = if clickhouse_avg < elasticsearch_avg {
                    (elasticsearch_avg, clickhouse_avg)
                } else {
                    (clickhouse_avg, elasticsearch_avg)
                };
                let speedup = Speedup::Ratio(round_to(slower / faster, 1));

                Self {
                    name,
                    category,
                    clickhouse: Metrics::measured(clickhouse),
                    elasticsearch: Metrics::measured(elasticsearch),
                    winner,
                    speedup,
                }
            }
            None => Self {
                name,
                category,
                clickhouse: Metrics::measured(clickhouse),
                elasticsearch: Metrics::not_possible(limitation),
                winner: SystemKind::ClickHouse,
                speedup: Speedup::NotApplicable,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Summary;
    use crate::model::category::Category;
    use crate::model::run::Run;
    use crate::model::summary::speedup::Speedup;
    use crate::model::system::SystemKind;

    fn run(system: SystemKind, samples: Vec<f64>) -> Run {
        Run::new("Simple Aggregation".to_owned(), system, samples, 15)
    }

    #[test]
    fn elasticsearch_wins_with_double_speedup() {
        let clickhouse = run(SystemKind::ClickHouse, vec![100.0; 5]);
        let elasticsearch = run(SystemKind::Elasticsearch, vec![50.0; 5]);

        let summary = Summary::compare(
            "Simple Aggregation".to_owned(),
            Category::Query,
            &clickhouse,
            Some(&elasticsearch),
            None,
        );

        assert_eq!(summary.winner, SystemKind::Elasticsearch);
        assert_eq!(summary.speedup, Speedup::Ratio(2.0));
        assert_eq!(summary.clickhouse.avg_ms, Some(100.0));
        assert_eq!(summary.elasticsearch.avg_ms, Some(50.0));
    }

    #[test]
    fn clickhouse_wins_on_lower_average() {
        let clickhouse = run(SystemKind::ClickHouse, vec![40.0; 5]);
        let elasticsearch = run(SystemKind::Elasticsearch, vec![60.0; 5]);

        let summary = Summary::compare(
            "Simple Aggregation".to_owned(),
            Category::Query,
            &clickhouse,
            Some(&elasticsearch),
            None,
        );

        assert_eq!(summary.winner, SystemKind::ClickHouse);
        assert_eq!(summary.speedup, Speedup::Ratio(1.5));
    }

    #[test]
    fn speedup_is_at_least_one() {
        let clickhouse = run(SystemKind::ClickHouse, vec![33.0; 5]);
        let elasticsearch = run(SystemKind::Elasticsearch, vec![33.0; 5]);

        let summary = Summary::compare(
            "Simple Aggregation".to_owned(),
            Category::Query,
            &clickhouse,
            Some(&elasticsearch),
            None,
        );

        match summary.speedup {
            Speedup::Ratio(ratio) => assert!(ratio >= 1.0),
            Speedup::NotApplicable => panic!("Both systems produced a result"),
        }
    }

    #[test]
    fn capability_gap_defaults_to_clickhouse() {
        let clickhouse = run(SystemKind::ClickHouse, vec![120.0; 5]);

        let summary = Summary::compare(
            "Patient-Event JOIN".to_owned(),
            Category::Capability,
            &clickhouse,
            None,
            Some("Elasticsearch cannot perform JOINs".to_owned()),
        );

        assert_eq!(summary.winner, SystemKind::ClickHouse);
        assert_eq!(summary.speedup, Speedup::NotApplicable);
        assert!(summary.elasticsearch.not_possible);
        assert_eq!(summary.elasticsearch.avg_ms, None);
    }
}
