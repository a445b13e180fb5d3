//!
//! The storage comparison between the two systems.
//!

use crate::model::system::SystemKind;
use crate::util::round_to;

use super::Measurement;

///
/// The storage comparison between the two systems for one scale tier.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Comparison {
    /// Total ClickHouse bytes across all measured tables.
    pub clickhouse_bytes: u64,
    /// Total Elasticsearch bytes across all measured indices.
    pub elasticsearch_bytes: u64,
    /// Larger total over smaller total, rounded to one decimal place.
    /// Absent when either system reported no data.
    pub compression_ratio: Option<f64>,
    /// The per-table and per-index measurements.
    pub breakdown: Vec<Measurement>,
}

impl Comparison {
    ///
    /// Aggregates individual measurements into totals and a ratio.
    ///
    pub fn new(breakdown: Vec<Measurement>) -> Self {
        let clickhouse_bytes = Self::total(&breakdown, SystemKind::ClickHouse);
        let elasticsearch_bytes = Self::total(&breakdown, SystemKind::Elasticsearch);

        Self {
            clickhouse_bytes,
            elasticsearch_bytes,
            compression_ratio: Self::ratio(clickhouse_bytes, elasticsearch_bytes),
            breakdown,
        }
    }

    ///
    /// The storage ratio between two sizes: larger over smaller.
    ///
    /// Returns `None` when either side measured zero bytes, which happens
    /// when the introspection query found no loaded data.
    ///
    pub fn ratio(size_a: u64, size_b: u64) -> Option<f64> {
        if size_a == 0 || size_b == 0 {
            return None;
        }

        let (larger, smaller) = if size_a > size_b {
            (size_a, size_b)
        } else {
            (size_b, size_a)
        };
        Some(round_to(larger as f64 / smaller as f64, 1))
    }

    fn total(breakdown: &[Measurement], system: SystemKind) -> u64 {
        breakdown
            .iter()
            .filter(|measurement| measurement.system == system)
            .map(|measurement| measurement.size_bytes)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::Comparison;
    use crate::model::storage::Measurement;
    use crate::model::system::SystemKind;

    #[test]
    fn ratio_is_symmetric_in_magnitude() {
        assert_eq!(Comparison::ratio(100, 1330), Some(13.3));
        assert_eq!(Comparison::ratio(1330, 100), Some(13.3));
    }

    #[test]
    fn ratio_degrades_to_none_on_missing_data() {
        assert_eq!(Comparison::ratio(0, 1330), None);
        assert_eq!(Comparison::ratio(100, 0), None);
    }

    #[test]
    fn totals_split_by_system() {
        let comparison = Comparison::new(vec![
            Measurement::new(SystemKind::ClickHouse, "patients".to_owned(), 200_000, 40),
            Measurement::new(
                SystemKind::ClickHouse,
                "medical_events".to_owned(),
                500_000,
                60,
            ),
            Measurement::new(
                SystemKind::Elasticsearch,
                "healthcare_1m_patients".to_owned(),
                200_000,
                900,
            ),
        ]);
        assert_eq!(comparison.clickhouse_bytes, 100);
        assert_eq!(comparison.elasticsearch_bytes, 900);
        assert_eq!(comparison.compression_ratio, Some(9.0));
    }
}
