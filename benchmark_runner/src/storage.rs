//!
//! The on-disk storage collector.
//!

use benchmark_report::Scale;
use benchmark_report::StorageComparison;
use benchmark_report::StorageMeasurement;
use benchmark_report::SystemKind;

use crate::clients::clickhouse::ClickHouseClient;
use crate::clients::elasticsearch::ElasticsearchClient;

///
/// The on-disk storage collector.
///
/// ClickHouse sizes come from the active parts of the per-scale database.
/// Elasticsearch sizes come from the per-index `_stats` endpoint. A table
/// or index that is missing or empty contributes a zero-sized measurement
/// rather than a failure, so that partially loaded datasets can still be
/// compared.
///
pub struct StorageCollector<'a> {
    /// The ClickHouse client.
    clickhouse: &'a ClickHouseClient,
    /// The Elasticsearch client.
    elasticsearch: &'a ElasticsearchClient,
    /// The scale tier being measured.
    scale: Scale,
}

impl<'a> StorageCollector<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        clickhouse: &'a ClickHouseClient,
        elasticsearch: &'a ElasticsearchClient,
        scale: Scale,
    ) -> Self {
        Self {
            clickhouse,
            elasticsearch,
            scale,
        }
    }

    ///
    /// Measures both systems and assembles the comparison.
    ///
    pub fn collect(&self) -> anyhow::Result<StorageComparison> {
        let mut breakdown = self.collect_clickhouse()?;
        breakdown.extend(self.collect_elasticsearch()?);
        Ok(StorageComparison::new(breakdown))
    }

    ///
    /// Reads per-table sizes from `system.parts`.
    ///
    fn collect_clickhouse(&self) -> anyhow::Result<Vec<StorageMeasurement>> {
        let database = self.scale.dataset_name();
        let sql = format!(
            "SELECT table AS object, sum(rows) AS row_count, sum(bytes) AS size_bytes \
             FROM system.parts \
             WHERE database = '{database}' AND active \
             GROUP BY table \
             ORDER BY table"
        );
        let output = self.clickhouse.execute(sql.as_str())?;

        let mut measurements = Vec::with_capacity(crate::loaders::TABLES.len());
        for row in output.data {
            let object = row
                .get("object")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_owned();
            measurements.push(StorageMeasurement::new(
                SystemKind::ClickHouse,
                object,
                json_u64(row.get("row_count")),
                json_u64(row.get("size_bytes")),
            ));
        }
        Ok(measurements)
    }

    ///
    /// Reads per-index document counts and store sizes from `_stats`.
    ///
    fn collect_elasticsearch(&self) -> anyhow::Result<Vec<StorageMeasurement>> {
        let prefix = self.scale.dataset_name();

        let mut measurements = Vec::with_capacity(crate::loaders::TABLES.len());
        for table in crate::loaders::TABLES {
            let index = format!("{prefix}_{table}");
            let (docs, size_bytes) = match self.elasticsearch.stats(index.as_str())? {
                Some(stats) => (stats.docs, stats.size_bytes),
                None => (0, 0),
            };
            measurements.push(StorageMeasurement::new(
                SystemKind::Elasticsearch,
                table.to_owned(),
                docs,
                size_bytes,
            ));
        }
        Ok(measurements)
    }
}

///
/// Reads a numeric JSON value that ClickHouse may render as either a number
/// or a decimal string, depending on the column type.
///
fn json_u64(value: Option<&serde_json::Value>) -> u64 {
    match value {
        Some(serde_json::Value::Number(number)) => number.as_u64().unwrap_or_default(),
        Some(serde_json::Value::String(string)) => string.parse().unwrap_or_default(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn numbers_arrive_as_numbers_or_strings() {
        assert_eq!(super::json_u64(Some(&serde_json::json!(42))), 42);
        assert_eq!(super::json_u64(Some(&serde_json::json!("1234567890123"))), 1234567890123);
        assert_eq!(super::json_u64(Some(&serde_json::json!(null))), 0);
        assert_eq!(super::json_u64(None), 0);
    }
}
