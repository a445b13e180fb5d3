//!
//! The ClickHouse dataset loader.
//!

use std::path::Path;

use benchmark_report::Scale;

use crate::clients::clickhouse::ClickHouseClient;

/// The NDJSON rows per `INSERT` statement.
const BATCH_ROWS: usize = 100_000;

///
/// The ClickHouse dataset loader.
///
/// Creates one `MergeTree` table per dataset table inside a per-scale
/// database and streams the NDJSON files into them in fixed-size batches.
///
pub struct ClickHouseLoader<'a> {
    /// The database client.
    client: &'a ClickHouseClient,
    /// The scale tier being loaded.
    scale: Scale,
}

impl<'a> ClickHouseLoader<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(client: &'a ClickHouseClient, scale: Scale) -> Self {
        Self { client, scale }
    }

    ///
    /// Creates the database and its tables, then loads every dataset table.
    ///
    /// Returns the total number of rows shipped.
    ///
    pub fn load(&self, datasets_directory: &Path) -> anyhow::Result<u64> {
        self.create_schema()?;

        let database = self.scale.dataset_name();
        let mut total_rows = 0;
        for table in super::TABLES {
            let reader = super::open_table(datasets_directory, self.scale, table)?;
            let target = format!("{database}.{table}");
            total_rows += super::load_in_batches(reader, target.as_str(), BATCH_ROWS, |batch| {
                let mut body = String::with_capacity(batch.iter().map(|line| line.len() + 1).sum());
                for line in batch {
                    body.push_str(line.as_str());
                    body.push('\n');
                }
                self.client
                    .insert_ndjson(target.as_str(), body)
                    .map_err(anyhow::Error::from)
            })?;
        }
        Ok(total_rows)
    }

    ///
    /// Creates the per-scale database and its three `MergeTree` tables.
    ///
    /// The sorting keys follow the access patterns of the suite: events and
    /// prescriptions are clustered by patient for the JOIN benchmarks.
    ///
    pub fn create_schema(&self) -> anyhow::Result<()> {
        let database = self.scale.dataset_name();

        self.client
            .command(format!("CREATE DATABASE IF NOT EXISTS {database}").as_str())?;

        self.client.command(
            format!(
                "CREATE TABLE IF NOT EXISTS {database}.patients (
                    patient_id Int64,
                    age Int32,
                    gender String,
                    blood_type String,
                    primary_condition String,
                    insurance_type String,
                    registration_date Date
                ) ENGINE = MergeTree()
                ORDER BY patient_id"
            )
            .as_str(),
        )?;

        self.client.command(
            format!(
                "CREATE TABLE IF NOT EXISTS {database}.medical_events (
                    event_id Int64,
                    patient_id Int64,
                    department String,
                    event_type String,
                    severity String,
                    cost_usd Float64,
                    duration_minutes Int32,
                    timestamp DateTime
                ) ENGINE = MergeTree()
                ORDER BY (patient_id, timestamp)"
            )
            .as_str(),
        )?;

        self.client.command(
            format!(
                "CREATE TABLE IF NOT EXISTS {database}.prescriptions (
                    prescription_id Int64,
                    patient_id Int64,
                    medication String,
                    dosage String,
                    frequency String,
                    duration_days Int32,
                    refills Int32,
                    cost_usd Float64,
                    prescribed_date Date
                ) ENGINE = MergeTree()
                ORDER BY (patient_id, prescribed_date)"
            )
            .as_str(),
        )?;

        Ok(())
    }
}
