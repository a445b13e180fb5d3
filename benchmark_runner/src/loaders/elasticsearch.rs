//!
//! The Elasticsearch dataset loader.
//!

use std::path::Path;

use serde_json::json;

use benchmark_report::Scale;

use crate::clients::elasticsearch::ElasticsearchClient;

/// The documents per `_bulk` request.
const BATCH_DOCS: usize = 5_000;

///
/// The Elasticsearch dataset loader.
///
/// Recreates one index per dataset table with explicit mappings, disables
/// refresh for the duration of the bulk load, and restores it afterwards.
///
pub struct ElasticsearchLoader<'a> {
    /// The database client.
    client: &'a ElasticsearchClient,
    /// The scale tier being loaded.
    scale: Scale,
}

impl<'a> ElasticsearchLoader<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(client: &'a ElasticsearchClient, scale: Scale) -> Self {
        Self { client, scale }
    }

    ///
    /// Recreates the indices and loads every dataset table.
    ///
    /// Returns the total number of documents shipped.
    ///
    pub fn load(&self, datasets_directory: &Path) -> anyhow::Result<u64> {
        self.create_indices()?;

        let prefix = self.scale.dataset_name();
        let mut total_rows = 0;
        for table in super::TABLES {
            let reader = super::open_table(datasets_directory, self.scale, table)?;
            let index = format!("{prefix}_{table}");
            total_rows += super::load_in_batches(reader, index.as_str(), BATCH_DOCS, |batch| {
                self.client
                    .bulk(index.as_str(), Self::bulk_body(batch))
                    .map_err(anyhow::Error::from)
            })?;

            // Bulk loading runs with refresh disabled. Restore it and force
            // one refresh so the documents become searchable.
            self.client
                .update_settings(index.as_str(), &json!({ "refresh_interval": "1s" }))?;
            self.client.refresh(index.as_str())?;
        }
        Ok(total_rows)
    }

    ///
    /// Frames a batch of NDJSON rows as a `_bulk` payload: one action line
    /// per document line.
    ///
    fn bulk_body(batch: &[String]) -> String {
        let mut body =
            String::with_capacity(batch.iter().map(|line| line.len() + 14).sum());
        for line in batch {
            body.push_str("{\"index\":{}}\n");
            body.push_str(line.as_str());
            body.push('\n');
        }
        body
    }

    ///
    /// Drops and recreates the three indices with explicit mappings.
    ///
    /// Identifier-like and categorical fields are `keyword` so that terms
    /// aggregations work without fielddata. Refresh is disabled up front.
    ///
    pub fn create_indices(&self) -> anyhow::Result<()> {
        let prefix = self.scale.dataset_name();

        let patients = json!({
            "mappings": {
                "properties": {
                    "patient_id": { "type": "long" },
                    "age": { "type": "integer" },
                    "gender": { "type": "keyword" },
                    "blood_type": { "type": "keyword" },
                    "primary_condition": { "type": "keyword" },
                    "insurance_type": { "type": "keyword" },
                    "registration_date": { "type": "date" }
                }
            },
            "settings": {
                "number_of_shards": 3,
                "number_of_replicas": 0,
                "refresh_interval": "-1"
            }
        });

        let medical_events = json!({
            "mappings": {
                "properties": {
                    "event_id": { "type": "long" },
                    "patient_id": { "type": "long" },
                    "department": { "type": "keyword" },
                    "event_type": { "type": "keyword" },
                    "severity": { "type": "keyword" },
                    "cost_usd": { "type": "float" },
                    "duration_minutes": { "type": "integer" },
                    "timestamp": { "type": "date" }
                }
            },
            "settings": {
                "number_of_shards": 5,
                "number_of_replicas": 0,
                "refresh_interval": "-1"
            }
        });

        let prescriptions = json!({
            "mappings": {
                "properties": {
                    "prescription_id": { "type": "long" },
                    "patient_id": { "type": "long" },
                    "medication": { "type": "keyword" },
                    "dosage": { "type": "keyword" },
                    "frequency": { "type": "keyword" },
                    "duration_days": { "type": "integer" },
                    "refills": { "type": "integer" },
                    "cost_usd": { "type": "float" },
                    "prescribed_date": { "type": "date" }
                }
            },
            "settings": {
                "number_of_shards": 3,
                "number_of_replicas": 0,
                "refresh_interval": "-1"
            }
        });

        for (table, mapping) in [
            ("patients", patients),
            ("medical_events", medical_events),
            ("prescriptions", prescriptions),
        ] {
            let index = format!("{prefix}_{table}");
            self.client.delete_index(index.as_str())?;
            self.client.create_index(index.as_str(), &mapping)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn bulk_body_frames_one_action_per_document() {
        let batch = vec![
            r#"{"patient_id":0}"#.to_owned(),
            r#"{"patient_id":1}"#.to_owned(),
        ];
        let body = super::ElasticsearchLoader::bulk_body(batch.as_slice());
        assert_eq!(body.lines().count(), 2 * batch.len());
        assert!(body.ends_with('\n'));
        for (index, line) in body.lines().enumerate() {
            if index % 2 == 0 {
                assert_eq!(line, "{\"index\":{}}");
            }
        }
    }
}
