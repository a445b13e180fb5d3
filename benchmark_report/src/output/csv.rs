//!
//! Serializing the comparison to CSV.
//!

use std::fmt::Write;

use crate::comparison::Comparison;

///
/// Serialize the comparison to CSV in the following format:
/// "benchmark", "category", "scale", "winner", "speedup", "clickhouse_avg_ms", "elasticsearch_avg_ms"
///
/// Storage compression is appended as one pseudo-row per scale tier.
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl From<&Comparison> for Csv {
    fn from(comparison: &Comparison) -> Csv {
        let mut content = String::new();
        content.push_str(
            r#""benchmark", "category", "scale", "winner", "speedup", "clickhouse_avg_ms", "elasticsearch_avg_ms""#,
        );
        content.push('\n');

        for row in comparison.benchmarks.iter() {
            for (scale, outcome) in row.outcomes.iter() {
                let clickhouse_avg = outcome
                    .clickhouse_avg_ms
                    .map(|value| value.to_string())
                    .unwrap_or_default();
                let elasticsearch_avg = outcome
                    .elasticsearch_avg_ms
                    .map(|value| value.to_string())
                    .unwrap_or_default();
                writeln!(
                    content,
                    "\"{}\", \"{}\", \"{}\", \"{}\", \"{}\", {}, {}",
                    row.name,
                    row.category,
                    scale,
                    outcome.winner,
                    outcome.speedup,
                    clickhouse_avg,
                    elasticsearch_avg,
                )
                .expect("Always valid");
            }
        }

        for (scale, ratio) in comparison.storage_ratios.iter() {
            let rendered = ratio
                .map(|ratio| format!("{ratio:.1}x"))
                .unwrap_or_else(|| "N/A".to_owned());
            writeln!(
                content,
                "\"Storage Compression\", \"capability\", \"{scale}\", \"clickhouse\", \"{rendered}\", ,",
            )
            .expect("Always valid");
        }

        Csv { content }
    }
}

#[cfg(test)]
mod tests {
    use super::Csv;
    use crate::comparison::Comparison;
    use crate::model::category::Category;
    use crate::model::dataset::run_config::RunConfig;
    use crate::model::dataset::ScaleDataset;
    use crate::model::run::Run;
    use crate::model::scale::Scale;
    use crate::model::summary::Summary;
    use crate::model::system::SystemKind;

    #[test]
    fn csv_has_one_line_per_benchmark_and_scale() {
        let mut dataset = ScaleDataset::new(
            Scale::M1,
            RunConfig {
                warmup_runs: 2,
                measured_runs: 5,
            },
        );
        let clickhouse = Run::new(
            "Full-Text Search".to_owned(),
            SystemKind::ClickHouse,
            vec![100.0; 5],
            3,
        );
        let elasticsearch = Run::new(
            "Full-Text Search".to_owned(),
            SystemKind::Elasticsearch,
            vec![10.0; 5],
            3,
        );
        dataset.benchmarks.insert(
            "Full-Text Search".to_owned(),
            Summary::compare(
                "Full-Text Search".to_owned(),
                Category::Query,
                &clickhouse,
                Some(&elasticsearch),
                None,
            ),
        );

        let comparison = Comparison::new(&[dataset]);
        let csv = Csv::from(&comparison);
        let lines: Vec<&str> = csv.content.lines().collect();

        // Header, one benchmark line, one storage line.
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("\"Full-Text Search\""));
        assert!(lines[1].contains("\"elasticsearch\""));
        assert!(lines[2].contains("\"Storage Compression\""));
    }
}
