//!
//! The synthetic healthcare dataset generator.
//!

pub mod reference;
pub mod row;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use benchmark_report::Scale;

use self::row::MedicalEvent;
use self::row::Patient;
use self::row::Prescription;

/// The fixed seed: regenerating a dataset yields identical rows.
const SEED: u64 = 42;

///
/// The synthetic healthcare dataset generator.
///
/// Writes one NDJSON file per table under `<datasets>/<dataset_name>/`.
/// The same NDJSON rows are shipped verbatim to both databases by the
/// loaders, so both systems index byte-identical data.
///
pub struct DataGenerator {
    /// The scale tier being generated.
    scale: Scale,
    /// The directory the dataset is written into.
    dataset_directory: PathBuf,
}

impl DataGenerator {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(scale: Scale, datasets_directory: &Path) -> Self {
        Self {
            scale,
            dataset_directory: datasets_directory.join(scale.dataset_name()),
        }
    }

    ///
    /// The path of one table's NDJSON file within a dataset directory.
    ///
    pub fn table_path(datasets_directory: &Path, scale: Scale, table: &str) -> PathBuf {
        datasets_directory
            .join(scale.dataset_name())
            .join(format!("{table}.ndjson"))
    }

    ///
    /// Generates the full dataset: patients, medical events, prescriptions.
    ///
    pub fn generate(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.dataset_directory.as_path()).map_err(|error| {
            anyhow::anyhow!(
                "Directory {:?} creating: {error}",
                self.dataset_directory
            )
        })?;

        let patient_count = self.scale.patients();

        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        self.write_table("patients", patient_count, |writer, identifier| {
            write_row(writer, &Patient::sample(&mut rng, identifier))
        })?;

        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        self.write_table(
            "medical_events",
            self.scale.medical_events(),
            |writer, identifier| {
                write_row(
                    writer,
                    &MedicalEvent::sample(&mut rng, identifier, patient_count),
                )
            },
        )?;

        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        self.write_table(
            "prescriptions",
            self.scale.prescriptions(),
            |writer, identifier| {
                write_row(
                    writer,
                    &Prescription::sample(&mut rng, identifier, patient_count),
                )
            },
        )?;

        Ok(())
    }

    ///
    /// Streams one table to its NDJSON file, row by row.
    ///
    fn write_table<F>(&self, table: &str, row_count: u64, mut write: F) -> anyhow::Result<()>
    where
        F: FnMut(&mut BufWriter<File>, u64) -> anyhow::Result<()>,
    {
        let path = self.dataset_directory.join(format!("{table}.ndjson"));
        println!(
            "    {} {} ({} rows)",
            "Generating".bright_green().bold(),
            table,
            row_count,
        );

        let file = File::create(path.as_path())
            .map_err(|error| anyhow::anyhow!("File {path:?} creating: {error}"))?;
        let mut writer = BufWriter::new(file);
        for identifier in 0..row_count {
            write(&mut writer, identifier)?;
        }
        writer
            .flush()
            .map_err(|error| anyhow::anyhow!("File {path:?} writing: {error}"))?;
        Ok(())
    }
}

///
/// Writes one row as a single NDJSON line.
///
fn write_row<T>(writer: &mut BufWriter<File>, row: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    serde_json::to_writer(&mut *writer, row)?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use benchmark_report::Scale;

    use super::DataGenerator;

    #[test]
    fn table_paths_are_namespaced_by_dataset() {
        let path = DataGenerator::table_path(
            std::path::Path::new("datasets"),
            Scale::M10,
            "medical_events",
        );
        assert_eq!(
            path,
            std::path::PathBuf::from("datasets/healthcare_10m/medical_events.ndjson")
        );
    }
}
