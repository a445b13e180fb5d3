//!
//! Serialized report output.
//!

pub mod csv;
pub mod json;

use std::path::PathBuf;

use crate::comparison::Comparison;
use crate::model::dataset::ScaleDataset;
use crate::output_format::OutputFormat;

use self::csv::Csv;
use self::json::Json;

///
/// Serialized report output.
///
pub enum Output {
    /// The output is a single file with the given contents.
    SingleFile(String),
}

impl Output {
    ///
    /// Writes the output to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(contents) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path.as_path(), contents)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }

    ///
    /// Writes the output to the standard output stream.
    ///
    pub fn write_to_stdout(self) {
        match self {
            Output::SingleFile(contents) => println!("{contents}"),
        }
    }
}

impl TryFrom<(&Comparison, OutputFormat)> for Output {
    type Error = anyhow::Error;

    fn try_from((comparison, format): (&Comparison, OutputFormat)) -> Result<Self, Self::Error> {
        Ok(match format {
            OutputFormat::Json => Json::try_from(comparison)?.into(),
            OutputFormat::Csv => Csv::from(comparison).into(),
        })
    }
}

impl TryFrom<&ScaleDataset> for Output {
    type Error = anyhow::Error;

    fn try_from(dataset: &ScaleDataset) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(dataset)
            .map_err(|error| anyhow::anyhow!("Result serialization: {error}"))?;
        Ok(Self::SingleFile(content))
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}
