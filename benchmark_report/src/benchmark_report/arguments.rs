//!
//! The benchmark report arguments.
//!

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use benchmark_report::OutputFormat;

///
/// The benchmark report arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The directory containing `healthcare_*_benchmark_results.json` files.
    #[arg(short, long, default_value = "results")]
    pub results: PathBuf,

    /// The report output format: `json` or `csv`.
    #[arg(long = "format", default_value_t = OutputFormat::Json, value_parser = OutputFormat::from_str)]
    pub format: OutputFormat,

    /// The output file. If unset, the report is printed to `stdout`.
    #[arg(short, long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Suppresses the console table.
    #[arg(short, long)]
    pub quiet: bool,
}
