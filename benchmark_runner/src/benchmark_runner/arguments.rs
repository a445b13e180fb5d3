//!
//! The benchmark runner arguments.
//!

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use benchmark_report::Scale;

use benchmark_runner::Workflow;

///
/// The benchmark runner arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The dataset scale tier: `1m`, `10m`, or `100m`.
    #[arg(short, long, value_parser = Scale::from_str)]
    pub scale: Scale,

    /// The pipeline stages to execute: `generate`, `load`, `benchmark`,
    /// `storage`, or `full`. Only `benchmark` is non-destructive: the other
    /// data-touching workflows recreate files, tables, or indices.
    #[arg(short, long, default_value_t = Workflow::Benchmark, value_parser = Workflow::from_str)]
    pub workflow: Workflow,

    /// Runs only benchmarks whose key contains any string from the specified ones.
    #[arg(short, long)]
    pub benchmark: Vec<String>,

    /// Runs only benchmarks from the specified categories: `query`, `capability`.
    #[arg(short, long)]
    pub category: Vec<String>,

    /// The environment file with connection settings.
    /// `./.env` is read by default when it exists.
    #[arg(long = "env-file")]
    pub env_file: Option<PathBuf>,

    /// The directory the generated datasets are written to and loaded from.
    #[arg(long, default_value = "datasets")]
    pub datasets: PathBuf,

    /// The directory the result files are written to.
    #[arg(short, long, default_value = "results")]
    pub output: PathBuf,

    /// Prints the raw latency samples of every run.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the output completely.
    #[arg(short, long)]
    pub quiet: bool,
}
