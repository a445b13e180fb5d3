//!
//! The benchmark runner executable.
//!

pub(crate) mod arguments;

use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use benchmark_report::Output;
use benchmark_report::Scale;
use benchmark_report::ScaleDataset;

use benchmark_runner::env_file;
use benchmark_runner::BenchmarkRunner;
use benchmark_runner::ClickHouseClient;
use benchmark_runner::ClickHouseConfig;
use benchmark_runner::ClickHouseLoader;
use benchmark_runner::DataGenerator;
use benchmark_runner::ElasticsearchClient;
use benchmark_runner::ElasticsearchConfig;
use benchmark_runner::ElasticsearchLoader;
use benchmark_runner::Filters;
use benchmark_runner::StorageCollector;
use benchmark_runner::Summary;
use benchmark_runner::Workflow;

use self::arguments::Arguments;

/// The process exit code on success.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
const EXIT_CODE_FAILURE: i32 = 1;

/// The default environment file read when no explicit one is given.
const DEFAULT_ENV_FILE: &str = "./.env";

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    match arguments.env_file {
        Some(ref path) => env_file::load(path)?,
        None => {
            let path = Path::new(DEFAULT_ENV_FILE);
            if path.exists() {
                env_file::load(path)?;
            }
        }
    }

    if !arguments.quiet {
        println!(
            "    {} {} v{} (scale {}, workflow {})",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
            arguments.scale,
            arguments.workflow,
        );
    }
    let start = Instant::now();

    if let Workflow::Generate | Workflow::Full = arguments.workflow {
        DataGenerator::new(arguments.scale, arguments.datasets.as_path()).generate()?;
    }

    if arguments.workflow != Workflow::Generate {
        let clickhouse = ClickHouseClient::new(&ClickHouseConfig::from_env()?)?;
        let elasticsearch = ElasticsearchClient::new(&ElasticsearchConfig::from_env()?)?;
        clickhouse.ping()?;
        elasticsearch.ping()?;

        if let Workflow::Load | Workflow::Full = arguments.workflow {
            ClickHouseLoader::new(&clickhouse, arguments.scale)
                .load(arguments.datasets.as_path())?;
            ElasticsearchLoader::new(&elasticsearch, arguments.scale)
                .load(arguments.datasets.as_path())?;
        }

        match arguments.workflow {
            Workflow::Benchmark | Workflow::Full => {
                let summary = Summary::new(arguments.quiet).wrap();
                let runner = BenchmarkRunner::new(
                    summary.clone(),
                    Filters::new(arguments.benchmark, arguments.category),
                );
                let mut dataset = runner.run(
                    &clickhouse,
                    &elasticsearch,
                    arguments.scale,
                    arguments.verbose,
                    arguments.quiet,
                )?;
                dataset.storage = Some(
                    StorageCollector::new(&clickhouse, &elasticsearch, arguments.scale)
                        .collect()?,
                );

                let path = write_results(&dataset, arguments.output.as_path())?;
                let summary = Summary::unwrap_arc(summary);
                print!("{summary}");
                if !arguments.quiet {
                    println!(
                        "     {} results to {path:?}",
                        "Written".bright_green().bold(),
                    );
                }
            }
            Workflow::Storage => {
                let path = result_path(arguments.output.as_path(), arguments.scale);
                let mut dataset = ScaleDataset::try_from(path.clone())?;
                dataset.storage = Some(
                    StorageCollector::new(&clickhouse, &elasticsearch, arguments.scale)
                        .collect()?,
                );
                write_results(&dataset, arguments.output.as_path())?;
                if !arguments.quiet {
                    println!(
                        "     {} storage to {path:?}",
                        "Written".bright_green().bold(),
                    );
                }
            }
            _ => {}
        }
    }

    if !arguments.quiet {
        println!(
            "    {} in {:.2}s",
            "Finished".bright_green().bold(),
            start.elapsed().as_secs_f64(),
        );
    }
    Ok(())
}

///
/// The canonical result file path for one scale tier.
///
fn result_path(output: &Path, scale: Scale) -> PathBuf {
    output.join(format!("{}_benchmark_results.json", scale.dataset_name()))
}

///
/// Writes the result dataset to its canonical file.
///
fn write_results(dataset: &ScaleDataset, output: &Path) -> anyhow::Result<PathBuf> {
    let path = output.join(dataset.file_name());
    Output::try_from(dataset)?.write_to_file(path.clone())?;
    Ok(path)
}
