//!
//! The benchmark report executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use benchmark_report::Comparison;
use benchmark_report::Output;
use benchmark_report::ScaleDataset;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{error:?}");
            1
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let pattern = arguments
        .results
        .join("healthcare_*_benchmark_results.json");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Results path {:?} is not valid UTF-8", arguments.results))?;

    let mut datasets = Vec::new();
    for entry in glob::glob(pattern)? {
        datasets.push(ScaleDataset::try_from(entry?)?);
    }
    if datasets.is_empty() {
        anyhow::bail!(
            "No result files matching `{pattern}`. Run `benchmark-runner` first."
        );
    }

    let comparison = Comparison::new(datasets.as_slice());
    if !arguments.quiet {
        println!(
            "   {} {} result file(s)",
            "Comparing".bright_green().bold(),
            datasets.len(),
        );
        comparison.print();
    }

    let output = Output::try_from((&comparison, arguments.format))?;
    match arguments.output_file {
        Some(path) => output.write_to_file(path)?,
        None => output.write_to_stdout(),
    }

    Ok(())
}
