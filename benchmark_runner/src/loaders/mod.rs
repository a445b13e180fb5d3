//!
//! The dataset loaders.
//!

pub mod clickhouse;
pub mod elasticsearch;

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use colored::Colorize;

use benchmark_report::Scale;

use crate::generator::DataGenerator;

/// The dataset tables, in load order.
pub const TABLES: [&str; 3] = ["patients", "medical_events", "prescriptions"];

///
/// Opens one table's NDJSON file for line-by-line reading.
///
/// A missing file is fatal: the dataset must be generated before loading.
///
fn open_table(
    datasets_directory: &Path,
    scale: Scale,
    table: &str,
) -> anyhow::Result<BufReader<File>> {
    let path = DataGenerator::table_path(datasets_directory, scale, table);
    let file = File::open(path.as_path()).map_err(|error| {
        anyhow::anyhow!(
            "Dataset file {path:?} opening: {error}. Run `benchmark-runner --workflow generate` first."
        )
    })?;
    Ok(BufReader::new(file))
}

///
/// Streams one table's NDJSON lines into fixed-size batches and ships each
/// batch via the given closure. Prints the loading rate when done.
///
fn load_in_batches<F>(
    reader: BufReader<File>,
    target: &str,
    batch_capacity: usize,
    mut ship: F,
) -> anyhow::Result<u64>
where
    F: FnMut(&[String]) -> anyhow::Result<()>,
{
    println!("    {} {}", "Loading".bright_green().bold(), target);

    let start = Instant::now();
    let mut batch: Vec<String> = Vec::with_capacity(batch_capacity);
    let mut total_rows: u64 = 0;

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        batch.push(line);
        if batch.len() == batch_capacity {
            ship(batch.as_slice())?;
            total_rows += batch.len() as u64;
            batch.clear();
        }
    }
    if !batch.is_empty() {
        ship(batch.as_slice())?;
        total_rows += batch.len() as u64;
    }

    let elapsed = start.elapsed().as_secs_f64();
    let rate = if elapsed > 0.0 {
        total_rows as f64 / elapsed
    } else {
        0.0
    };
    println!(
        "    {} {} ({} rows, {:.0} rows/sec)",
        "Loaded".bright_green().bold(),
        target,
        total_rows,
        rate,
    );
    Ok(total_rows)
}
