//!
//! The benchmark runner summary.
//!

pub mod element;

use std::sync::Arc;
use std::sync::Mutex;

use colored::Colorize;

use benchmark_report::BenchmarkSummary;
use benchmark_report::SystemKind;

use self::element::Element;
use self::element::Outcome;

///
/// The benchmark runner summary.
///
/// Accumulates finished benchmark comparisons behind a shared reference and
/// prints a scoreboard at the end of the run.
///
#[derive(Debug)]
pub struct Summary {
    /// The summary elements.
    elements: Vec<Element>,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The ClickHouse wins counter.
    clickhouse_wins: usize,
    /// The Elasticsearch wins counter.
    elasticsearch_wins: usize,
    /// The capability gaps counter.
    not_possible: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(quiet: bool) -> Self {
        Self {
            elements: Vec::new(),
            quiet,
            clickhouse_wins: 0,
            elasticsearch_wins: 0,
            not_possible: 0,
        }
    }

    ///
    /// Wraps data into a synchronized shared reference.
    ///
    pub fn wrap(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }

    ///
    /// Extracts the data from the synchronized shared reference.
    ///
    pub fn unwrap_arc(summary: Arc<Mutex<Self>>) -> Self {
        Arc::try_unwrap(summary)
            .expect("Last shared reference")
            .into_inner()
            .expect("Last shared reference")
    }

    ///
    /// Records a finished benchmark comparison.
    ///
    pub fn record(summary: Arc<Mutex<Self>>, benchmark: &BenchmarkSummary) {
        let element = Element::from_summary(benchmark);
        summary.lock().expect("Sync").push_element(element);
    }

    ///
    /// Pushes an element to the summary, printing it.
    ///
    fn push_element(&mut self, element: Element) {
        if !self.quiet {
            println!("{}", element.print());
        }

        match element.outcome {
            Outcome::Decided {
                winner: SystemKind::ClickHouse,
                ..
            } => self.clickhouse_wins += 1,
            Outcome::Decided {
                winner: SystemKind::Elasticsearch,
                ..
            } => self.elasticsearch_wins += 1,
            Outcome::NotPossible { .. } => self.not_possible += 1,
        }

        self.elements.push(element);
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔════════════════════╡ BENCHMARK RESULTS ╞════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:13}                             {:10}     ║",
            "CLICKHOUSE".yellow(),
            self.clickhouse_wins.to_string().yellow(),
        )?;
        writeln!(
            f,
            "║     {:13}                             {:10}     ║",
            "ELASTICSEARCH".cyan(),
            self.elasticsearch_wins.to_string().cyan(),
        )?;
        writeln!(
            f,
            "║     {:13}                             {:10}     ║",
            "NOT POSSIBLE".bright_black(),
            self.not_possible.to_string().bright_black(),
        )?;
        writeln!(
            f,
            "║               {:10} BENCHMARKS FINISHED                 ║",
            self.clickhouse_wins + self.elasticsearch_wins + self.not_possible,
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
