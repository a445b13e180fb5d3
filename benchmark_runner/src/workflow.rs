//!
//! The benchmark runner workflow.
//!

///
/// The benchmark runner workflow: which stages of the pipeline to execute.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// Generate the synthetic dataset only.
    Generate,
    /// Load a generated dataset into both systems.
    Load,
    /// Run the benchmark suite against loaded data.
    #[default]
    Benchmark,
    /// Measure on-disk storage and attach it to an existing result file.
    Storage,
    /// Generate, load, benchmark, and measure storage in one pass.
    Full,
}

impl std::str::FromStr for Workflow {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "generate" => Ok(Self::Generate),
            "load" => Ok(Self::Load),
            "benchmark" => Ok(Self::Benchmark),
            "storage" => Ok(Self::Storage),
            "full" => Ok(Self::Full),
            string => anyhow::bail!(
                "Unknown workflow `{string}`. Supported workflows: {}",
                vec![
                    Self::Generate,
                    Self::Load,
                    Self::Benchmark,
                    Self::Storage,
                    Self::Full,
                ]
                .into_iter()
                .map(|workflow| workflow.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generate => write!(f, "generate"),
            Self::Load => write!(f, "load"),
            Self::Benchmark => write!(f, "benchmark"),
            Self::Storage => write!(f, "storage"),
            Self::Full => write!(f, "full"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Workflow;

    #[test]
    fn the_default_workflow_only_benchmarks() {
        assert_eq!(Workflow::default(), Workflow::Benchmark);
    }

    #[test]
    fn parsing_round_trip() {
        for workflow in [
            Workflow::Generate,
            Workflow::Load,
            Workflow::Benchmark,
            Workflow::Storage,
            Workflow::Full,
        ] {
            let parsed: Workflow = workflow
                .to_string()
                .parse()
                .expect("Always valid");
            assert_eq!(parsed, workflow);
        }
    }
}
