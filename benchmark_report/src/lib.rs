//!
//! The benchmark report library.
//!

pub mod comparison;
pub mod model;
pub mod output;
pub mod output_format;
pub mod util;

pub use crate::comparison::row::Row as ComparisonRow;
pub use crate::comparison::Comparison;
pub use crate::model::category::Category;
pub use crate::model::dataset::run_config::RunConfig;
pub use crate::model::dataset::ScaleDataset;
pub use crate::model::run::Run as BenchmarkRun;
pub use crate::model::scale::Scale;
pub use crate::model::storage::comparison::Comparison as StorageComparison;
pub use crate::model::storage::Measurement as StorageMeasurement;
pub use crate::model::summary::metrics::Metrics as SystemMetrics;
pub use crate::model::summary::speedup::Speedup;
pub use crate::model::summary::Summary as BenchmarkSummary;
pub use crate::model::system::SystemKind;
pub use crate::output::Output;
pub use crate::output_format::OutputFormat;
