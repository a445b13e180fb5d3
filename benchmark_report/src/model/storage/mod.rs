//!
//! Post-load storage measurements.
//!

pub mod comparison;

use crate::model::system::SystemKind;

///
/// A single storage measurement obtained from a system introspection query.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Measurement {
    /// The measured system.
    pub system: SystemKind,
    /// The table or index name.
    pub object: String,
    /// The number of stored rows or documents.
    pub row_count: u64,
    /// The on-disk size in bytes.
    pub size_bytes: u64,
}

impl Measurement {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(system: SystemKind, object: String, row_count: u64, size_bytes: u64) -> Self {
        Self {
            system,
            object,
            row_count,
            size_bytes,
        }
    }
}
