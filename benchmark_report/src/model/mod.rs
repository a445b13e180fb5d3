//!
//! The benchmark result data model.
//!

pub mod category;
pub mod dataset;
pub mod run;
pub mod scale;
pub mod storage;
pub mod summary;
pub mod system;
