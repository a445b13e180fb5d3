//!
//! The benchmark definition.
//!

use benchmark_report::Category;

///
/// The benchmark definition: one SQL query paired with one query-DSL
/// document, immutable once the catalog is built.
///
/// A missing DSL document marks the benchmark as impossible on
/// Elasticsearch; such definitions carry the limitation text shown in the
/// results.
///
#[derive(Debug, Clone)]
pub struct Definition {
    /// The stable key used in result files.
    pub key: &'static str,
    /// The human-readable name.
    pub name: &'static str,
    /// The benchmark category.
    pub category: Category,
    /// What the benchmark measures.
    pub description: &'static str,
    /// The ClickHouse SQL text.
    pub sql: String,
    /// The Elasticsearch query DSL document, absent for capability gaps.
    pub dsl: Option<serde_json::Value>,
    /// The Elasticsearch index the DSL runs against.
    pub es_index: Option<String>,
    /// Why Elasticsearch cannot execute this benchmark.
    pub es_limitation: Option<&'static str>,
    /// Whether the benchmark measures a fixed concurrent fan-out instead of
    /// sequential executions.
    pub concurrent: bool,
}

impl Definition {
    ///
    /// Whether Elasticsearch can execute this benchmark at all.
    ///
    pub fn is_possible_on_elasticsearch(&self) -> bool {
        self.dsl.is_some()
    }
}
