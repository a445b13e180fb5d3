//!
//! The database system under test.
//!

///
/// The database system under test.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SystemKind {
    /// The ClickHouse columnar database.
    ClickHouse,
    /// The Elasticsearch search engine.
    Elasticsearch,
}

impl std::str::FromStr for SystemKind {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "clickhouse" => Ok(Self::ClickHouse),
            "elasticsearch" => Ok(Self::Elasticsearch),
            string => anyhow::bail!(
                "Unknown system `{string}`. Supported systems: {}",
                vec![Self::ClickHouse, Self::Elasticsearch]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for SystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClickHouse => write!(f, "clickhouse"),
            Self::Elasticsearch => write!(f, "elasticsearch"),
        }
    }
}
