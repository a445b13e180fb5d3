//!
//! The benchmark category.
//!

///
/// The benchmark category.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Query performance comparisons where both systems can compete.
    Query,
    /// Capability gaps: operations one system cannot perform at all.
    Capability,
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "capability" => Ok(Self::Capability),
            string => anyhow::bail!(
                "Unknown category `{string}`. Supported categories: {}",
                vec![Self::Query, Self::Capability]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Capability => write!(f, "capability"),
        }
    }
}
