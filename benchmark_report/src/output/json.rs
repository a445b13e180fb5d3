//!
//! Serializing the comparison to JSON.
//!

use crate::comparison::Comparison;

///
/// The JSON rendering of a cross-scale comparison.
///
pub struct Json {
    /// The JSON string.
    pub content: String,
}

impl TryFrom<&Comparison> for Json {
    type Error = anyhow::Error;

    fn try_from(comparison: &Comparison) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(comparison)
            .map_err(|error| anyhow::anyhow!("Comparison serialization: {error}"))?;
        Ok(Self { content })
    }
}
