//!
//! The dataset scale tier.
//!

///
/// The dataset scale tier, named after the approximate total row count.
///
/// Each tier owns its database/index-prefix name and the per-table row
/// budgets used by the generator and the loaders.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    /// 1M total rows: 200k patients, 500k events, 300k prescriptions.
    M1,
    /// 10M total rows: 2M patients, 5M events, 3M prescriptions.
    M10,
    /// 100M total rows: 10M patients, 60M events, 30M prescriptions.
    M100,
}

impl Scale {
    ///
    /// The ClickHouse database and Elasticsearch index prefix for this tier.
    ///
    pub fn dataset_name(&self) -> String {
        format!("healthcare_{self}")
    }

    ///
    /// The number of patient rows in this tier.
    ///
    pub fn patients(&self) -> u64 {
        match self {
            Self::M1 => 200_000,
            Self::M10 => 2_000_000,
            Self::M100 => 10_000_000,
        }
    }

    ///
    /// The number of medical event rows in this tier.
    ///
    pub fn medical_events(&self) -> u64 {
        match self {
            Self::M1 => 500_000,
            Self::M10 => 5_000_000,
            Self::M100 => 60_000_000,
        }
    }

    ///
    /// The number of prescription rows in this tier.
    ///
    pub fn prescriptions(&self) -> u64 {
        match self {
            Self::M1 => 300_000,
            Self::M10 => 3_000_000,
            Self::M100 => 30_000_000,
        }
    }
}

impl std::str::FromStr for Scale {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "1m" => Ok(Self::M1),
            "10m" => Ok(Self::M10),
            "100m" => Ok(Self::M100),
            string => anyhow::bail!(
                "Unknown scale `{string}`. Supported scales: {}",
                vec![Self::M1, Self::M10, Self::M100]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::M1 => write!(f, "1m"),
            Self::M10 => write!(f, "10m"),
            Self::M100 => write!(f, "100m"),
        }
    }
}

impl serde::Serialize for Scale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Scale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(serde::de::Error::custom)
    }
}
