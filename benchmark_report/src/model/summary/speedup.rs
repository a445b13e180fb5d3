//!
//! The speedup ratio between the two systems.
//!

///
/// The speedup ratio between the two systems.
///
/// A ratio is always the slower average divided by the faster one, so it is
/// at least 1.0. When one system cannot execute the benchmark at all there
/// is nothing to divide, and the speedup is reported as `"N/A"`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    /// Slower average over faster average, rounded to one decimal place.
    Ratio(f64),
    /// One system could not execute the benchmark.
    NotApplicable,
}

impl Speedup {
    /// The JSON representation of a missing ratio.
    pub const NOT_APPLICABLE: &'static str = "N/A";
}

impl std::fmt::Display for Speedup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ratio(ratio) => write!(f, "{ratio:.1}x"),
            Self::NotApplicable => write!(f, "{}", Self::NOT_APPLICABLE),
        }
    }
}

impl serde::Serialize for Speedup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Ratio(ratio) => serializer.serialize_f64(*ratio),
            Self::NotApplicable => serializer.serialize_str(Self::NOT_APPLICABLE),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Speedup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(number) => number
                .as_f64()
                .map(Self::Ratio)
                .ok_or_else(|| serde::de::Error::custom("Speedup ratio is not a finite number")),
            serde_json::Value::String(string) if string == Self::NOT_APPLICABLE => {
                Ok(Self::NotApplicable)
            }
            value => Err(serde::de::Error::custom(format!(
                "Speedup must be a number or `{}`, got {value}",
                Self::NOT_APPLICABLE
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Speedup;

    #[test]
    fn serialize_ratio() {
        let json = serde_json::to_string(&Speedup::Ratio(2.0)).expect("Always valid");
        assert_eq!(json, "2.0");
    }

    #[test]
    fn serialize_not_applicable() {
        let json = serde_json::to_string(&Speedup::NotApplicable).expect("Always valid");
        assert_eq!(json, r#""N/A""#);
    }

    #[test]
    fn round_trip() {
        for speedup in [Speedup::Ratio(1.5), Speedup::NotApplicable] {
            let json = serde_json::to_string(&speedup).expect("Always valid");
            let back: Speedup = serde_json::from_str(json.as_str()).expect("Always valid");
            assert_eq!(back, speedup);
        }
    }
}
