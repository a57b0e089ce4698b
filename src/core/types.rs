use serde::{Deserialize, Serialize};

/// Gender a size table is cut for
///
/// Tables are selected by exact equality; there is no unisex fallback.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single importance rule scored against a candidate size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOutcome {
    /// Measurement lies inside the (possibly widened) range
    Fit,
    /// Measurement is below the lower bound
    TooLow,
    /// Measurement is above the upper bound
    TooHigh,
    /// The user did not provide the measurement
    Missing,
    /// The size defines no range for this measurement
    NotApplicable,
}

impl std::fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fit => write!(f, "fit"),
            Self::TooLow => write!(f, "too low"),
            Self::TooHigh => write!(f, "too high"),
            Self::Missing => write!(f, "missing"),
            Self::NotApplicable => write!(f, "n/a"),
        }
    }
}
