use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::measurement::Measurement;
use crate::core::types::Gender;
use crate::utils::validation::{
    check_factors, check_range, check_tolerance, ValidationError,
};

/// Closed range `[min, max]` a size accepts for one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct SizeRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RangeBounds {
    min: f64,
    max: f64,
}

impl TryFrom<RangeBounds> for SizeRange {
    type Error = ValidationError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.min, bounds.max)
    }
}

impl SizeRange {
    /// Create a range, rejecting negative, non-finite or inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRange` if the bounds are not `0 <= min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        check_range(min, max)?;
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Bounds after applying an optional tolerance: `(min * (1 - down), max * (1 + up))`
    #[must_use]
    pub fn widened(&self, tolerance: Option<Tolerance>) -> (f64, f64) {
        match tolerance {
            Some(t) => (self.min * (1.0 - t.down), self.max * (1.0 + t.up)),
            None => (self.min, self.max),
        }
    }
}

/// Fractional widening of a size range, looked up per table name
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ToleranceBounds")]
pub struct Tolerance {
    down: f64,
    up: f64,
}

#[derive(Deserialize)]
struct ToleranceBounds {
    #[serde(default)]
    down: f64,
    #[serde(default)]
    up: f64,
}

impl TryFrom<ToleranceBounds> for Tolerance {
    type Error = ValidationError;

    fn try_from(bounds: ToleranceBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.down, bounds.up)
    }
}

impl Tolerance {
    /// Create a tolerance from fractions, e.g. `0.1` for ten percent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTolerance` unless `0 <= down <= 1` and `up >= 0`.
    pub fn new(down: f64, up: f64) -> Result<Self, ValidationError> {
        check_tolerance(down, up)?;
        Ok(Self { down, up })
    }

    #[must_use]
    pub fn down(&self) -> f64 {
        self.down
    }

    #[must_use]
    pub fn up(&self) -> f64 {
        self.up
    }
}

/// Multipliers applied to the distance outside a size range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "FactorValues")]
pub struct Factors {
    too_high: f64,
    too_low: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FactorValues {
    too_high: f64,
    too_low: f64,
}

impl TryFrom<FactorValues> for Factors {
    type Error = ValidationError;

    fn try_from(values: FactorValues) -> Result<Self, Self::Error> {
        Self::new(values.too_high, values.too_low)
    }
}

impl Default for Factors {
    fn default() -> Self {
        Self {
            too_high: 1.0,
            too_low: 1.0,
        }
    }
}

impl Factors {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFactors` if either factor is negative or non-finite.
    pub fn new(too_high: f64, too_low: f64) -> Result<Self, ValidationError> {
        check_factors(too_high, too_low)?;
        Ok(Self { too_high, too_low })
    }

    #[must_use]
    pub fn too_high(&self) -> f64 {
        self.too_high
    }

    #[must_use]
    pub fn too_low(&self) -> f64 {
        self.too_low
    }
}

/// Binds a measurement to the way a table scores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportanceRule {
    pub measurement: Measurement,

    /// Whether the table's named tolerance widens ranges for this rule
    #[serde(default)]
    pub allow_tolerance: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factors: Option<Factors>,
}

impl ImportanceRule {
    #[must_use]
    pub fn new(measurement: Measurement) -> Self {
        Self {
            measurement,
            allow_tolerance: false,
            factors: None,
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self) -> Self {
        self.allow_tolerance = true;
        self
    }

    #[must_use]
    pub fn with_factors(mut self, factors: Factors) -> Self {
        self.factors = Some(factors);
        self
    }

    /// Configured factors, or `1.0` in both directions
    #[must_use]
    pub fn effective_factors(&self) -> Factors {
        self.factors.unwrap_or_default()
    }
}

/// One candidate size of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingSize {
    /// Size label as printed on the garment (e.g. "50", "M")
    pub id: String,

    /// Accepted range per measurement; kinds not listed do not apply
    #[serde(default)]
    pub ranges: BTreeMap<Measurement, SizeRange>,
}

impl ClothingSize {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ranges: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_range(mut self, kind: Measurement, range: SizeRange) -> Self {
        self.ranges.insert(kind, range);
        self
    }

    #[must_use]
    pub fn range(&self, kind: Measurement) -> Option<SizeRange> {
        self.ranges.get(&kind).copied()
    }
}

/// A size table for one garment and gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeTable {
    pub name: String,

    pub gender: Gender,

    /// Rules in scoring order
    pub measurement_importance: Vec<ImportanceRule>,

    /// Candidate sizes in table order
    pub sizes: Vec<ClothingSize>,
}

impl SizeTable {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            measurement_importance: Vec::new(),
            sizes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ImportanceRule) -> Self {
        self.measurement_importance.push(rule);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: ClothingSize) -> Self {
        self.sizes.push(size);
        self
    }

    /// Measurements referenced by the importance rules, in rule order
    pub fn required_measurements(&self) -> impl Iterator<Item = Measurement> + '_ {
        self.measurement_importance.iter().map(|r| r.measurement)
    }
}
