use serde::Serialize;

use crate::catalog::tolerance::ToleranceTable;
use crate::core::measurement::Measurements;
use crate::core::table::{ClothingSize, Factors, ImportanceRule, SizeRange, SizeTable, Tolerance};
use crate::core::types::RuleOutcome;
use crate::matching::diagnosis::RuleDeviation;

/// Deviation added for every rule whose measurement was not provided
///
/// Large enough to outweigh any realistic out-of-range penalty, so tables
/// needing more missing measurements always rank worse.
pub const MISSING_MEASUREMENT_PENALTY: f64 = 1000.0;

/// Deviations below this are considered a good enough fit
pub const ACCEPTABLE_DEVIATION_LIMIT: f64 = 250.0;

/// A candidate size with its total deviation from the user's measurements
#[derive(Debug, Clone, Serialize)]
pub struct SizeMatch {
    pub size: ClothingSize,

    /// Sum of all rule contributions, always >= 0
    pub deviation: f64,

    /// Per-rule contributions in rule order
    pub breakdown: Vec<RuleDeviation>,
}

impl SizeMatch {
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        is_acceptable(self.deviation)
    }

    /// True if the size fits every rule without penalty
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.breakdown
            .iter()
            .all(|r| matches!(r.outcome, RuleOutcome::Fit | RuleOutcome::NotApplicable))
    }
}

/// Whether a deviation is small enough to recommend the size
#[inline]
#[must_use]
pub fn is_acceptable(deviation: f64) -> bool {
    deviation < ACCEPTABLE_DEVIATION_LIMIT
}

/// Distance of a measurement from a size range, weighted by direction.
///
/// The range is first widened by `tolerance` when one is given. Inside the
/// widened range the deviation is 0; below it, the gap times
/// `factors.too_low`; above it, the gap times `factors.too_high`.
///
/// The table scorer only passes usable values here; absent and non-finite
/// measurements are penalized before this is reached.
///
/// # Panics
///
/// Panics if `measurement` is not finite, or if the widened range is
/// inverted. Validated ranges and tolerances cannot produce the latter.
#[must_use]
pub fn deviation(
    measurement: f64,
    range: SizeRange,
    factors: Factors,
    tolerance: Option<Tolerance>,
) -> f64 {
    rule_deviation(measurement, range, factors, tolerance).0
}

fn rule_deviation(
    measurement: f64,
    range: SizeRange,
    factors: Factors,
    tolerance: Option<Tolerance>,
) -> (f64, RuleOutcome) {
    let (min, max) = range.widened(tolerance);
    assert!(
        min <= max,
        "size range widened to an inverted interval [{min}, {max}]"
    );
    assert!(
        measurement.is_finite(),
        "cannot score non-finite measurement {measurement}"
    );

    if measurement < min {
        ((min - measurement) * factors.too_low(), RuleOutcome::TooLow)
    } else if measurement > max {
        ((measurement - max) * factors.too_high(), RuleOutcome::TooHigh)
    } else {
        (0.0, RuleOutcome::Fit)
    }
}

/// Score one importance rule against one candidate size
fn score_rule(
    rule: &ImportanceRule,
    size: &ClothingSize,
    measurements: &Measurements,
    tolerance: Option<Tolerance>,
) -> RuleDeviation {
    let value = measurements.usable(rule.measurement);
    let (contribution, outcome) = match (value, size.range(rule.measurement)) {
        (None, _) => (MISSING_MEASUREMENT_PENALTY, RuleOutcome::Missing),
        (Some(_), None) => (0.0, RuleOutcome::NotApplicable),
        (Some(value), Some(range)) => {
            let tolerance = if rule.allow_tolerance { tolerance } else { None };
            rule_deviation(value, range, rule.effective_factors(), tolerance)
        }
    };

    RuleDeviation {
        measurement: rule.measurement,
        contribution,
        outcome,
    }
}

/// Score a single candidate size of a table
#[must_use]
pub fn score_size(
    table: &SizeTable,
    size: &ClothingSize,
    measurements: &Measurements,
    tolerances: &ToleranceTable,
) -> SizeMatch {
    let tolerance = tolerances.get(&table.name);

    let breakdown: Vec<RuleDeviation> = table
        .measurement_importance
        .iter()
        .map(|rule| score_rule(rule, size, measurements, tolerance))
        .collect();

    let deviation = breakdown.iter().map(|r| r.contribution).sum();

    SizeMatch {
        size: size.clone(),
        deviation,
        breakdown,
    }
}

/// Score every candidate size of a table, in table order
#[must_use]
pub fn score_table(
    table: &SizeTable,
    measurements: &Measurements,
    tolerances: &ToleranceTable,
) -> Vec<SizeMatch> {
    table
        .sizes
        .iter()
        .map(|size| score_size(table, size, measurements, tolerances))
        .collect()
}
