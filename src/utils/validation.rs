//! Centralized validation of size table data.
//!
//! Every range, tolerance and penalty factor is checked when it is built or
//! deserialized, so the scoring code can rely on well-formed inputs.

use crate::core::types::Gender;

/// Validation error types for catalog data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid size range [{min}, {max}]: bounds must be finite with 0 <= min <= max")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid tolerance (down: {down}, up: {up}): expected 0 <= down <= 1 and up >= 0")]
    InvalidTolerance { down: f64, up: f64 },

    #[error("Invalid penalty factors (tooHigh: {too_high}, tooLow: {too_low}): must be finite and >= 0")]
    InvalidFactors { too_high: f64, too_low: f64 },

    #[error("Size table name must not be empty")]
    EmptyTableName,

    #[error("Duplicate size table '{name}' for gender {gender}")]
    DuplicateTable { name: String, gender: Gender },
}

/// True if `value` is finite and not negative.
#[inline]
#[must_use]
pub fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Check the bounds of a closed size range.
///
/// # Errors
///
/// Returns `ValidationError::InvalidRange` if either bound is negative or
/// non-finite, or if `min > max`.
pub fn check_range(min: f64, max: f64) -> Result<(), ValidationError> {
    if is_non_negative(min) && is_non_negative(max) && min <= max {
        Ok(())
    } else {
        Err(ValidationError::InvalidRange { min, max })
    }
}

/// Check tolerance fractions.
///
/// `down` is capped at 1 so a widened lower bound never turns negative.
///
/// # Errors
///
/// Returns `ValidationError::InvalidTolerance` when either fraction is out of range.
pub fn check_tolerance(down: f64, up: f64) -> Result<(), ValidationError> {
    if is_non_negative(down) && down <= 1.0 && is_non_negative(up) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTolerance { down, up })
    }
}

/// Check asymmetric penalty factors.
///
/// # Errors
///
/// Returns `ValidationError::InvalidFactors` if either factor is negative or non-finite.
pub fn check_factors(too_high: f64, too_low: f64) -> Result<(), ValidationError> {
    if is_non_negative(too_high) && is_non_negative(too_low) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFactors { too_high, too_low })
    }
}

/// Check that a table name is usable as a catalog key and link segment.
///
/// # Errors
///
/// Returns `ValidationError::EmptyTableName` for blank names.
pub fn check_table_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyTableName)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range(80.0, 90.0).is_ok());
        assert!(check_range(80.0, 80.0).is_ok());
        assert!(check_range(0.0, 0.0).is_ok());

        assert_eq!(
            check_range(90.0, 80.0),
            Err(ValidationError::InvalidRange {
                min: 90.0,
                max: 80.0
            })
        );
        assert!(check_range(-1.0, 80.0).is_err());
        assert!(check_range(80.0, f64::INFINITY).is_err());
        assert!(check_range(f64::NAN, 80.0).is_err());
    }

    #[test]
    fn test_check_tolerance() {
        assert!(check_tolerance(0.0, 0.0).is_ok());
        assert!(check_tolerance(0.1, 0.1).is_ok());
        assert!(check_tolerance(1.0, 2.5).is_ok());

        assert!(check_tolerance(1.5, 0.1).is_err());
        assert!(check_tolerance(-0.1, 0.1).is_err());
        assert!(check_tolerance(0.1, -0.1).is_err());
        assert!(check_tolerance(0.1, f64::NAN).is_err());
    }

    #[test]
    fn test_check_factors() {
        assert!(check_factors(1.0, 1.0).is_ok());
        assert!(check_factors(0.0, 3.0).is_ok());
        assert!(check_factors(-1.0, 1.0).is_err());
        assert!(check_factors(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_table_name() {
        assert!(check_table_name("pants").is_ok());
        assert_eq!(check_table_name(""), Err(ValidationError::EmptyTableName));
        assert_eq!(check_table_name("   "), Err(ValidationError::EmptyTableName));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::DuplicateTable {
            name: "pants".to_string(),
            gender: Gender::Male,
        };
        assert_eq!(
            err.to_string(),
            "Duplicate size table 'pants' for gender male"
        );
    }
}
