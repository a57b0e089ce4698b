//! Core data types for clothing size matching.
//!
//! - [`Measurement`], [`Measurements`]: body measurements supplied by a user
//! - [`SizeTable`]: a garment's size chart for one gender, with its
//!   [`ImportanceRule`]s and candidate [`ClothingSize`]s
//! - [`SizeRange`], [`Tolerance`], [`Factors`]: the numbers a rule scores with
//! - [`Gender`], [`RuleOutcome`]: classification types
//!
//! All values are validated when built or deserialized: ranges are
//! non-negative with `min <= max`, tolerances keep `0 <= down <= 1`.
//!
//! [`Measurement`]: measurement::Measurement
//! [`Measurements`]: measurement::Measurements
//! [`SizeTable`]: table::SizeTable
//! [`ImportanceRule`]: table::ImportanceRule
//! [`ClothingSize`]: table::ClothingSize
//! [`SizeRange`]: table::SizeRange
//! [`Tolerance`]: table::Tolerance
//! [`Factors`]: table::Factors
//! [`Gender`]: types::Gender
//! [`RuleOutcome`]: types::RuleOutcome

pub mod measurement;
pub mod table;
pub mod types;
