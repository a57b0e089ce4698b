//! # size-solver
//!
//! A library for recommending clothing sizes from body measurements.
//!
//! Clothing is sold in sizes defined by tables: each size accepts a range of
//! heights, chest, waist and hip circumferences, or inside leg lengths. A
//! person rarely falls inside every range of a single size, and different
//! garments care about different measurements.
//!
//! `size-solver` scores a person's measurements against every size of every
//! table and ranks the sizes by how far the measurements fall outside them.
//!
//! ## Features
//!
//! - **Deviation scoring**: distance outside a size's range, weighted per
//!   direction (too small vs. too large)
//! - **Tolerances**: per-garment widening of size ranges
//! - **Missing measurement detection**: reports which measurements each table
//!   still needs, and penalizes sizes that cannot be checked
//! - **Lenient input**: form values may be numbers, numeric strings or empty
//!
//! ## Example
//!
//! ```rust,no_run
//! use size_solver::{ClothingInput, MatchingEngine, SizeCatalog};
//! use size_solver::core::types::Gender;
//!
//! // Load the embedded catalog of size tables
//! let catalog = SizeCatalog::load_embedded().unwrap();
//!
//! let input = ClothingInput::new(Gender::Male)
//!     .with_height(180.0)
//!     .with_chest(100.0)
//!     .with_waist("88");
//!
//! let recommendation = MatchingEngine::new(&catalog).recommend(&input);
//!
//! for table in &recommendation.sizes {
//!     for m in table.acceptable() {
//!         println!("{} {}: {:.1}", table.name, m.size.id, m.deviation);
//!     }
//! }
//! for (table, missing) in recommendation.missing_measurements.iter() {
//!     println!("{table} also needs {missing:?}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Size table catalog storage and tolerances
//! - [`core`]: Core data types for measurements and size tables
//! - [`matching`]: Matching engine and scoring algorithms
//! - [`parsing`]: Normalization of user-entered measurements
//! - [`link`]: Links to size table detail pages
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod link;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::SizeCatalog;
pub use catalog::tolerance::ToleranceTable;
pub use crate::core::measurement::{Measurement, Measurements};
pub use crate::core::table::{ClothingSize, Factors, ImportanceRule, SizeRange, SizeTable, Tolerance};
pub use crate::core::types::*;
pub use matching::diagnosis::{find_missing, MissingMeasurements};
pub use matching::engine::{
    calculate_matching_sizes, match_tables, MatchingEngine, Recommendation, TableMatch,
};
pub use matching::scoring::{deviation, is_acceptable, score_table, SizeMatch};
pub use parsing::input::{ClothingInput, RawValue};
