//! Size matching engine and scoring algorithms.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchingEngine`](engine::MatchingEngine): main entry point for recommendations
//! - [`SizeMatch`](scoring::SizeMatch): a candidate size with its deviation
//! - [`MissingMeasurements`](diagnosis::MissingMeasurements): measurements
//!   tables need but the user did not give
//!
//! ## Scoring
//!
//! Each table lists importance rules. For every candidate size, every rule
//! contributes to the size's deviation:
//!
//! - **Missing measurement**: a fixed penalty of 1000
//! - **No range for the measurement**: 0
//! - **Otherwise**: the distance outside the size's range, times the rule's
//!   `tooLow` or `tooHigh` factor. The range is widened by the table's
//!   tolerance when the rule allows it.
//!
//! A deviation of 0 is a perfect fit; deviations below 250 are acceptable.
//!
//! ## Example
//!
//! ```rust,no_run
//! use size_solver::{ClothingInput, MatchingEngine, SizeCatalog};
//! use size_solver::core::types::Gender;
//!
//! let catalog = SizeCatalog::load_embedded().unwrap();
//! let input = ClothingInput::new(Gender::Male)
//!     .with_height(180.0)
//!     .with_chest("100");
//!
//! let recommendation = MatchingEngine::new(&catalog).recommend(&input);
//! for table in &recommendation.sizes {
//!     if let Some(best) = table.best() {
//!         println!("{}: {} ({:.1})", table.name, best.size.id, best.deviation);
//!     }
//! }
//! ```

pub mod diagnosis;
pub mod engine;
pub mod scoring;
