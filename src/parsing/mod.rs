//! Normalization of user-entered measurements.
//!
//! Form fields arrive as numbers, numeric strings, empty strings or `null`.
//! [`input::normalize`] turns a [`input::ClothingInput`] into a fixed-shape
//! [`Measurements`](crate::core::measurement::Measurements) set:
//!
//! | Raw value | Result |
//! |-----------|--------|
//! | number | passed through |
//! | `""`, `null`, missing | absent |
//! | numeric string | parsed (surrounding whitespace ignored) |
//! | non-numeric string | absent, logged |
//! | boolean, array, object | absent, logged |
//!
//! ## Example
//!
//! ```rust
//! use size_solver::parsing::input::ClothingInput;
//! use size_solver::core::measurement::Measurement;
//!
//! let input = ClothingInput::from_json(r#"{ "height": "180", "gender": "male" }"#).unwrap();
//! let measurements = input.measurements();
//! assert_eq!(measurements.get(Measurement::Height), Some(180.0));
//! ```

pub mod input;
