//! Size table catalog storage.
//!
//! The catalog holds the size tables a recommendation is computed against,
//! together with the tolerance configured for each table name. An embedded
//! catalog is compiled into the binary, but custom catalogs can also be
//! loaded from JSON files.
//!
//! ## Embedded Catalog
//!
//! The default catalog covers jackets, pants and shirts, cut for men and
//! women where applicable.
//!
//! ## Example
//!
//! ```rust,no_run
//! use size_solver::SizeCatalog;
//! use size_solver::core::types::Gender;
//!
//! // Load embedded catalog
//! let catalog = SizeCatalog::load_embedded().unwrap();
//!
//! for table in catalog.tables_for(Gender::Female) {
//!     println!("{} ({} sizes)", table.name, table.sizes.len());
//! }
//!
//! let tolerance = catalog.tolerances.get("jacket");
//! ```
//!
//! ## Catalog Format
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "tables": [
//!     {
//!       "name": "pants",
//!       "gender": "male",
//!       "measurementImportance": [
//!         { "measurement": "waistCircumference", "allowTolerance": true,
//!           "factors": { "tooHigh": 2, "tooLow": 1 } }
//!       ],
//!       "sizes": [
//!         { "id": "48", "ranges": { "waistCircumference": { "min": 82, "max": 86 } } }
//!       ]
//!     }
//!   ],
//!   "tolerances": { "pants": { "down": 0.02, "up": 0.04 } }
//! }
//! ```

pub mod store;
pub mod tolerance;
