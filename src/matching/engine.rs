use serde::Serialize;
use std::cmp::Ordering;

use crate::catalog::store::SizeCatalog;
use crate::catalog::tolerance::ToleranceTable;
use crate::core::measurement::Measurements;
use crate::core::table::SizeTable;
use crate::core::types::Gender;
use crate::matching::diagnosis::{find_missing, MissingMeasurements};
use crate::matching::scoring::{score_table, SizeMatch};
use crate::parsing::input::ClothingInput;
use crate::utils::collation::collate;

/// All candidate sizes of one table, best fit first
#[derive(Debug, Clone, Serialize)]
pub struct TableMatch {
    pub name: String,
    pub gender: Gender,
    pub sizes: Vec<SizeMatch>,
}

impl TableMatch {
    /// The size with the lowest deviation
    #[must_use]
    pub fn best(&self) -> Option<&SizeMatch> {
        self.sizes.first()
    }

    /// Sizes whose deviation is below the acceptance limit
    pub fn acceptable(&self) -> impl Iterator<Item = &SizeMatch> {
        self.sizes.iter().filter(|m| m.is_acceptable())
    }
}

/// Result of matching one user's input against a catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Tables for the requested gender, sorted by name
    pub sizes: Vec<TableMatch>,

    /// Missing measurements across all tables, regardless of gender
    pub missing_measurements: MissingMeasurements,
}

impl Recommendation {
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableMatch> {
        self.sizes.iter().find(|t| t.name == name)
    }
}

/// Presentation limits applied when listing matches
///
/// Scoring never filters; these only trim what is shown.
#[derive(Debug, Clone, Default)]
pub struct MatchingConfig {
    /// Maximum number of sizes shown per table
    pub limit: Option<usize>,
    /// Hide sizes whose deviation is not acceptable
    pub acceptable_only: bool,
}

impl MatchingConfig {
    /// Sizes of a table that pass the configured limits, in ranked order
    pub fn visible<'a>(&self, table: &'a TableMatch) -> impl Iterator<Item = &'a SizeMatch> {
        let acceptable_only = self.acceptable_only;
        table
            .sizes
            .iter()
            .filter(move |m| !acceptable_only || m.is_acceptable())
            .take(self.limit.unwrap_or(usize::MAX))
    }
}

/// Order table names the way a user-facing list expects.
///
/// Letters compare without regard to case or diacritics first; see
/// [`collate`] for the tie-breaking levels.
#[must_use]
pub fn compare_table_names(a: &str, b: &str) -> Ordering {
    collate(a, b)
}

/// Score every table of the given gender and rank its sizes.
///
/// Sizes are sorted by ascending deviation; the sort is stable, so equal
/// deviations keep table order. The table list keeps input order.
#[must_use]
pub fn match_tables(
    tables: &[SizeTable],
    gender: Gender,
    measurements: &Measurements,
    tolerances: &ToleranceTable,
) -> Vec<TableMatch> {
    tables
        .iter()
        .filter(|t| t.gender == gender)
        .map(|table| {
            let mut sizes = score_table(table, measurements, tolerances);
            sizes.sort_by(|a, b| a.deviation.total_cmp(&b.deviation));

            TableMatch {
                name: table.name.clone(),
                gender: table.gender,
                sizes,
            }
        })
        .collect()
}

/// Normalize the input, score the matching tables and collect missing measurements
#[must_use]
pub fn calculate_matching_sizes(input: &ClothingInput, catalog: &SizeCatalog) -> Recommendation {
    MatchingEngine::new(catalog).recommend(input)
}

/// Matches measurements against the tables of a catalog
pub struct MatchingEngine<'a> {
    catalog: &'a SizeCatalog,
}

impl<'a> MatchingEngine<'a> {
    #[must_use]
    pub fn new(catalog: &'a SizeCatalog) -> Self {
        Self { catalog }
    }

    /// Ranked sizes for every catalog table of the given gender
    #[must_use]
    pub fn match_tables(&self, gender: Gender, measurements: &Measurements) -> Vec<TableMatch> {
        match_tables(
            &self.catalog.tables,
            gender,
            measurements,
            &self.catalog.tolerances,
        )
    }

    /// Missing measurements for every catalog table
    #[must_use]
    pub fn find_missing(&self, measurements: &Measurements) -> MissingMeasurements {
        find_missing(&self.catalog.tables, measurements)
    }

    /// Full recommendation for raw user input
    #[must_use]
    pub fn recommend(&self, input: &ClothingInput) -> Recommendation {
        self.recommend_measurements(input.gender, &input.measurements())
    }

    /// Full recommendation for already normalized measurements
    #[must_use]
    pub fn recommend_measurements(
        &self,
        gender: Gender,
        measurements: &Measurements,
    ) -> Recommendation {
        let missing_measurements = self.find_missing(measurements);

        let mut sizes = self.match_tables(gender, measurements);
        sizes.sort_by(|a, b| compare_table_names(&a.name, &b.name));

        tracing::debug!(
            %gender,
            tables = sizes.len(),
            provided = measurements.usable_count(),
            incomplete_tables = missing_measurements.len(),
            "Computed size recommendation"
        );

        Recommendation {
            sizes,
            missing_measurements,
        }
    }
}
