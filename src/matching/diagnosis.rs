use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::measurement::{Measurement, Measurements};
use crate::core::table::SizeTable;
use crate::core::types::RuleOutcome;

/// Contribution of one importance rule to a size's deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleDeviation {
    pub measurement: Measurement,
    pub contribution: f64,
    pub outcome: RuleOutcome,
}

/// Measurements each table needs but the user did not provide
///
/// Entries keep the order in which tables were first seen. Only tables with
/// at least one missing measurement are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissingMeasurements {
    entries: Vec<(String, Vec<Measurement>)>,
}

impl MissingMeasurements {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the missing measurements of a table.
    ///
    /// A repeated name replaces the earlier list but keeps its position.
    pub fn insert(&mut self, table_name: impl Into<String>, missing: Vec<Measurement>) {
        let table_name = table_name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == table_name) {
            entry.1 = missing;
        } else {
            self.entries.push((table_name, missing));
        }
    }

    #[must_use]
    pub fn get(&self, table_name: &str) -> Option<&[Measurement]> {
        self.entries
            .iter()
            .find(|(name, _)| name == table_name)
            .map(|(_, missing)| missing.as_slice())
    }

    #[must_use]
    pub fn contains(&self, table_name: &str) -> bool {
        self.get(table_name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Measurement])> {
        self.entries
            .iter()
            .map(|(name, missing)| (name.as_str(), missing.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MissingMeasurements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, missing) in &self.entries {
            map.serialize_entry(name, missing)?;
        }
        map.end()
    }
}

/// Measurements referenced by a table's rules that cannot be scored, in rule order
#[must_use]
pub fn missing_for_table(table: &SizeTable, measurements: &Measurements) -> Vec<Measurement> {
    table
        .required_measurements()
        .filter(|&kind| measurements.is_missing(kind))
        .collect()
}

/// Collect missing measurements for every table, whatever its gender
#[must_use]
pub fn find_missing(tables: &[SizeTable], measurements: &Measurements) -> MissingMeasurements {
    let mut result = MissingMeasurements::new();

    for table in tables {
        let missing = missing_for_table(table, measurements);
        if !missing.is_empty() {
            tracing::debug!(
                table = %table.name,
                gender = %table.gender,
                missing = missing.len(),
                "Table needs measurements that were not provided"
            );
            result.insert(table.name.clone(), missing);
        }
    }

    result
}
