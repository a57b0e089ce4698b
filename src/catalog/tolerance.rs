use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::table::Tolerance;

/// Tolerances keyed by size table name
///
/// A tolerance applies to every table with that name, whatever its gender.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToleranceTable(BTreeMap<String, Tolerance>);

impl ToleranceTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, table_name: impl Into<String>, tolerance: Tolerance) -> Self {
        self.insert(table_name, tolerance);
        self
    }

    pub fn insert(&mut self, table_name: impl Into<String>, tolerance: Tolerance) {
        self.0.insert(table_name.into(), tolerance);
    }

    /// Tolerance configured for a table name, if any
    #[must_use]
    pub fn get(&self, table_name: &str) -> Option<Tolerance> {
        self.0.get(table_name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Tolerance)> {
        self.0.iter().map(|(name, t)| (name.as_str(), *t))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
