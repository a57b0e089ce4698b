use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::catalog::tolerance::ToleranceTable;
use crate::core::table::SizeTable;
use crate::core::types::Gender;
use crate::utils::validation::{check_table_name, ValidationError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub tables: Vec<SizeTable>,
    #[serde(default, skip_serializing_if = "ToleranceTable::is_empty")]
    pub tolerances: ToleranceTable,
}

/// The size tables known to the matcher, plus their tolerances
#[derive(Debug, Clone, Default)]
pub struct SizeCatalog {
    /// All tables in catalog order
    pub tables: Vec<SizeTable>,

    /// Tolerance per table name
    pub tolerances: ToleranceTable,

    /// Index: (name, gender) -> index in tables vec
    key_to_index: HashMap<(String, Gender), usize>,
}

impl SizeCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog cannot be parsed.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/clothing_sizes.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid catalog.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON, invalid ranges or tolerances,
    /// empty table names, or a repeated (name, gender) pair.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        catalog.tolerances = data.tolerances;
        for table in data.tables {
            catalog.add_table(table)?;
        }

        tracing::debug!(
            tables = catalog.len(),
            tolerances = catalog.tolerances.len(),
            "Loaded size catalog"
        );

        Ok(catalog)
    }

    /// Add a table to the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or a table with the same
    /// name and gender already exists.
    pub fn add_table(&mut self, table: SizeTable) -> Result<(), ValidationError> {
        check_table_name(&table.name)?;

        let key = (table.name.clone(), table.gender);
        if self.key_to_index.contains_key(&key) {
            return Err(ValidationError::DuplicateTable {
                name: table.name,
                gender: table.gender,
            });
        }

        self.key_to_index.insert(key, self.tables.len());
        self.tables.push(table);
        Ok(())
    }

    /// Get a table by name and gender
    #[must_use]
    pub fn get(&self, name: &str, gender: Gender) -> Option<&SizeTable> {
        self.key_to_index
            .get(&(name.to_string(), gender))
            .map(|&idx| &self.tables[idx])
    }

    /// Tables cut for the given gender, in catalog order
    pub fn tables_for(&self, gender: Gender) -> impl Iterator<Item = &SizeTable> {
        self.tables.iter().filter(move |t| t.gender == gender)
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            tables: self.tables.clone(),
            tolerances: self.tolerances.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of tables in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measurement::Measurement;
    use crate::core::table::{ClothingSize, ImportanceRule, SizeRange};

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = SizeCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(!catalog.tolerances.is_empty());
    }

    #[test]
    fn test_embedded_catalog_has_both_genders() {
        let catalog = SizeCatalog::load_embedded().unwrap();
        assert!(catalog.tables_for(Gender::Male).count() > 0);
        assert!(catalog.tables_for(Gender::Female).count() > 0);

        let pants = catalog.get("pants", Gender::Male).unwrap();
        assert_eq!(pants.gender, Gender::Male);
        assert!(!pants.sizes.is_empty());
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = SizeCatalog::load_embedded().unwrap();
        assert!(catalog.get("nonexistent_table", Gender::Male).is_none());
    }

    #[test]
    fn test_catalog_to_json_round_trips() {
        let catalog = SizeCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"tables\""));
        assert!(json.contains("\"tolerances\""));

        let reloaded = SizeCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.tables, catalog.tables);
        assert_eq!(reloaded.tolerances, catalog.tolerances);
    }

    #[test]
    fn test_add_table() {
        let mut catalog = SizeCatalog::new();
        assert_eq!(catalog.len(), 0);

        let table = SizeTable::new("shirt", Gender::Male)
            .with_rule(ImportanceRule::new(Measurement::ChestCircumference))
            .with_size(ClothingSize::new("M").with_range(
                Measurement::ChestCircumference,
                SizeRange::new(94.0, 100.0).unwrap(),
            ));

        catalog.add_table(table.clone()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("shirt", Gender::Male), Some(&table));
        assert!(catalog.get("shirt", Gender::Female).is_none());

        // Same name, other gender is a different table
        catalog
            .add_table(SizeTable::new("shirt", Gender::Female))
            .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_add_duplicate_table_fails() {
        let mut catalog = SizeCatalog::new();
        catalog.add_table(SizeTable::new("pants", Gender::Male)).unwrap();

        let err = catalog
            .add_table(SizeTable::new("pants", Gender::Male))
            .unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateTable { .. }));
    }

    #[test]
    fn test_from_json_rejects_blank_name() {
        let json = r#"{ "version": "1.0.0", "tables": [
            { "name": " ", "gender": "male", "measurementImportance": [], "sizes": [] }
        ] }"#;
        let err = SizeCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(ValidationError::EmptyTableName)));
    }

    #[test]
    fn test_from_json_without_tolerances() {
        let json = r#"{ "version": "0.9.0", "tables": [] }"#;
        let catalog = SizeCatalog::from_json(json).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.tolerances.is_empty());
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = SizeCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
    }
}
