use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::TableLoadError;

/// One row of the static nutrition table. `item_name` is the unique key;
/// all values are per the table's serving definition and non-negative.
#[derive(Debug, Clone, Deserialize)]
pub struct NutritionRecord {
    pub item_name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl NutritionRecord {
    fn negative_column(&self) -> Option<&'static str> {
        if self.calories < 0.0 {
            return Some("calories");
        }
        if self.protein_g < 0.0 {
            return Some("protein_g");
        }
        if self.fat_g < 0.0 {
            return Some("fat_g");
        }
        if self.carbs_g < 0.0 {
            return Some("carbs_g");
        }
        None
    }
}

/// The static nutrition lookup table: loaded fully into memory once at
/// startup, read-only for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct NutritionTable {
    records: Vec<NutritionRecord>,
}

impl NutritionTable {
    /// Load the table from a CSV file with columns
    /// `item_name,calories,protein_g,fat_g,carbs_g`.
    ///
    /// Fails fast on a missing file, malformed rows, negative values, or
    /// duplicate item names, so a bad table is caught before any request.
    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| TableLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        for row in reader.deserialize::<NutritionRecord>() {
            let record = row.map_err(|source| TableLoadError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
            if let Some(column) = record.negative_column() {
                return Err(TableLoadError::NegativeValue {
                    path: path.to_path_buf(),
                    item: record.item_name,
                    column,
                });
            }
            if !seen.insert(record.item_name.clone()) {
                return Err(TableLoadError::DuplicateItem {
                    path: path.to_path_buf(),
                    item: record.item_name,
                });
            }
            records.push(record);
        }

        debug!(items = records.len(), table = %path.display(), "loaded nutrition table");
        Ok(Self { records })
    }

    /// Build a table directly from records, bypassing the file format.
    pub fn from_records(records: Vec<NutritionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[NutritionRecord] {
        &self.records
    }

    /// Filter the table to rows whose `item_name` appears among `labels`.
    ///
    /// Matching is by set membership: repeated detections of the same label
    /// still yield the single matching table row, table row order is
    /// preserved, and labels absent from the table are dropped silently.
    /// No match at all is an empty result, not an error.
    pub fn match_labels<S: AsRef<str>>(&self, labels: &[S]) -> Vec<NutritionRecord> {
        let wanted: HashSet<&str> = labels.iter().map(|label| label.as_ref()).collect();
        self.records
            .iter()
            .filter(|record| wanted.contains(record.item_name.as_str()))
            .cloned()
            .collect()
    }
}
