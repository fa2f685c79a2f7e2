//! In-memory table of locality records
//!
//! A `Table` is an ordered sequence of rows. Operations never mutate a table
//! in place; they build a new one.

use std::collections::HashSet;
use std::io::Read;

use serde::Serialize;

use super::errors::{DatasetError, DatasetResult};
use super::fields::NumericField;
use super::record::LocalityRecord;

/// An ordered, immutable set of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<LocalityRecord>,
}

impl Table {
    /// Creates a table from rows without validation.
    ///
    /// Used for views derived from an already validated table.
    pub fn new(rows: Vec<LocalityRecord>) -> Self {
        Self { rows }
    }

    /// Creates a table and checks every row invariant plus id uniqueness
    pub fn validated(rows: Vec<LocalityRecord>) -> DatasetResult<Self> {
        let mut seen = HashSet::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            // data starts on line 2, after the header
            let line = Some(i as u64 + 2);
            row.validate(line)?;
            if !seen.insert(row.area_id.as_str()) {
                return Err(DatasetError::malformed(
                    line,
                    format!("duplicate area_id '{}'", row.area_id),
                ));
            }
        }
        Ok(Self { rows })
    }

    /// Parses and validates CSV content with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.deserialize::<LocalityRecord>() {
            rows.push(result.map_err(DatasetError::from_csv)?);
        }

        Self::validated(rows)
    }

    pub fn rows(&self) -> &[LocalityRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalityRecord> {
        self.rows.iter()
    }

    /// Present values of a numeric field, in row order
    pub fn values(&self, field: NumericField) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.numeric(field)).collect()
    }

    pub fn into_rows(self) -> Vec<LocalityRecord> {
        self.rows
    }
}

impl FromIterator<LocalityRecord> for Table {
    fn from_iter<T: IntoIterator<Item = LocalityRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a LocalityRecord;
    type IntoIter = std::slice::Iter<'a, LocalityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
