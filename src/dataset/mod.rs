//! Dataset subsystem
//!
//! Static row schema, CSV loading with candidate-path search, row
//! validation, the injectable data source and CSV export.
//!
//! # Invariants
//!
//! - Scores lie in [0, 100]; rent, price and counts are non-negative
//! - Categorical columns are closed enumerations
//! - `area_id` is unique within a table
//! - The loaded table is never mutated; every operation builds a new view

mod errors;
mod export;
mod fields;
mod loader;
mod record;
mod source;
mod table;

pub use errors::{DatasetError, DatasetErrorCode, DatasetResult, Severity};
pub use export::export_csv;
pub use fields::{CategoricalField, Column, ColumnKind, NumericField};
pub use loader::{default_candidates, DatasetLoader, DATASET_FILE_NAME};
pub use record::{AreaType, GrowthTrend, InvestmentCategory, LocalityRecord, LocalityType};
pub use source::{CsvDataSource, DataSource, StaticDataSource};
pub use table::Table;

#[cfg(test)]
pub(crate) use record::testing;
