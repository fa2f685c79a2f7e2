//! Delimited-text export of a result table
//!
//! Same row/column serialization as the input file, restricted to the
//! selected columns and the rows of the given view, in view order.

use super::errors::{DatasetError, DatasetResult};
use super::fields::Column;
use super::table::Table;

/// Serializes `table` as CSV with a header of the selected column names.
///
/// Missing optional values are written as empty cells.
pub fn export_csv(table: &Table, columns: &[Column]) -> DatasetResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(columns.iter().map(|c| c.as_str()))
        .map_err(DatasetError::from_csv)?;

    for row in table {
        let cells = columns.iter().map(|c| row.cell(*c).unwrap_or_default());
        writer.write_record(cells).map_err(DatasetError::from_csv)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DatasetError::malformed(None, format!("Failed to flush export: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| DatasetError::malformed(None, format!("Export is not UTF-8: {}", e)))
}
