//! Curve table header extraction
//!
//! The curve table format keeps its per-curve metadata in three fixed rows:
//! curve numbers, curve-type numbers, and crop names. Rows 0, 1 and 5 hold
//! documentation and units text the loader does not consume.

use super::reader::TableMatrix;
use crate::constants::{
    CURVE_DATA_START_COL, CURVE_NAME_ROW, CURVE_NUMBER_ROW, CURVE_TYPE_ROW, REQUIRED_HEADER_ROWS,
};
use crate::{Error, Result};

/// Per-curve header metadata extracted from the fixed header rows
///
/// The three vectors are parallel: index `i` describes curve column `i`,
/// which lives at matrix column `CURVE_DATA_START_COL + i`.
#[derive(Debug, Clone)]
pub struct CurveHeaders {
    /// Curve number cells, verbatim (may carry a trailing ".0" or be blank)
    pub curve_numbers: Vec<String>,

    /// Curve-type number cells, verbatim
    pub curve_type_numbers: Vec<String>,

    /// Crop name cells, verbatim
    pub curve_names: Vec<String>,
}

impl CurveHeaders {
    /// Extract header metadata from the fixed header rows of the matrix
    pub fn extract(matrix: &TableMatrix, file_label: &str) -> Result<Self> {
        if matrix.row_count() < REQUIRED_HEADER_ROWS {
            return Err(Error::table_format(
                file_label,
                format!(
                    "Missing header rows: found {} rows, need at least {}",
                    matrix.row_count(),
                    REQUIRED_HEADER_ROWS
                ),
            ));
        }

        let column_count = matrix.width().saturating_sub(CURVE_DATA_START_COL);

        let extract_row = |row: usize| -> Vec<String> {
            (0..column_count)
                .map(|i| matrix.cell(row, CURVE_DATA_START_COL + i).to_string())
                .collect()
        };

        Ok(Self {
            curve_numbers: extract_row(CURVE_NUMBER_ROW),
            curve_type_numbers: extract_row(CURVE_TYPE_ROW),
            curve_names: extract_row(CURVE_NAME_ROW),
        })
    }

    /// Number of curve columns described by the header
    pub fn column_count(&self) -> usize {
        self.curve_numbers.len()
    }
}
