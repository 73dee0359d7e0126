//! Delimited table reading into a rectangular string matrix
//!
//! This module handles file reading and cell tokenization only. No type
//! coercion happens here: every cell is kept as a string, including blanks,
//! so that later stages can apply the format's normalization rules.

use crate::{Error, Result};
use std::path::Path;

/// Rectangular matrix of string cells read from a delimited file
///
/// The matrix width is fixed by the first row. Rows shorter than the width
/// are padded with empty cells; rows wider than the width are rejected as a
/// format error.
#[derive(Debug, Clone)]
pub struct TableMatrix {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl TableMatrix {
    /// Read a delimited file into a rectangular matrix
    ///
    /// The file is fully read into memory and closed before tokenization
    /// begins, so the handle is released on every exit path.
    pub fn read(path: &Path, delimiter: u8) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read curve table {}", path.display()), e)
        })?;

        Self::parse(&content, delimiter, &path.display().to_string())
    }

    /// Tokenize in-memory table content into a rectangular matrix
    ///
    /// Lines are tokenized one at a time: a whole-file csv reader skips
    /// zero-length lines, which would shift every fixed row offset below
    /// them. A zero-length line is a row of blank cells.
    pub fn parse(content: &str, delimiter: u8, file_label: &str) -> Result<Self> {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut width = 0usize;

        for (row_index, line) in content.lines().enumerate() {
            let mut cells = tokenize_line(line, delimiter, file_label, row_index)?;

            if row_index == 0 {
                width = cells.len();
            } else if cells.len() > width {
                return Err(Error::table_format(
                    file_label,
                    format!(
                        "Row {} has {} cells, wider than the {} cells of row 0",
                        row_index,
                        cells.len(),
                        width
                    ),
                ));
            }

            // Short rows represent trailing blank cells
            cells.resize(width, String::new());
            rows.push(cells);
        }

        if rows.is_empty() {
            return Err(Error::table_format(file_label, "File contains no rows"));
        }

        Ok(Self { rows, width })
    }

    /// Number of rows in the matrix
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell contents at `(row, col)`
    ///
    /// Out-of-range coordinates read as the empty string. Rows past the end
    /// of the file behave like trailing blank rows, which is exactly the
    /// semantics the data section needs.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}

/// Tokenize a single line into cells
fn tokenize_line(
    line: &str,
    delimiter: u8,
    file_label: &str,
    row_index: usize,
) -> Result<Vec<String>> {
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    csv_reader.read_record(&mut record).map_err(|e| {
        Error::csv_parsing(
            file_label,
            format!("Failed to tokenize row {}", row_index),
            Some(e),
        )
    })?;

    Ok(record.iter().map(|s| s.to_string()).collect())
}
