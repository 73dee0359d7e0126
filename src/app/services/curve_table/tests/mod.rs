//! Shared test utilities and fixtures for curve table tests

use crate::constants::CURVE_VALUE_COUNT;
use std::fs;
use std::path::{Path, PathBuf};


/// One curve column of a synthetic curve table
#[derive(Debug, Clone)]
pub struct TestColumn {
    pub curve_no: String,
    pub curve_type_no: String,
    pub name: String,
    pub values: Vec<String>,
}

impl TestColumn {
    pub fn new(curve_no: &str, curve_type_no: &str, name: &str, values: &[&str]) -> Self {
        Self {
            curve_no: curve_no.to_string(),
            curve_type_no: curve_type_no.to_string(),
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Build curve table content in the fixed row layout
///
/// Row 0/1 carry documentation text, rows 2-4 the curve headers, row 5 a
/// units line, and rows 6.. the curve values. Columns 0 and 1 hold row
/// labels and units. `data_rows` is normally `CURVE_VALUE_COUNT` but can
/// be larger or smaller to exercise truncation and padding.
pub fn build_curve_table(columns: &[TestColumn], delimiter: char, data_rows: usize) -> String {
    let ncols = columns.len();
    let mut lines: Vec<String> = Vec::new();

    let row = |label: &str, unit: &str, cells: Vec<String>| -> String {
        let mut fields = vec![label.to_string(), unit.to_string()];
        fields.extend(cells);
        fields.join(&delimiter.to_string())
    };

    lines.push(row("Crop coefficient curves", "", vec![String::new(); ncols]));
    lines.push(row("Maximum 60 curves", "", vec![String::new(); ncols]));
    lines.push(row(
        "Curve number",
        "",
        columns.iter().map(|c| c.curve_no.clone()).collect(),
    ));
    lines.push(row(
        "Curve type",
        "",
        columns.iter().map(|c| c.curve_type_no.clone()).collect(),
    ));
    lines.push(row(
        "Crop name",
        "",
        columns.iter().map(|c| c.name.clone()).collect(),
    ));
    lines.push(row("Percent time or GDD", "step", vec![String::new(); ncols]));

    for step in 0..data_rows {
        let cells = columns
            .iter()
            .map(|c| c.values.get(step).cloned().unwrap_or_default())
            .collect();
        lines.push(row(&format!("{}", step + 1), "", cells));
    }

    lines.join("\n") + "\n"
}

/// Write a curve table fixture file and return its path
pub fn write_curve_table(
    dir: &Path,
    filename: &str,
    columns: &[TestColumn],
    delimiter: char,
) -> PathBuf {
    let path = dir.join(filename);
    let content = build_curve_table(columns, delimiter, CURVE_VALUE_COUNT);
    fs::write(&path, content).unwrap();
    path
}

/// Ramp of `count` increasing values formatted as strings
pub fn ramp_values(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{:.2}", 0.1 * (i + 1) as f64)).collect()
}
