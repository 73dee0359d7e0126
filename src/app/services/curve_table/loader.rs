//! Curve catalog loading and assembly
//!
//! This module orchestrates the load pipeline: read the delimited file into
//! a matrix, extract the header rows, parse each curve column, and collect
//! the results into a catalog keyed by curve number.

use super::CurveCatalog;
use super::column::parse_curve_column;
use super::header::CurveHeaders;
use super::reader::TableMatrix;
use crate::config::Config;
use crate::constants::{CURVE_DATA_START_COL, CURVE_DATA_START_ROW, CURVE_VALUE_COUNT};
use crate::{Error, Result};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Statistics collected while loading a curve catalog
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Curve columns present in the file (header width minus label columns)
    pub columns_scanned: usize,

    /// Curves inserted into the catalog
    pub curves_loaded: usize,

    /// Placeholder columns skipped (blank curve number)
    pub placeholders_skipped: usize,

    /// Earlier entries overwritten by a later column with the same curve number
    pub duplicates_overwritten: usize,

    /// Wall-clock duration of the load
    pub load_duration: Duration,
}

impl CurveCatalog {
    /// Load a curve catalog from a delimited curve table file
    ///
    /// Any parse error aborts the whole load; a partial catalog is never
    /// returned. Placeholder columns (blank curve number) are skipped
    /// silently. Duplicate curve numbers follow last-write-wins and are
    /// surfaced through a warning.
    ///
    /// # Errors
    /// * `Error::Io` when the file cannot be opened or read
    /// * `Error::TableFormat` on inconsistent row widths or missing header rows
    /// * `Error::InvalidIdentifier`, `Error::InvalidCurveType`,
    ///   `Error::InvalidNumeric` on per-column parse failures
    pub fn load(path: &Path, delimiter: char) -> Result<(Self, LoadStats)> {
        if !delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "Delimiter '{}' is not a single-byte ASCII character",
                delimiter
            )));
        }

        info!("Loading curve catalog from {}", path.display());

        let start_time = Instant::now();
        let file_label = path.display().to_string();

        let matrix = TableMatrix::read(path, delimiter as u8)?;
        let headers = CurveHeaders::extract(&matrix, &file_label)?;

        let mut catalog = Self::new(path.to_path_buf());
        let mut stats = LoadStats {
            columns_scanned: headers.column_count(),
            ..LoadStats::default()
        };

        for i in 0..headers.column_count() {
            let matrix_col = CURVE_DATA_START_COL + i;

            let cells: Vec<&str> = (0..CURVE_VALUE_COUNT)
                .map(|step| matrix.cell(CURVE_DATA_START_ROW + step, matrix_col))
                .collect();

            let parsed = parse_curve_column(
                matrix_col,
                &headers.curve_numbers[i],
                &headers.curve_type_numbers[i],
                &headers.curve_names[i],
                &cells,
            )?;

            match parsed {
                Some(curve) => {
                    debug!(
                        "Parsed curve {} '{}' ({}), last entry index {}",
                        curve.curve_no,
                        curve.name,
                        curve.curve_type_label(),
                        curve.last_entry_index
                    );

                    if let Some(previous) = catalog.curves.insert(curve.curve_no, curve) {
                        // Last write wins, matching the legacy loader
                        warn!(
                            "Duplicate curve number {}: replacing '{}' with the later column",
                            previous.curve_no, previous.name
                        );
                        stats.duplicates_overwritten += 1;
                    } else {
                        stats.curves_loaded += 1;
                    }
                }
                None => {
                    debug!("Skipping placeholder column {}", matrix_col);
                    stats.placeholders_skipped += 1;
                }
            }
        }

        stats.load_duration = start_time.elapsed();

        info!(
            "Curve catalog loaded: {} curves from {} columns ({} placeholders, {} duplicates) in {:.2?}",
            catalog.len(),
            stats.columns_scanned,
            stats.placeholders_skipped,
            stats.duplicates_overwritten,
            stats.load_duration
        );

        Ok((catalog, stats))
    }

    /// Load a curve catalog using a validated [`Config`]
    pub fn load_with_config(config: &Config) -> Result<(Self, LoadStats)> {
        config.validate()?;
        Self::load(&config.curve_file, config.delimiter)
    }
}
