//! Per-column curve parsing
//!
//! This module turns one curve column (identifier cells plus 35 value
//! cells) into a [`CropCoefficient`], applying the format's normalization
//! rules: placeholder-column skipping, trailing-".0" identifier stripping,
//! and blank-to-zero value coercion.

use crate::app::models::{CropCoefficient, CurveType};
use crate::constants::CURVE_VALUE_COUNT;
use crate::{Error, Result};

/// Parse one curve column into a [`CropCoefficient`]
///
/// `column` is the matrix column index, used only for error context.
/// Returns `Ok(None)` for placeholder columns (blank curve number), which
/// the catalog silently drops.
pub fn parse_curve_column(
    column: usize,
    curve_no_str: &str,
    curve_type_no_str: &str,
    name: &str,
    cells: &[&str],
) -> Result<Option<CropCoefficient>> {
    // Blank curve number marks an unused placeholder column
    if curve_no_str.trim().is_empty() {
        return Ok(None);
    }

    let curve_no = parse_identifier(column, "curve number", curve_no_str)?;
    if curve_no == 0 {
        return Err(Error::invalid_identifier(column, "curve number", curve_no_str));
    }

    let curve_type_no = parse_identifier(column, "curve type", curve_type_no_str)?;
    let curve_type = CurveType::from_number(curve_type_no)
        .ok_or_else(|| Error::invalid_curve_type(column, curve_type_no_str.trim()))?;

    let mut data = Vec::with_capacity(CURVE_VALUE_COUNT);
    for step in 0..CURVE_VALUE_COUNT {
        let cell = cells.get(step).copied().unwrap_or("");
        data.push(parse_curve_value(column, step, cell)?);
    }

    // Name is kept verbatim; trimming would break downstream joins
    let curve = CropCoefficient::new(curve_no, curve_type, name.to_string(), data)?;
    Ok(Some(curve))
}

/// Parse an integer identifier cell, tolerating one trailing ".0" suffix
///
/// The table stores integer identifiers as floats ("12.0"), so a single
/// ".0" is stripped textually before integer parsing. This is not a
/// rounding: "12.5" still fails.
fn parse_identifier(column: usize, field: &'static str, value: &str) -> Result<u32> {
    let trimmed = value.trim();
    let normalized = trimmed.strip_suffix(".0").unwrap_or(trimmed);

    normalized
        .parse::<u32>()
        .map_err(|_| Error::invalid_identifier(column, field, trimmed))
}

/// Parse one curve value cell; blanks read as 0.0
fn parse_curve_value(column: usize, step: usize, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| Error::invalid_numeric(column, step, trimmed))
}
