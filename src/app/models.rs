//! Data models for crop coefficient curves
//!
//! This module contains the core data structures representing a single crop
//! coefficient curve and its type convention, following the curve table
//! format used by ET demand models.

use crate::constants::{CURVE_VALUE_COUNT, curve_types};
use crate::{Error, Result};
use serde::Serialize;

// =============================================================================
// Curve Type
// =============================================================================

/// Independent-variable convention used by a crop coefficient curve
///
/// Each curve samples the crop coefficient against one of four time bases.
/// The numeric codes and display labels are fixed by the file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CurveType {
    /// Normalized cumulative growing degree days
    NcGdd,

    /// Percent of the period from planting to effective cover
    PlantingToCover,

    /// %PL-EC extended with days after effective cover
    PlantingToCoverExtended,

    /// Percent of the period from planting to termination
    PlantingToTermination,
}

impl CurveType {
    /// Resolve a curve type from its numeric code
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            curve_types::NCGDD => Some(Self::NcGdd),
            curve_types::PL_EC => Some(Self::PlantingToCover),
            curve_types::PL_EC_DAYS_AFTER => Some(Self::PlantingToCoverExtended),
            curve_types::PL_TERM => Some(Self::PlantingToTermination),
            _ => None,
        }
    }

    /// Numeric code as stored in the curve table
    pub fn number(&self) -> u32 {
        match self {
            Self::NcGdd => curve_types::NCGDD,
            Self::PlantingToCover => curve_types::PL_EC,
            Self::PlantingToCoverExtended => curve_types::PL_EC_DAYS_AFTER,
            Self::PlantingToTermination => curve_types::PL_TERM,
        }
    }

    /// Display label as used in curve table documentation rows
    pub fn label(&self) -> &'static str {
        match self {
            Self::NcGdd => curve_types::NCGDD_LABEL,
            Self::PlantingToCover => curve_types::PL_EC_LABEL,
            Self::PlantingToCoverExtended => curve_types::PL_EC_DAYS_AFTER_LABEL,
            Self::PlantingToTermination => curve_types::PL_TERM_LABEL,
        }
    }
}

// =============================================================================
// Crop Coefficient Curve
// =============================================================================

/// A single crop coefficient curve parsed from one table column
///
/// Holds the curve identity, its type convention, and the 35 positional
/// growth-stage samples, exactly as normalized from the source column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropCoefficient {
    /// Curve number - primary key for catalog lookups (documented range 1-60)
    pub curve_no: u32,

    /// Independent-variable convention for this curve
    pub curve_type: CurveType,

    /// Crop name, stored verbatim to preserve downstream joins
    pub name: String,

    /// 35 positional curve values; blank source cells are coerced to 0.0
    pub data: Vec<f64>,

    /// Index of the last usable curve entry: (count of values > 0.0) - 1.
    /// -1 when every value is zero; callers decide how to treat that.
    pub last_entry_index: i32,
}

impl CropCoefficient {
    /// Create a new curve, computing `last_entry_index` from the data
    pub fn new(curve_no: u32, curve_type: CurveType, name: String, data: Vec<f64>) -> Result<Self> {
        if data.len() != CURVE_VALUE_COUNT {
            return Err(Error::configuration(format!(
                "Curve {} has {} values, expected {}",
                curve_no,
                data.len(),
                CURVE_VALUE_COUNT
            )));
        }

        let positive_count = data.iter().filter(|v| **v > 0.0).count();
        let last_entry_index = positive_count as i32 - 1;

        Ok(Self {
            curve_no,
            curve_type,
            name,
            data,
            last_entry_index,
        })
    }

    /// Display label for this curve's type
    pub fn curve_type_label(&self) -> &'static str {
        self.curve_type.label()
    }

    /// Whether the curve carries any usable (strictly positive) values
    pub fn is_populated(&self) -> bool {
        self.last_entry_index >= 0
    }
}
