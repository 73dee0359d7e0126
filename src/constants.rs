//! Application constants for the Kc curve loader
//!
//! This module contains the curve table file-format offsets, curve sizing
//! constants, and curve-type code mappings used throughout the crate.

// =============================================================================
// Curve Table Layout
// =============================================================================
//
// The curve table format has no self-describing header. The row and column
// offsets below are properties of the format itself and are baked in here;
// a format change requires a code change.

/// Zero-indexed row holding the curve numbers
pub const CURVE_NUMBER_ROW: usize = 2;

/// Zero-indexed row holding the curve-type numbers
pub const CURVE_TYPE_ROW: usize = 3;

/// Zero-indexed row holding the crop names
pub const CURVE_NAME_ROW: usize = 4;

/// Zero-indexed row where curve values begin
pub const CURVE_DATA_START_ROW: usize = 6;

/// First column holding curve data; columns 0 and 1 carry row labels/units
pub const CURVE_DATA_START_COL: usize = 2;

/// Number of positional growth-stage samples per curve
pub const CURVE_VALUE_COUNT: usize = 35;

/// Number of rows required before the data section can start
pub const REQUIRED_HEADER_ROWS: usize = CURVE_NAME_ROW + 1;

// =============================================================================
// Curve Identifiers
// =============================================================================

/// Documented upper bound on curve numbers. Advisory only: the loader
/// does not enforce it.
pub const MAX_CURVE_COUNT: u32 = 60;

/// Curve-type numbers and display labels as defined by the curve table format
pub mod curve_types {
    /// Normalized cumulative growing degree days
    pub const NCGDD: u32 = 1;

    /// Percent of period from planting to effective cover
    pub const PL_EC: u32 = 2;

    /// %PL-EC extended with days after effective cover
    pub const PL_EC_DAYS_AFTER: u32 = 3;

    /// Percent of period from planting to termination
    pub const PL_TERM: u32 = 4;

    /// All valid curve-type numbers
    pub const ALL_VALID_VALUES: &[u32] = &[NCGDD, PL_EC, PL_EC_DAYS_AFTER, PL_TERM];

    /// Display label for curve type 1
    pub const NCGDD_LABEL: &str = "1=NCGDD";

    /// Display label for curve type 2
    pub const PL_EC_LABEL: &str = "2=%PL-EC";

    /// Display label for curve type 3
    pub const PL_EC_DAYS_AFTER_LABEL: &str = "3=%PL-EC+daysafter";

    /// Display label for curve type 4
    pub const PL_TERM_LABEL: &str = "4=%PL-Term";
}

// =============================================================================
// Defaults
// =============================================================================

/// Default cell delimiter for curve table files
pub const DEFAULT_DELIMITER: char = ',';
