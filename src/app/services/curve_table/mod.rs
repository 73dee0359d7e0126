//! Curve table service for loading crop coefficient catalogs
//!
//! This module turns a delimited curve table file into an in-memory catalog
//! of [`CropCoefficient`] entries indexed by curve number for O(1) lookups
//! by downstream ET calculations.

use crate::app::models::CropCoefficient;
use std::collections::HashMap;
use std::path::PathBuf;

pub mod column;
pub mod header;
pub mod loader;
pub mod reader;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use header::CurveHeaders;
pub use loader::LoadStats;
pub use reader::TableMatrix;

/// Catalog of crop coefficient curves keyed by curve number
///
/// The catalog is built once by [`CurveCatalog::load`] and is read-only
/// afterwards. Iteration order over entries is not specified.
#[derive(Debug, Clone)]
pub struct CurveCatalog {
    /// Curves indexed by curve_no for O(1) lookups
    pub(crate) curves: HashMap<u32, CropCoefficient>,

    /// Path of the curve table this catalog was loaded from
    pub(crate) source_path: PathBuf,
}

impl CurveCatalog {
    /// Create a new empty catalog
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            curves: HashMap::new(),
            source_path,
        }
    }

    /// Get a curve by its curve number (O(1) lookup)
    pub fn get(&self, curve_no: u32) -> Option<&CropCoefficient> {
        self.curves.get(&curve_no)
    }

    /// Check whether a curve number is present
    pub fn contains(&self, curve_no: u32) -> bool {
        self.curves.contains_key(&curve_no)
    }

    /// Number of curves in the catalog
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the catalog holds no curves
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterate over `(curve_no, curve)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &CropCoefficient)> {
        self.curves.iter().map(|(no, curve)| (*no, curve))
    }

    /// Curve numbers sorted ascending, for stable report output
    pub fn sorted_curve_numbers(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self.curves.keys().copied().collect();
        numbers.sort_unstable();
        numbers
    }

    /// Path of the curve table this catalog was loaded from
    pub fn source_path(&self) -> &std::path::Path {
        &self.source_path
    }
}
