//! Kc Curves Library
//!
//! A Rust library for loading crop coefficient (Kc) curve tables from
//! delimited text files into an in-memory catalog for evapotranspiration
//! demand modeling.
//!
//! This library provides tools for:
//! - Reading delimited curve tables into a rectangular string matrix
//! - Extracting curve identifiers and names from fixed header rows
//! - Parsing per-crop curve columns with blank-cell coercion
//! - Assembling a catalog keyed by curve number with duplicate detection
//! - Comprehensive error handling with per-cell context

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod curve_table;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CropCoefficient, CurveType};
pub use app::services::curve_table::{CurveCatalog, LoadStats};
pub use config::Config;

/// Result type alias for curve table operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for curve table loading operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed (source file unavailable or unreadable)
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Low-level CSV tokenization error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Curve table layout error (row widths, missing header rows)
    #[error("Curve table format error in file '{file}': {message}")]
    TableFormat { file: String, message: String },

    /// Curve type number outside the known set {1, 2, 3, 4}
    #[error("Invalid curve type '{value}' in column {column}: must be 1, 2, 3 or 4")]
    InvalidCurveType { column: usize, value: String },

    /// A data cell is non-empty but not a number
    #[error("Invalid numeric value '{value}' at step {step} of column {column}")]
    InvalidNumeric {
        column: usize,
        step: usize,
        value: String,
    },

    /// A curve number or curve type field is not an integer identifier
    #[error("Invalid {field} '{value}' in column {column}: expected an integer")]
    InvalidIdentifier {
        column: usize,
        field: &'static str,
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization error
    #[error("Report serialization error: {message}")]
    ReportSerialization { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a table format error
    pub fn table_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TableFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an invalid curve type error
    pub fn invalid_curve_type(column: usize, value: impl Into<String>) -> Self {
        Self::InvalidCurveType {
            column,
            value: value.into(),
        }
    }

    /// Create an invalid numeric value error
    pub fn invalid_numeric(column: usize, step: usize, value: impl Into<String>) -> Self {
        Self::InvalidNumeric {
            column,
            step,
            value: value.into(),
        }
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(
        column: usize,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            column,
            field,
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report serialization error
    pub fn report_serialization(message: impl Into<String>) -> Self {
        Self::ReportSerialization {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
