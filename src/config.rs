//! Configuration management and validation.
//!
//! Provides the configuration structure describing where the curve table
//! lives and how its cells are delimited, plus validation rules and
//! human-friendly delimiter names for CLI use.

use crate::constants::DEFAULT_DELIMITER;
use crate::{Error, Result};
use std::path::PathBuf;

/// Configuration for a curve table load
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the delimited curve table file
    pub curve_file: PathBuf,

    /// Cell delimiter (single ASCII character, typically ',' or '\t')
    pub delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            curve_file: PathBuf::from("CropCoefs.txt"),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl Config {
    /// Create a configuration for the given file and delimiter
    pub fn new(curve_file: PathBuf, delimiter: char) -> Result<Self> {
        let config = Self {
            curve_file,
            delimiter,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "Delimiter '{}' is not a single-byte ASCII character",
                self.delimiter
            )));
        }

        if self.delimiter.is_ascii_alphanumeric() {
            return Err(Error::configuration(format!(
                "Delimiter '{}' would collide with cell contents",
                self.delimiter
            )));
        }

        if self.curve_file.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Curve file path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Delimiter as the single byte the CSV tokenizer expects
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

/// Parse a delimiter from its CLI spelling
///
/// Accepts the names "comma" and "tab" (tabs are awkward to pass through a
/// shell) or any literal single character.
pub fn parse_delimiter(value: &str) -> Result<char> {
    match value {
        "comma" => Ok(','),
        "tab" => Ok('\t'),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(Error::configuration(format!(
                    "Invalid delimiter '{}': expected 'comma', 'tab', or a single character",
                    value
                ))),
            }
        }
    }
}
