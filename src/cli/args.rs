//! Command-line argument definitions for the Kc curve loader
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Kc curve catalog tool
///
/// Loads crop coefficient curve tables used by ET demand models and
/// reports on their contents.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kc-curves",
    version,
    about = "Load and inspect crop coefficient curve tables for ET demand modeling"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug-level) logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load a curve table and print a catalog summary
    Inspect(InspectArgs),
    /// Load a curve table and report pass/fail
    Validate(ValidateArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Path to the delimited curve table file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cell delimiter: 'comma', 'tab', or a literal single character
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIM",
        default_value = "comma"
    )]
    pub delimiter: String,

    /// Print the full 35-value curve for this curve number
    #[arg(short = 'c', long = "curve", value_name = "CURVE_NO")]
    pub curve_no: Option<u32>,

    /// Report output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "table"
    )]
    pub format: OutputFormat,
}

/// Output formats for the inspect report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary table
    Table,
    /// Serialized catalog for downstream tooling
    Json,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Path to the delimited curve table file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cell delimiter: 'comma', 'tab', or a literal single character
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIM",
        default_value = "comma"
    )]
    pub delimiter: String,
}
