//! Command implementations for the Kc curve loader CLI
//!
//! This module dispatches the parsed arguments to the catalog loader and
//! renders human-facing reports.

use crate::app::models::CropCoefficient;
use crate::app::services::curve_table::{CurveCatalog, LoadStats};
use crate::cli::args::{Args, Commands, InspectArgs, OutputFormat, ValidateArgs};
use crate::config::{Config, parse_delimiter};
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

/// Serializable inspect report for `--format json`
#[derive(Debug, Serialize)]
struct CatalogReport<'a> {
    source: String,
    curve_count: usize,
    curves: Vec<&'a CropCoefficient>,
}

/// Run the selected subcommand
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Inspect(inspect_args)) => run_inspect(inspect_args),
        Some(Commands::Validate(validate_args)) => run_validate(validate_args),
        // main.rs shows help and exits before dispatching a bare invocation
        None => Ok(()),
    }
}

/// Load a catalog and print a summary report
fn run_inspect(args: InspectArgs) -> Result<()> {
    let config = load_config(&args.file, &args.delimiter)?;
    let (catalog, stats) = CurveCatalog::load_with_config(&config)?;

    if let Some(curve_no) = args.curve_no {
        if !catalog.contains(curve_no) {
            return Err(Error::configuration(format!(
                "Curve {} not found in catalog",
                curve_no
            )));
        }
    }

    match args.format {
        OutputFormat::Json => print_json(&catalog, args.curve_no),
        OutputFormat::Table => {
            print_summary(&catalog, &stats);
            if let Some(curve) = args.curve_no.and_then(|no| catalog.get(no)) {
                print_curve_detail(curve);
            }
            Ok(())
        }
    }
}

/// Emit the catalog (or one curve of it) as pretty-printed JSON
fn print_json(catalog: &CurveCatalog, curve_no: Option<u32>) -> Result<()> {
    let numbers = match curve_no {
        Some(no) => vec![no],
        None => catalog.sorted_curve_numbers(),
    };
    let curves: Vec<&CropCoefficient> =
        numbers.iter().filter_map(|no| catalog.get(*no)).collect();

    let report = CatalogReport {
        source: catalog.source_path().display().to_string(),
        curve_count: curves.len(),
        curves,
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::report_serialization(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Print the full 35-value curve for one catalog entry
fn print_curve_detail(curve: &CropCoefficient) {
    println!();
    println!(
        "{} {} - {}",
        "Curve".bold(),
        curve.curve_no.to_string().bold(),
        curve.name
    );
    println!("  Type:             {}", curve.curve_type_label());
    println!("  Last entry index: {}", curve.last_entry_index);
    println!("  Values:");
    for (step, value) in curve.data.iter().enumerate() {
        println!("    [{:2}] {:.4}", step, value);
    }
}

/// Load a catalog and report pass/fail
fn run_validate(args: ValidateArgs) -> Result<()> {
    let config = load_config(&args.file, &args.delimiter)?;

    match CurveCatalog::load_with_config(&config) {
        Ok((catalog, stats)) => {
            println!(
                "{} {} ({} curves, {} columns)",
                "VALID".green().bold(),
                catalog.source_path().display(),
                catalog.len(),
                stats.columns_scanned
            );
            if stats.duplicates_overwritten > 0 {
                println!(
                    "{} {} duplicate curve number(s) overwritten",
                    "warning:".yellow().bold(),
                    stats.duplicates_overwritten
                );
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "INVALID".red().bold(), args.file.display());
            Err(e)
        }
    }
}

/// Build a validated config from CLI arguments
fn load_config(file: &std::path::Path, delimiter: &str) -> Result<Config> {
    let delimiter = parse_delimiter(delimiter)?;
    let config = Config::new(file.to_path_buf(), delimiter)?;
    info!(
        "Using curve file {} with delimiter {:?}",
        config.curve_file.display(),
        config.delimiter
    );
    Ok(config)
}

/// Print the catalog summary table
fn print_summary(catalog: &CurveCatalog, stats: &LoadStats) {
    println!(
        "{} {}",
        "Curve catalog:".bold(),
        catalog.source_path().display()
    );
    println!(
        "  {} curves loaded from {} columns ({} placeholders skipped, {} duplicates) in {:.2?}",
        catalog.len(),
        stats.columns_scanned,
        stats.placeholders_skipped,
        stats.duplicates_overwritten,
        stats.load_duration
    );
    println!();
    println!(
        "  {:>5}  {:<22} {:<6} {}",
        "No".bold(),
        "Type".bold(),
        "Last".bold(),
        "Name".bold()
    );

    for curve_no in catalog.sorted_curve_numbers() {
        if let Some(curve) = catalog.get(curve_no) {
            println!(
                "  {:>5}  {:<22} {:<6} {}",
                curve.curve_no,
                curve.curve_type_label(),
                curve.last_entry_index,
                curve.name
            );
        }
    }
}
