//! Integration tests for end-to-end curve catalog loading
//!
//! These tests write complete curve table fixture files to disk and verify
//! the full load pipeline: tokenization, header extraction, column parsing
//! and catalog assembly.

use kc_curves::{Config, CropCoefficient, CurveCatalog, CurveType};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Number of growth-stage samples per curve
const CURVE_LEN: usize = 35;

/// Build a small but realistic comma-delimited curve table
///
/// Three crop columns with distinct curve types, one placeholder column,
/// and a trailing units row, matching the fixed layout: header rows 2-4,
/// data from row 6.
fn realistic_table() -> String {
    let mut lines: Vec<String> = vec![
        "Crop coefficient curves for ET demand,units,,,,".to_string(),
        "Curves 1-60 available,,,,,".to_string(),
        "Curve number,,1.0,2.0,,15.0".to_string(),
        "Curve type,,1.0,2.0,,4.0".to_string(),
        "Crop name,,ALFALFA,BEANS,,PASTURE".to_string(),
        "Percent time or GDD,step,,,,".to_string(),
    ];

    for step in 0..CURVE_LEN {
        // ALFALFA: 20 nonzero values; BEANS: 10; PASTURE: all 35
        let alfalfa = if step < 20 { format!("{:.2}", 0.25 + 0.03 * step as f64) } else { String::new() };
        let beans = if step < 10 { format!("{:.2}", 0.15 + 0.08 * step as f64) } else { "0.0".to_string() };
        let pasture = format!("{:.2}", 0.60 + 0.01 * step as f64);

        lines.push(format!("{},,{},{},,{}", step + 1, alfalfa, beans, pasture));
    }

    lines.join("\n") + "\n"
}

fn write_table(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("CropCoefs.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_realistic_curve_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(&temp_dir, &realistic_table());

    let (catalog, stats) = CurveCatalog::load(&path, ',').unwrap();

    // Four curve columns in the file; the blank one is a placeholder
    assert_eq!(stats.columns_scanned, 4);
    assert_eq!(stats.placeholders_skipped, 1);
    assert_eq!(stats.duplicates_overwritten, 0);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.sorted_curve_numbers(), vec![1, 2, 15]);

    let alfalfa = catalog.get(1).unwrap();
    assert_eq!(alfalfa.name, "ALFALFA");
    assert_eq!(alfalfa.curve_type, CurveType::NcGdd);
    assert_eq!(alfalfa.curve_type_label(), "1=NCGDD");
    assert_eq!(alfalfa.data.len(), CURVE_LEN);
    assert_eq!(alfalfa.last_entry_index, 19);
    // Blank tail cells read as zero
    assert!(alfalfa.data[20..].iter().all(|v| *v == 0.0));

    let beans = catalog.get(2).unwrap();
    assert_eq!(beans.curve_type_label(), "2=%PL-EC");
    assert_eq!(beans.last_entry_index, 9);

    let pasture = catalog.get(15).unwrap();
    assert_eq!(pasture.curve_type_label(), "4=%PL-Term");
    assert_eq!(pasture.last_entry_index, (CURVE_LEN - 1) as i32);
    assert!(pasture.is_populated());
}

#[test]
fn test_load_via_config_round_trips_delimiter() {
    let temp_dir = TempDir::new().unwrap();
    let content = realistic_table().replace(',', "\t");
    let path = temp_dir.path().join("CropCoefs.txt");
    fs::write(&path, content).unwrap();

    let config = Config::new(path, '\t').unwrap();
    let (catalog, _) = CurveCatalog::load_with_config(&config).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(15).unwrap().name, "PASTURE");
}

#[test]
fn test_catalog_is_pure_function_of_input() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(&temp_dir, &realistic_table());

    let (first, _) = CurveCatalog::load(&path, ',').unwrap();
    let (second, _) = CurveCatalog::load(&path, ',').unwrap();

    assert_eq!(first.len(), second.len());
    for (curve_no, curve) in first.iter() {
        let other: &CropCoefficient = second.get(curve_no).unwrap();
        assert_eq!(curve, other);
    }
}

#[test]
fn test_curves_serialize_to_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(&temp_dir, &realistic_table());

    let (catalog, _) = CurveCatalog::load(&path, ',').unwrap();

    let curves: Vec<&CropCoefficient> = catalog
        .sorted_curve_numbers()
        .iter()
        .filter_map(|no| catalog.get(*no))
        .collect();
    let json = serde_json::to_string(&curves).unwrap();

    assert!(json.contains("\"ALFALFA\""));
    assert!(json.contains("\"last_entry_index\":19"));
    assert!(json.contains("\"curve_no\":15"));
}

#[test]
fn test_malformed_table_fails_loudly() {
    let temp_dir = TempDir::new().unwrap();

    // Second row wider than the first
    let content = "a,b,c\n1,2,3,4\n";
    let path = temp_dir.path().join("bad.txt");
    fs::write(&path, content).unwrap();

    let result = CurveCatalog::load(&path, ',');
    assert!(result.is_err());
}

#[test]
fn test_error_on_non_numeric_cell_names_location() {
    let temp_dir = TempDir::new().unwrap();

    let mut table = realistic_table();
    // Corrupt one ALFALFA value (data row 3, matrix column 2)
    table = table.replace("9,,0.49,", "9,,oops,");
    let path = write_table(&temp_dir, &table);

    let err = CurveCatalog::load(&path, ',').unwrap_err();
    let message = err.to_string();
    assert!(message.contains("oops"), "unexpected error: {message}");
}
