//! End-to-end tests for `devfolio export`.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the devfolio binary
fn devfolio_bin() -> String {
    std::env::var("CARGO_BIN_EXE_devfolio").unwrap_or_else(|_| "target/release/devfolio".to_string())
}

fn run_in(args: &[&str], dir: &Path) -> Output {
    Command::new(devfolio_bin())
        .env("DEVFOLIO_CONFIG_DIR", dir)
        .env_remove("RUST_LOG")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_export_to_explicit_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("site").join("index.html");
    let output_arg = output_path.to_string_lossy().to_string();

    let output = run_in(&["export", "--output", &output_arg], temp_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let html = fs::read_to_string(&output_path).expect("export file should exist");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"), "standalone page inlines its stylesheet");
    assert!(!html.contains("/assets/page.js"), "standalone page has no script");
    assert!(html.contains("Storefront Core"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Exported 4 of 4 projects"));
}

#[test]
fn test_export_applies_filters() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("backend.html");
    let output_arg = output_path.to_string_lossy().to_string();

    let output = run_in(
        &["export", "-o", &output_arg, "--category", "Backend"],
        temp_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("QueueForge API"));
    assert!(!html.contains("DraftPilot"));
}

#[test]
fn test_export_default_file_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_in(&["export"], temp_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let exported: Vec<String> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("portfolio_export_") && name.ends_with(".html"))
        .collect();
    assert_eq!(exported.len(), 1, "found: {exported:?}");
}

#[test]
fn test_export_rejects_unknown_sort() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("never.html");
    let output_arg = output_path.to_string_lossy().to_string();

    let output = run_in(
        &["export", "-o", &output_arg, "--sort", "newest"],
        temp_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(!output_path.exists());
}
