//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_requires_input_argument() {
    let mut cmd = Command::cargo_bin("spendlens").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn test_full_run_writes_outputs() {
    let mut df = common::transactions_df();
    let (tmp, csv_path) = common::create_temp_csv(&mut df);

    let mut cmd = Command::cargo_bin("spendlens").unwrap();
    cmd.arg("-i")
        .arg(&csv_path)
        .arg("--quiet")
        .assert()
        .success();

    assert!(tmp.path().join("transactions_cleaned.csv").exists());
    assert!(tmp.path().join("transactions_report.json").exists());

    let report: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(tmp.path().join("transactions_report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report["metadata"]["granularity"], "month");
    assert_eq!(report["top_categories"].as_array().unwrap().len(), 3);
    assert_eq!(report["customer_segments"].as_array().unwrap().len(), 3);
    assert!(!report["cohort_retention"].as_array().unwrap().is_empty());
    assert!(!report["daily_sales"].as_array().unwrap().is_empty());
}

#[test]
fn test_explicit_output_paths() {
    let mut df = common::transactions_df();
    let (tmp, csv_path) = common::create_temp_csv(&mut df);
    let out = tmp.path().join("clean.csv");
    let report = tmp.path().join("analysis.json");

    let mut cmd = Command::cargo_bin("spendlens").unwrap();
    cmd.arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(&out)
        .arg("-r")
        .arg(&report)
        .arg("--quiet")
        .assert()
        .success();

    assert!(out.exists());
    assert!(report.exists());
}

#[test]
fn test_rejects_non_positive_threshold() {
    let mut df = common::transactions_df();
    let (_tmp, csv_path) = common::create_temp_csv(&mut df);

    let mut cmd = Command::cargo_bin("spendlens").unwrap();
    cmd.arg("-i")
        .arg(&csv_path)
        .arg("--zscore-threshold=-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn test_rejects_unknown_granularity() {
    let mut df = common::transactions_df();
    let (tmp, csv_path) = common::create_temp_csv(&mut df);

    let mut cmd = Command::cargo_bin("spendlens").unwrap();
    cmd.arg("-i")
        .arg(&csv_path)
        .arg("-g")
        .arg("quarter")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported period granularity"));

    // a failed run leaves no partial artifacts behind
    assert!(!tmp.path().join("transactions_cleaned.csv").exists());
    assert!(!tmp.path().join("transactions_report.json").exists());
}

#[test]
fn test_missing_file_fails() {
    let mut cmd = Command::cargo_bin("spendlens").unwrap();
    cmd.arg("-i")
        .arg("no/such/file.csv")
        .arg("--quiet")
        .assert()
        .failure();
}
