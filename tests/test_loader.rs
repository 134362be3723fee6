//! Tests for the transaction table loader

use spendlens::pipeline::{load_transactions, require_columns, save_table, InvalidInputError};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_csv_roundtrip() {
    let mut df = common::transactions_df();
    let (_tmp, path) = common::create_temp_csv(&mut df);

    let loaded = load_transactions(&path, 100).unwrap();
    assert_eq!(loaded.height(), 6);
    assert_eq!(loaded.width(), 6);
}

#[test]
fn test_missing_required_column_fails() {
    let mut df = common::transactions_df();
    let df_missing = df.drop("quantity").unwrap();
    let mut df_missing = df_missing;
    let (_tmp, path) = common::create_temp_csv(&mut df_missing);

    let err = load_transactions(&path, 100).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InvalidInputError>(),
        Some(InvalidInputError::MissingColumn(c)) if c == "quantity"
    ));

    // original frame untouched by the drop
    assert_eq!(df.width(), 6);
}

#[test]
fn test_require_columns_accepts_full_schema() {
    let df = common::transactions_df();
    assert!(require_columns(&df).is_ok());
}

#[test]
fn test_unsupported_extension_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("transactions.xlsx");
    std::fs::write(&path, b"not a table").unwrap();

    let err = load_transactions(&path, 100).unwrap_err();
    assert!(err.to_string().contains("Unsupported file format"));
}

#[test]
fn test_save_table_csv() {
    let mut df = common::transactions_df();
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("out.csv");

    save_table(&mut df, &path).unwrap();
    assert!(path.exists());

    let reloaded = load_transactions(&path, 100).unwrap();
    assert_eq!(reloaded.height(), df.height());
}

#[test]
fn test_save_table_rejects_unknown_extension() {
    let mut df = common::transactions_df();
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("out.xml");

    let err = save_table(&mut df, &path).unwrap_err();
    assert!(err.to_string().contains("Unsupported output format"));
}
