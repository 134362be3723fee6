//! Shared test fixtures for the analytics pipeline

#![allow(dead_code)]

use polars::prelude::*;
use spendlens::pipeline::{parse_transaction_dates, with_total_amount};
use std::path::PathBuf;
use tempfile::TempDir;

/// Worked monthly-cohort example:
/// A buys in January and February, B only in January.
pub fn cohort_example_df() -> DataFrame {
    df! {
        "user_id" => ["A", "A", "B"],
        "item_id" => ["i1", "i2", "i3"],
        "item_category" => ["books", "games", "books"],
        "item_price" => [100.0f64, 50.0, 30.0],
        "quantity" => [1i64, 1, 1],
        "transaction_date" => ["2021-01-05", "2021-02-10", "2021-01-20"],
    }
    .unwrap()
}

/// A richer table: three users across three categories and two months.
pub fn transactions_df() -> DataFrame {
    df! {
        "user_id" => ["u1", "u1", "u2", "u2", "u3", "u3"],
        "item_id" => ["a", "b", "c", "d", "e", "f"],
        "item_category" => ["books", "games", "books", "garden", "games", "games"],
        "item_price" => [10.0f64, 25.0, 40.0, 5.0, 60.0, 15.0],
        "quantity" => [2i64, 1, 1, 4, 2, 1],
        "transaction_date" => [
            "2021-01-05", "2021-01-12", "2021-01-20",
            "2021-02-02", "2021-01-08", "2021-02-15",
        ],
    }
    .unwrap()
}

/// Parse dates and attach total_amount, as the pipeline does before the
/// three analyses run.
pub fn enrich(df: &DataFrame) -> DataFrame {
    let parsed = parse_transaction_dates(df).unwrap();
    with_total_amount(&parsed).unwrap()
}

/// A table where every user spends exactly the same total.
pub fn uniform_spend_df() -> DataFrame {
    df! {
        "user_id" => ["u1", "u2", "u3", "u4"],
        "item_id" => ["a", "b", "c", "d"],
        "item_category" => ["books", "books", "games", "games"],
        "item_price" => [50.0f64, 50.0, 50.0, 50.0],
        "quantity" => [2i64, 2, 2, 2],
        "transaction_date" => ["2021-01-01", "2021-01-02", "2021-01-03", "2021-01-04"],
    }
    .unwrap()
}

/// An empty table with the full transaction schema.
pub fn empty_transactions_df() -> DataFrame {
    df! {
        "user_id" => Vec::<String>::new(),
        "item_id" => Vec::<String>::new(),
        "item_category" => Vec::<String>::new(),
        "item_price" => Vec::<f64>::new(),
        "quantity" => Vec::<i64>::new(),
        "transaction_date" => Vec::<String>::new(),
    }
    .unwrap()
}

/// Write a DataFrame to a temporary CSV file.
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("transactions.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Sum of a float column across the whole table.
pub fn column_sum(df: &DataFrame, column: &str) -> f64 {
    df.column(column)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .sum()
}
