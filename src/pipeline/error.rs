//! Error types for the analytics engine.
//!
//! Two kinds of failures exist: bad input data (empty tables, missing
//! columns, degenerate distributions) and bad configuration (thresholds,
//! granularity names). Both are typed so callers can distinguish them from
//! incidental polars errors by downcasting through `anyhow`.

use thiserror::Error;

/// The input table cannot support the requested analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The transaction table contains no rows.
    #[error("transaction table is empty")]
    EmptyTable,

    /// A column the analysis needs is not present.
    #[error("required column '{0}' is missing from the transaction table")]
    MissingColumn(String),

    /// Segmentation needs at least one user to define spend percentiles.
    #[error("no distinct users in the transaction table; spend percentiles are undefined")]
    NoDistinctUsers,

    /// Cohort analysis needs at least one row with both a user and a date.
    #[error("no transactions with both a user id and a transaction date")]
    NoDatedTransactions,
}

/// A caller-supplied parameter is out of range or unrecognized.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// Z-score thresholds must be strictly positive.
    #[error("outlier threshold must be positive, got {0}")]
    NonPositiveThreshold(f64),

    /// The period granularity name is not one of day/week/month.
    #[error("unsupported period granularity '{0}' (expected day, week or month)")]
    UnsupportedGranularity(String),
}
