//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Spendlens - retail transaction analytics from a CSV or Parquet file
#[derive(Parser, Debug)]
#[command(name = "spendlens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input transaction file (CSV or Parquet) with columns user_id,
    /// item_id, item_category, item_price, quantity, transaction_date
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path for the cleaned, enriched table (CSV or Parquet,
    /// determined by extension). Defaults to the input path with a
    /// '_cleaned' suffix.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output path for the JSON analytics report.
    /// Defaults to the input path with a '_report.json' suffix.
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Z-score threshold for outlier removal; rows further than this many
    /// standard deviations from the column mean are dropped
    #[arg(long, default_value = "3.0", value_parser = validate_zscore_threshold)]
    pub zscore_threshold: f64,

    /// Number of top categories to rank by total sales
    #[arg(long, default_value = "3")]
    pub top_categories: usize,

    /// Cohort period granularity: day, week or month
    #[arg(short, long, default_value = "month")]
    pub granularity: String,

    /// Number of rows to use for schema inference (CSV only)
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Suppress the banner and result tables; errors still print
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Output path for the cleaned table, derived from the input when not
    /// explicitly provided.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| derive_path(&self.input, "_cleaned", None))
    }

    /// Output path for the JSON report, derived from the input when not
    /// explicitly provided.
    pub fn report_path(&self) -> PathBuf {
        self.report
            .clone()
            .unwrap_or_else(|| derive_path(&self.input, "_report", Some("json")))
    }
}

fn derive_path(input: &PathBuf, suffix: &str, extension: Option<&str>) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = extension.unwrap_or_else(|| {
        input
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv")
    });
    parent.join(format!("{}{}.{}", stem, suffix, extension))
}

/// Validator for the z-score threshold parameter
fn validate_zscore_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !value.is_finite() || value <= 0.0 {
        Err(format!(
            "zscore_threshold must be a positive number, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
