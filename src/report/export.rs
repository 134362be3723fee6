//! JSON report export

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{
    CategorySummary, CohortRetentionRecord, CustomerSegment, DailySales, Granularity,
};

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    /// Spendlens version
    pub spendlens_version: String,
    /// Input file path
    pub input_file: String,
    /// Z-score threshold used for outlier removal
    pub zscore_threshold: f64,
    /// Number of top categories requested
    pub top_categories: usize,
    /// Cohort period granularity
    pub granularity: Granularity,
}

/// Complete analytics report written to disk
#[derive(Serialize)]
pub struct AnalyticsReport {
    pub metadata: ReportMetadata,
    pub top_categories: Vec<CategorySummary>,
    pub customer_segments: Vec<CustomerSegment>,
    pub cohort_retention: Vec<CohortRetentionRecord>,
    pub daily_sales: Vec<DailySales>,
}

/// Parameters describing the run, recorded in the report metadata
pub struct ReportParams<'a> {
    pub input_file: &'a str,
    pub zscore_threshold: f64,
    pub top_categories: usize,
    pub granularity: Granularity,
}

/// Write the full analytics report as pretty-printed JSON.
///
/// The report is only assembled once every analysis has succeeded, so a
/// failed run never leaves a partial report behind.
pub fn export_report(
    categories: &[CategorySummary],
    segments: &[CustomerSegment],
    retention: &[CohortRetentionRecord],
    sales: &[DailySales],
    output_path: &Path,
    params: &ReportParams,
) -> Result<()> {
    let report = AnalyticsReport {
        metadata: ReportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            spendlens_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            zscore_threshold: params.zscore_threshold,
            top_categories: params.top_categories,
            granularity: params.granularity,
        },
        top_categories: categories.to_vec(),
        customer_segments: segments.to_vec(),
        cohort_retention: retention.to_vec(),
        daily_sales: sales.to_vec(),
    };

    let json = serde_json::to_string_pretty(&report)
        .context("Failed to serialize analytics report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    Ok(())
}
