//! Spendlens: Retail Transaction Analytics CLI
//!
//! Loads a transaction file, cleans it (missing values, date parsing,
//! z-score outliers), derives total_amount, then fans out three independent
//! analyses: category rankings, customer segmentation and cohort retention.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use pipeline::{
    analyze_cohort_retention, daily_sales, distinct_categories, drop_missing, filter_outliers,
    load_transactions, parse_transaction_dates, rank_categories, save_table, segment_customers,
    with_total_amount, Granularity,
};
use report::{
    export_report, print_category_table, print_retention_table, print_segment_table,
    ReportParams, RunSummary,
};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let granularity: Granularity = cli.granularity.parse()?;
    let output_path = cli.output_path();
    let report_path = cli.report_path();

    if !cli.quiet {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(
            &cli.input,
            &output_path,
            &report_path,
            cli.zscore_threshold,
            cli.top_categories,
            &cli.granularity,
        );
    }

    // Step 1: Load the transaction table
    if !cli.quiet {
        print_step_header(1, "Load Transactions");
    }
    let step_start = Instant::now();
    let df = load_transactions(&cli.input, cli.infer_schema_length)?;
    let mut summary = RunSummary::new(df.height());
    if !cli.quiet {
        print_success(&format!(
            "Loaded {} rows, {} columns",
            df.height(),
            df.width()
        ));
    }
    summary.load_time = step_start.elapsed();
    if !cli.quiet {
        print_step_time(summary.load_time);
    }

    // Step 2: Cleansing - drop nulls, parse dates, remove outliers
    if !cli.quiet {
        print_step_header(2, "Cleansing");
    }
    let step_start = Instant::now();

    let df = parse_transaction_dates(&df)?;
    let deduped = drop_missing(&df)?;
    summary.rows_dropped_missing = df.height() - deduped.height();
    if !cli.quiet && summary.rows_dropped_missing > 0 {
        print_count("row(s) dropped for missing values", summary.rows_dropped_missing);
    }

    // price outliers first, then quantity over the surviving rows
    let after_price = filter_outliers(&deduped, "item_price", cli.zscore_threshold)?;
    summary.price_outliers = deduped.height() - after_price.height();
    let after_quantity = filter_outliers(&after_price, "quantity", cli.zscore_threshold)?;
    summary.quantity_outliers = after_price.height() - after_quantity.height();
    summary.rows_final = after_quantity.height();
    if !cli.quiet {
        print_count("price outlier(s) removed", summary.price_outliers);
        print_count("quantity outlier(s) removed", summary.quantity_outliers);
    }

    let df = with_total_amount(&after_quantity)?;
    if !cli.quiet {
        print_success("Cleaned table enriched with total_amount");
    }
    summary.clean_time = step_start.elapsed();
    if !cli.quiet {
        print_step_time(summary.clean_time);
    }

    // Step 3: Analytics fan-out over the read-only enriched table
    if !cli.quiet {
        print_step_header(3, "Analytics");
    }
    let step_start = Instant::now();
    let spinner = (!cli.quiet).then(|| create_spinner("Running analyses..."));

    let (categories, (segments, retention)) = rayon::join(
        || rank_categories(&df, cli.top_categories),
        || {
            rayon::join(
                || segment_customers(&df),
                || analyze_cohort_retention(&df, granularity),
            )
        },
    );
    let categories = categories?;
    let segments = segments?;
    let retention = retention?;
    let sales = daily_sales(&df)?;

    if let Some(spinner) = &spinner {
        finish_with_success(spinner, "Analyses complete");
    }
    summary.distinct_users = segments.len();
    summary.distinct_categories = distinct_categories(&df)?;
    summary.cohort_count = retention.iter().filter(|r| r.period == 0).count();
    summary.analyze_time = step_start.elapsed();
    if !cli.quiet {
        print_step_time(summary.analyze_time);
    }

    if !cli.quiet {
        print_category_table(&categories);
        print_segment_table(&segments);
        print_retention_table(&retention);
    }

    // Step 4: Save the report and the cleaned table
    if !cli.quiet {
        print_step_header(4, "Save Results");
    }
    let step_start = Instant::now();
    let input_display = cli.input.display().to_string();
    export_report(
        &categories,
        &segments,
        &retention,
        &sales,
        &report_path,
        &ReportParams {
            input_file: &input_display,
            zscore_threshold: cli.zscore_threshold,
            top_categories: cli.top_categories,
            granularity,
        },
    )?;
    if !cli.quiet {
        print_success(&format!("Report written to {}", report_path.display()));
    }

    let mut df = df;
    save_table(&mut df, &output_path)?;
    if !cli.quiet {
        print_success(&format!(
            "Cleaned table written to {}",
            output_path.display()
        ));
        print_info(&format!("{} rows kept for downstream storage", df.height()));
    }
    summary.save_time = step_start.elapsed();
    if !cli.quiet {
        print_step_time(summary.save_time);
        summary.display();
        print_completion();
    }

    Ok(())
}
