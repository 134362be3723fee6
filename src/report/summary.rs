//! Pipeline run summary

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Counters and timings accumulated across the pipeline run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_dropped_missing: usize,
    pub price_outliers: usize,
    pub quantity_outliers: usize,
    pub rows_final: usize,
    pub distinct_users: usize,
    pub distinct_categories: usize,
    pub cohort_count: usize,
    pub load_time: Duration,
    pub clean_time: Duration,
    pub analyze_time: Duration,
    pub save_time: Duration,
}

impl RunSummary {
    pub fn new(rows_loaded: usize) -> Self {
        Self {
            rows_loaded,
            rows_final: rows_loaded,
            ..Default::default()
        }
    }

    pub fn display(&self) {
        println!();
        println!("    {}", style("RUN SUMMARY").white().bold());
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Rows loaded"),
            Cell::new(self.rows_loaded),
        ]);
        table.add_row(vec![
            Cell::new("Dropped (missing values)"),
            Cell::new(self.rows_dropped_missing).fg(if self.rows_dropped_missing == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![
            Cell::new("Dropped (price outliers)"),
            Cell::new(self.price_outliers).fg(if self.price_outliers == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);
        table.add_row(vec![
            Cell::new("Dropped (quantity outliers)"),
            Cell::new(self.quantity_outliers).fg(if self.quantity_outliers == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);
        table.add_row(vec![
            Cell::new("Rows analyzed"),
            Cell::new(self.rows_final)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("Distinct users"),
            Cell::new(self.distinct_users),
        ]);
        table.add_row(vec![
            Cell::new("Distinct categories"),
            Cell::new(self.distinct_categories),
        ]);
        table.add_row(vec![Cell::new("Cohorts"), Cell::new(self.cohort_count)]);

        let total = self.load_time + self.clean_time + self.analyze_time + self.save_time;
        table.add_row(vec![
            Cell::new("Total time"),
            Cell::new(format!("{:.2}s", total.as_secs_f64())),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
