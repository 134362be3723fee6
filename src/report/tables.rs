//! Terminal tables for the three analysis outputs

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::pipeline::{CategorySummary, CohortRetentionRecord, CustomerSegment};

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Print the top categories ranked by total sales.
pub fn print_category_table(categories: &[CategorySummary]) {
    println!();
    println!(
        "    {}",
        style("Top Categories by Total Sales").white().bold()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Total Sales").add_attribute(Attribute::Bold),
    ]);
    for (rank, category) in categories.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&category.item_category),
            Cell::new(format!("{:.2}", category.total_amount)),
        ]);
    }
    print_indented(&table);
}

/// Print per-segment user counts plus each user's tier.
pub fn print_segment_table(segments: &[CustomerSegment]) {
    println!();
    println!("    {}", style("Customer Segments").white().bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("User").add_attribute(Attribute::Bold),
        Cell::new("Total Spent").add_attribute(Attribute::Bold),
        Cell::new("Segment").add_attribute(Attribute::Bold),
    ]);
    for segment in segments {
        table.add_row(vec![
            Cell::new(&segment.user_id),
            Cell::new(format!("{:.2}", segment.total_amount)),
            Cell::new(segment.segment.to_string()),
        ]);
    }
    print_indented(&table);
}

/// Print cohort retention, one row per observed (cohort, period) pair.
pub fn print_retention_table(records: &[CohortRetentionRecord]) {
    println!();
    println!("    {}", style("Cohort Retention").white().bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Cohort").add_attribute(Attribute::Bold),
        Cell::new("Period").add_attribute(Attribute::Bold),
        Cell::new("Size").add_attribute(Attribute::Bold),
        Cell::new("Retained").add_attribute(Attribute::Bold),
        Cell::new("Rate").add_attribute(Attribute::Bold),
    ]);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.cohort),
            Cell::new(record.period),
            Cell::new(record.cohort_size),
            Cell::new(record.retained_users),
            Cell::new(format!("{:.2}%", record.retention_rate)),
        ]);
    }
    print_indented(&table);
}
