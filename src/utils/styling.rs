//! Terminal styling helpers for the pipeline output

use console::style;
use std::path::Path;
use std::time::Duration;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("spendlens").cyan().bold(),
        style("retail transaction analytics").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print the configuration card
pub fn print_config(
    input: &Path,
    output: &Path,
    report: &Path,
    zscore_threshold: f64,
    top_categories: usize,
    granularity: &str,
) {
    println!();
    println!("    {}", style("Configuration").white().bold());
    println!("    {}", style("─".repeat(50)).dim());
    println!("      Input:             {}", input.display());
    println!("      Cleaned output:    {}", output.display());
    println!("      Report:            {}", report.display());
    println!(
        "      Z-score threshold: {}",
        style(format!("{:.1}", zscore_threshold)).yellow()
    );
    println!(
        "      Top categories:    {}",
        style(top_categories).yellow()
    );
    println!("      Granularity:       {}", style(granularity).yellow());
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(
        "    {} {}",
        style("✓").green().bold(),
        style(message).green()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("·").dim(), message);
}

/// Print a highlighted count with a trailing label
pub fn print_count(label: &str, count: usize) {
    println!(
        "      {} {}",
        style(count).yellow().bold(),
        label
    );
}

/// Print the elapsed time of a pipeline step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("({:.2}s)", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        style("✓").green().bold(),
        style("Analysis complete").green().bold()
    );
    println!();
}
