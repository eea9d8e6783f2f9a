use crate::growth::Growth;
use crate::model::{GrowthOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;
use std::path::Path;

const TABLE_ROWS: usize = 50;

pub fn output_json(growth: &Growth, repo_path: &Path) -> Result<()> {
    let output = GrowthOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo_path.to_string_lossy().to_string(),
        commits: growth.history.clone(),
        series: growth.series.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(growth: &Growth) -> Result<()> {
    for point in growth.series.points(&growth.history) {
        println!("{}", serde_json::to_string(&point)?);
    }
    Ok(())
}

/// Prints the most recent commits with their running totals.
pub fn output_table(growth: &Growth, date_format: &str) -> Result<()> {
    let points = growth.series.points(&growth.history);

    println!(
        "{:<10} {:<10} {:>8} {:>8} {:>10} {:>10} {:>10}",
        style("Commit").bold(),
        style("Date").bold(),
        style("+").bold(),
        style("-").bold(),
        style("Added").bold(),
        style("Removed").bold(),
        style("Total").bold()
    );
    println!("{}", "─".repeat(74));

    let skipped = points.len().saturating_sub(TABLE_ROWS);
    for p in &points[skipped..] {
        println!(
            "{:<10} {:<10} {:>8} {:>8} {:>10} {:>10} {:>10}",
            p.id.get(..8).unwrap_or(&p.id),
            p.timestamp.format(date_format).to_string(),
            style(p.added).green(),
            style(p.removed).red(),
            p.cumulative_added,
            p.cumulative_removed,
            style(p.total).blue()
        );
    }
    if skipped > 0 {
        println!("\n... {skipped} earlier commits not shown");
    }

    if let Some((date, added, removed, total)) = growth.series.last() {
        println!(
            "\n{} {} commits, {} added, {} removed, {} lines as of {}",
            style("Summary:").bold(),
            points.len(),
            added,
            removed,
            total,
            date.format(date_format)
        );
    }
    Ok(())
}
