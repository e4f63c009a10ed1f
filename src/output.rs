//! Console summary for the overdue report

use crate::cli::OutputFormat;
use crate::error::Result;
use serde_json::json;
use std::path::Path;

/// Print the aggregation summary after the report file is written
pub fn print_summary(
    output_format: OutputFormat,
    rows: &[(String, u64)],
    report_path: &Path,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&json!({
            "report": report_path.display().to_string(),
            "overdue": rows
                .iter()
                .map(|(kind, count)| json!({ "kind": kind, "count": count }))
                .collect::<Vec<_>>(),
        }))?;
        println!("{}", content);
    } else {
        println!("\nOverdue Delivery Report");
        println!("=======================");

        if rows.is_empty() {
            println!("No overdue orders.");
        } else {
            println!("{:<24} {:>8}", "Furniture type", "Units");
            println!("{}", "-".repeat(33));
            for (kind, count) in rows {
                println!("{:<24} {:>8}", kind, count);
            }
            let total: u64 = rows.iter().map(|(_, count)| *count).sum();
            println!("{}", "-".repeat(33));
            println!("{:<24} {:>8}", "Total", total);
        }

        println!("\nReport written to {}", report_path.display());
    }

    Ok(())
}
