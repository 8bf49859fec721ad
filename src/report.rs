//! Rendering of batch reports: an aligned terminal table or JSON.

use anyhow::{Context, Result};

use crate::models::{BatchReport, Suggestion, UNKNOWN_CATEGORY};

/// Print a human-readable summary of a batch report.
///
/// Suggestions at or above `auto_apply_threshold` are marked with `*`;
/// the mark is advisory, nothing is applied anywhere.
pub fn print_report(report: &BatchReport, auto_apply_threshold: u8) {
    println!("baudoc — Batch Classification Report");
    println!("====================================");
    println!();
    println!("  Files:         {}", report.suggestions.len());
    println!("  Categorized:   {}", report.categorized);
    println!("  Uncategorized: {}", report.uncategorized);

    if !report.categories.is_empty() {
        println!();
        println!("  By category:");
        for entry in &report.categories {
            println!("    {:<28} {:>5}", entry.name, entry.count);
        }
    }

    if !report.suggestions.is_empty() {
        println!();
        println!(
            "  {:<36} {:<26} {:<24} {:>10}",
            "FILE", "CATEGORY", "SUBCATEGORY", "CONFIDENCE"
        );
        println!("  {}", "-".repeat(100));
        for suggestion in &report.suggestions {
            println!(
                "  {:<36} {:<26} {:<24} {:>9}{}",
                suggestion.file_name,
                suggestion.category,
                suggestion.subcategory.as_deref().unwrap_or("-"),
                suggestion.confidence,
                auto_apply_mark(suggestion, auto_apply_threshold),
            );
        }
        println!();
        println!(
            "  * confidence >= {} — safe to apply without review",
            auto_apply_threshold
        );
    }

    println!();
}

fn auto_apply_mark(suggestion: &Suggestion, threshold: u8) -> &'static str {
    if suggestion.category != UNKNOWN_CATEGORY && suggestion.confidence >= threshold {
        " *"
    } else {
        ""
    }
}

/// Serialize a batch report as pretty-printed JSON.
pub fn to_json(report: &BatchReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}
