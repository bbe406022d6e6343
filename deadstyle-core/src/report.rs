//! Report presenters - colored plain text and JSON.
//!
//! Both presenters only read the audit's plain data structures; nothing
//! here feeds back into the core.

use colored::Colorize;
use serde_json::json;

use crate::builder::AuditResult;

/// Prints the audit results as colored, sectioned plain text.
pub fn print_plain(result: &AuditResult) {
    let stats = &result.diff.stats;

    println!();
    println!(
        "###############  {}  ###############",
        "SELECTOR AUDIT".yellow()
    );
    println!();
    println!("{} unused selectors", stats.unused_count);
    println!("{} undefined selectors", stats.undefined_count);
    println!(
        "({} used, {} declared)",
        stats.used_selectors, stats.declared_selectors
    );

    println!();
    println!("{}", "UNUSED SELECTORS:".yellow());
    if result.diff.unused.is_empty() {
        println!("  (none)");
    }
    for unused in &result.diff.unused {
        println!();
        println!("{}", unused.selector.blue());
        println!("\t{} {}", "Filepath:".bold(), unused.file);
    }

    println!();
    println!("{}", "UNDEFINED SELECTORS:".yellow());
    if result.diff.undefined.is_empty() {
        println!("  (none)");
    }
    for undefined in &result.diff.undefined {
        println!();
        println!("{}", undefined.selector.blue());
        for site in &undefined.sites {
            println!("\t{} {}", "Filepath:".bold(), site.file);
            println!("\t{} {}", "Element:".bold(), site.element);
            println!("\t{} {}", "Line Number:".bold(), site.line_no);
            println!();
        }
    }

    let skipped: Vec<_> = result.failed_files().collect();
    if !skipped.is_empty() {
        println!();
        println!("{}", "SKIPPED FILES:".red());
        for report in skipped {
            println!(
                "  [{}] {}: {}",
                report.kind,
                report.path,
                report.error.as_deref().unwrap_or("unknown")
            );
        }
    }
}

/// Prints the audit results in JSON format.
///
/// Falls back to a minimal summary if serialization fails (should never
/// happen with these types, but the report path must not panic).
pub fn print_json(result: &AuditResult) {
    let payload = json!({
        "root": result.root.display().to_string(),
        "stats": &result.diff.stats,
        "unused": &result.diff.unused,
        "undefined": &result.diff.undefined,
        "skipped": result.failed_files().collect::<Vec<_>>(),
    });

    match serde_json::to_string_pretty(&payload) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!(
                "{{\"unused\": {}, \"undefined\": {}}}",
                result.diff.stats.unused_count, result.diff.stats.undefined_count
            );
        }
    }
}
