//! deadstyle CLI - unused/undefined selector auditor for markup trees.
//!
//! Crawls a source tree, cross-references class/id usage in markup files
//! against declarations in line-based stylesheets, and reports selectors
//! that are used-but-never-declared or declared-but-never-used.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use deadstyle_core::{
    init_structured_logging, load_config, print_json, print_plain, Deadstyle, DEFAULT_MARKUP_EXT,
    DEFAULT_STYLESHEET_EXT,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Unused/undefined style selector auditor")]
pub struct Cli {
    /// Path to the root of the source tree
    #[arg(default_value = ".")]
    path: String,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Markup file extension to audit (default: html)
    #[arg(long, value_name = "EXT")]
    markup_ext: Option<String>,

    /// Stylesheet file extension to audit (default: styl)
    #[arg(long, value_name = "EXT")]
    style_ext: Option<String>,

    /// Directory names to skip during the crawl
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,
}

/// CLI flag beats deadstyle.toml beats the built-in default.
fn effective<'a>(flag: Option<&'a str>, config: Option<&'a str>, default: &'a str) -> &'a str {
    flag.or(config).unwrap_or(default)
}

fn main() -> Result<()> {
    // Global panic guard: report and exit instead of unwinding into the
    // terminal mid-report.
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] deadstyle internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
    }));

    // Structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();
    let root = Path::new(&cli.path);

    // Config file is optional; a broken one is reported, not fatal.
    let config = match load_config(root) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[WARN] config load failed: {}", e);
            None
        }
    }
    .unwrap_or_default();

    let markup_ext = effective(
        cli.markup_ext.as_deref(),
        config.markup_ext.as_deref(),
        DEFAULT_MARKUP_EXT,
    );
    let style_ext = effective(
        cli.style_ext.as_deref(),
        config.stylesheet_ext.as_deref(),
        DEFAULT_STYLESHEET_EXT,
    );

    let mut ignore = cli.ignore.clone();
    if let Some(list) = config.ignore {
        ignore.extend(list);
    }

    let result = Deadstyle::new(root)
        .markup_extension(markup_ext)
        .stylesheet_extension(style_ext)
        .exclude_dirs(ignore)
        .audit()
        .with_context(|| format!("Audit failed for: {}", cli.path))?;

    let json = cli.json
        || config
            .output
            .and_then(|o| o.format)
            .as_deref()
            == Some("json");

    if json {
        print_json(&result);
    } else {
        print_plain(&result);
    }

    // Exit code (CI-friendly): findings present -> 1
    std::process::exit(if result.has_findings() { 1 } else { 0 });
}
