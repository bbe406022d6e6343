//! Configuration loading from deadstyle.toml and extension validation.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{DeadstyleError, DeadstyleResult};

/// Markup extension audited when nothing else is configured.
pub const DEFAULT_MARKUP_EXT: &str = "html";
/// Stylesheet extension audited when nothing else is configured.
pub const DEFAULT_STYLESHEET_EXT: &str = "styl";

/// Main configuration structure for deadstyle.toml.
#[derive(Debug, Deserialize, Default)]
pub struct DeadstyleConfig {
    /// Markup file extension to audit.
    pub markup_ext: Option<String>,
    /// Stylesheet file extension to audit.
    pub stylesheet_ext: Option<String>,
    /// Extra directory names to skip during the crawl.
    pub ignore: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from deadstyle.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<DeadstyleConfig>> {
    let path = root.join("deadstyle.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid deadstyle.toml")?;
    Ok(Some(cfg))
}

/// Validate and normalize a file-extension mapping.
///
/// Accepts both `html` and `.html` spellings; anything empty or containing
/// whitespace, a path separator, or an interior dot is rejected here,
/// before any crawling begins.
pub fn normalize_extension(ext: &str) -> DeadstyleResult<String> {
    let trimmed = ext.trim().trim_start_matches('.');

    if trimmed.is_empty() {
        return Err(DeadstyleError::config(format!(
            "'{ext}' is not a usable file extension"
        )));
    }

    if trimmed
        .chars()
        .any(|c| c.is_whitespace() || c == '/' || c == '\\' || c == '.')
    {
        return Err(DeadstyleError::config(format!(
            "'{ext}' is not a usable file extension"
        )));
    }

    Ok(trimmed.to_string())
}
