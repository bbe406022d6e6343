//! Builder pattern API for running a selector audit.
//!
//! Provides a fluent interface for configuring and running an audit:
//!
//! ```rust,ignore
//! use deadstyle_core::prelude::*;
//!
//! let result = Deadstyle::new("/path/to/site")
//!     .markup_extension("html")
//!     .stylesheet_extension("styl")
//!     .audit()?;
//!
//! for unused in &result.diff.unused {
//!     println!("Unused selector: {}", unused.selector);
//! }
//! ```
//!
//! The builder owns the whole run: validation happens before any crawling,
//! per-file extraction runs in parallel, and folding into the
//! cross-reference index stays sequential over the sorted file order so
//! the first-declaration-wins rule is deterministic.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{normalize_extension, DEFAULT_MARKUP_EXT, DEFAULT_STYLESHEET_EXT};
use crate::diff::{diff, DiffResult};
use crate::error::{DeadstyleError, DeadstyleResult, IoResultExt};
use crate::index::CrossRefIndex;
use crate::markup::{extract_styled_elements, StyledElement};
use crate::scan::{gather_source_files, SourceKind};
use crate::stylesheet::{extract_declared_selectors, DeclaredSelectors};

/// Builder for configuring a selector audit.
#[derive(Debug, Clone)]
pub struct Deadstyle {
    /// Root path of the source tree to audit
    root: PathBuf,

    /// Markup file extension (with or without leading dot)
    markup_ext: String,

    /// Stylesheet file extension (with or without leading dot)
    stylesheet_ext: String,

    /// Extra directory names to skip during the crawl
    excluded_dirs: Vec<String>,
}

impl Deadstyle {
    /// Create a new audit builder for the given source tree.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            markup_ext: DEFAULT_MARKUP_EXT.to_string(),
            stylesheet_ext: DEFAULT_STYLESHEET_EXT.to_string(),
            excluded_dirs: Vec::new(),
        }
    }

    /// Set the markup file extension to audit.
    pub fn markup_extension(mut self, ext: impl Into<String>) -> Self {
        self.markup_ext = ext.into();
        self
    }

    /// Set the stylesheet file extension to audit.
    pub fn stylesheet_extension(mut self, ext: impl Into<String>) -> Self {
        self.stylesheet_ext = ext.into();
        self
    }

    /// Add directory names to exclude from the crawl.
    pub fn exclude_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Run the audit and return results.
    ///
    /// A file that cannot be read contributes nothing and is recorded in
    /// the result's [`FileReport`] list; the run itself only fails on
    /// invalid configuration, which is rejected before any crawling.
    pub fn audit(&self) -> Result<AuditResult> {
        // 1. Validate the extension mapping before any crawling
        let markup_ext = normalize_extension(&self.markup_ext)?;
        let stylesheet_ext = normalize_extension(&self.stylesheet_ext)?;
        if markup_ext == stylesheet_ext {
            return Err(DeadstyleError::config(format!(
                "markup and stylesheet extensions are both '{markup_ext}'"
            ))
            .into());
        }

        // 2. Discover source files (sorted within each kind)
        let sources =
            gather_source_files(&self.root, &markup_ext, &stylesheet_ext, &self.excluded_dirs)
                .with_context(|| {
                    format!("Failed to gather source files from {}", self.root.display())
                })?;

        // 3. Per-file extraction in parallel; collect keeps the sorted order
        let markup_results: Vec<(PathBuf, DeadstyleResult<Vec<StyledElement>>)> = sources
            .markup
            .par_iter()
            .map(|path| {
                let outcome = fs::read_to_string(path)
                    .with_path(path.clone())
                    .map(|content| extract_styled_elements(&content));
                (path.clone(), outcome)
            })
            .collect();

        let stylesheet_results: Vec<(PathBuf, DeadstyleResult<DeclaredSelectors>)> = sources
            .stylesheets
            .par_iter()
            .map(|path| {
                let outcome = fs::read_to_string(path)
                    .with_path(path.clone())
                    .map(|content| extract_declared_selectors(&content));
                (path.clone(), outcome)
            })
            .collect();

        // 4. Sequential fold into the run's accumulator
        let mut index = CrossRefIndex::new();
        let mut files = Vec::with_capacity(sources.len());

        for (path, outcome) in markup_results {
            let path_str = path.display().to_string();
            match outcome {
                Ok(records) => {
                    index.add_markup_file(&path_str, records);
                    files.push(FileReport::ok(path_str, SourceKind::Markup));
                }
                Err(err) => {
                    warn!(file = %path_str, error = %err, "skipping markup file");
                    files.push(FileReport::failed(path_str, SourceKind::Markup, &err));
                }
            }
        }

        for (path, outcome) in stylesheet_results {
            let path_str = path.display().to_string();
            match outcome {
                Ok(declared) => {
                    index.add_stylesheet_file(&path_str, declared);
                    files.push(FileReport::ok(path_str, SourceKind::Stylesheet));
                }
                Err(err) => {
                    warn!(file = %path_str, error = %err, "skipping stylesheet file");
                    files.push(FileReport::failed(path_str, SourceKind::Stylesheet, &err));
                }
            }
        }

        // 5. Diff the completed indices
        let diff = diff(&index);

        info!(
            markup_files = sources.markup.len(),
            stylesheet_files = sources.stylesheets.len(),
            undefined = diff.stats.undefined_count,
            unused = diff.stats.unused_count,
            "audit complete"
        );

        Ok(AuditResult {
            root: self.root.clone(),
            diff,
            files,
            index,
        })
    }
}

/// Outcome of visiting one source file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the visited file
    pub path: String,
    /// Which extractor the file fed
    pub kind: SourceKind,
    /// Why the file contributed nothing; `None` on success
    pub error: Option<String>,
}

impl FileReport {
    fn ok(path: String, kind: SourceKind) -> Self {
        Self {
            path,
            kind,
            error: None,
        }
    }

    fn failed(path: String, kind: SourceKind, err: &DeadstyleError) -> Self {
        Self {
            path,
            kind,
            error: Some(err.to_string()),
        }
    }

    /// True when the file was extracted successfully.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of one audit run.
#[derive(Debug, Clone)]
pub struct AuditResult {
    /// Root path that was audited
    pub root: PathBuf,

    /// The two-way selector diff
    pub diff: DiffResult,

    /// Per-file success/failure reports, markup first, in fold order
    pub files: Vec<FileReport>,

    /// The completed cross-reference index (per-file results retained)
    pub index: CrossRefIndex,
}

impl AuditResult {
    /// Check if the audit found anything to report.
    pub fn has_findings(&self) -> bool {
        !self.diff.unused.is_empty() || !self.diff.undefined.is_empty()
    }

    /// Files that were skipped because they could not be read.
    pub fn failed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_test_site() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "deadstyle_builder_test_{}_{}",
            std::process::id(),
            id
        ));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_builder_basic_audit() {
        let dir = create_test_site();
        create_file(
            &dir.join("index.html"),
            r#"<div class="card"></div><p class="ghost"></p>"#,
        );
        create_file(&dir.join("base.styl"), ".card\n.dead\n");

        let result = Deadstyle::new(&dir).audit().unwrap();

        assert!(result.has_findings());
        assert_eq!(result.diff.undefined.len(), 1);
        assert_eq!(result.diff.undefined[0].selector, ".ghost");
        assert_eq!(result.diff.unused.len(), 1);
        assert_eq!(result.diff.unused[0].selector, ".dead");
        assert_eq!(result.files.len(), 2);
        assert!(result.failed_files().next().is_none());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_builder_custom_extensions() {
        let dir = create_test_site();
        create_file(&dir.join("page.xhtml"), r#"<div class="card"></div>"#);
        create_file(&dir.join("theme.css"), ".card\n");

        let result = Deadstyle::new(&dir)
            .markup_extension(".xhtml")
            .stylesheet_extension("css")
            .audit()
            .unwrap();

        assert!(!result.has_findings());
        assert_eq!(result.index.used_count(), 1);
        assert_eq!(result.index.declared_count(), 1);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_builder_rejects_identical_extensions() {
        let dir = create_test_site();
        let err = Deadstyle::new(&dir)
            .markup_extension("html")
            .stylesheet_extension("html")
            .audit()
            .unwrap_err();

        assert!(err.to_string().contains("html"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_builder_rejects_empty_extension() {
        let dir = create_test_site();
        assert!(Deadstyle::new(&dir)
            .markup_extension("")
            .audit()
            .is_err());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_builder_exclude_dirs() {
        let dir = create_test_site();
        create_file(&dir.join("index.html"), r#"<div class="card"></div>"#);
        create_file(&dir.join("vendor/skip.html"), r#"<div class="vendored"></div>"#);
        create_file(&dir.join("base.styl"), ".card\n");

        let result = Deadstyle::new(&dir)
            .exclude_dirs(["vendor"])
            .audit()
            .unwrap();

        assert!(!result.has_findings());
        assert!(result.index.usages().get(".vendored").is_none());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_builder_empty_tree() {
        let dir = create_test_site();
        let result = Deadstyle::new(&dir).audit().unwrap();

        assert!(!result.has_findings());
        assert!(result.files.is_empty());

        fs::remove_dir_all(&dir).ok();
    }
}
