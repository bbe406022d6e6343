//! Parallel source-file discovery with directory pruning.
//!
//! One walk collects both file kinds. Hidden entries and excluded
//! directories are pruned via `WalkDir::filter_entry`, which skips whole
//! subtrees before iteration; classification of the surviving entries runs
//! under Rayon.
//!
//! Crawl results are sorted before being returned: the fold into the
//! cross-reference index is sequential over this order, which keeps the
//! first-declaration-wins rule deterministic across runs.

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names excluded by default, alongside any hidden entry.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "target", "env"];

/// Which extractor a discovered file feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Markup,
    Stylesheet,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup => write!(f, "markup"),
            Self::Stylesheet => write!(f, "stylesheet"),
        }
    }
}

/// The audit's input set, sorted within each kind.
#[derive(Debug, Clone, Default)]
pub struct SourceFiles {
    pub markup: Vec<PathBuf>,
    pub stylesheets: Vec<PathBuf>,
}

impl SourceFiles {
    /// Total number of discovered files.
    pub fn len(&self) -> usize {
        self.markup.len() + self.stylesheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.stylesheets.is_empty()
    }
}

/// Checks if a directory entry should be pruned from traversal.
///
/// The walk root itself is never pruned; below it, hidden entries
/// (dot-prefixed) and excluded directory names are skipped.
#[inline]
fn is_pruned(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let Some(name) = entry.file_name().to_str() else {
        return true;
    };
    if name.starts_with('.') {
        return true;
    }
    entry.file_type().is_dir() && excludes.contains(name)
}

/// Gathers all markup and stylesheet files under `root` in one walk.
///
/// Extensions are compared without their leading dot. Entries the walker
/// cannot read are logged and skipped; a single bad directory never aborts
/// the crawl.
pub fn gather_source_files(
    root: &Path,
    markup_ext: &str,
    stylesheet_ext: &str,
    extra_excludes: &[String],
) -> Result<SourceFiles> {
    let excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(extra_excludes.iter().map(String::as_str))
        .collect();

    let entries: Vec<(SourceKind, PathBuf)> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_pruned(e, &excludes))
        .par_bridge()
        .filter_map(|entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable directory entry");
                    return None;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                return None;
            }

            match path.extension().and_then(|ext| ext.to_str()) {
                Some(ext) if ext == markup_ext => {
                    Some((SourceKind::Markup, path.to_path_buf()))
                }
                Some(ext) if ext == stylesheet_ext => {
                    Some((SourceKind::Stylesheet, path.to_path_buf()))
                }
                _ => None,
            }
        })
        .collect();

    let mut files = SourceFiles::default();
    for (kind, path) in entries {
        match kind {
            SourceKind::Markup => files.markup.push(path),
            SourceKind::Stylesheet => files.stylesheets.push(path),
        }
    }

    files.markup.sort();
    files.stylesheets.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn create_test_tree() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "deadstyle_scan_test_{}_{}",
            std::process::id(),
            id
        ));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }

        fs::create_dir_all(dir.join("pages")).unwrap();
        fs::create_dir_all(dir.join("styles")).unwrap();
        fs::create_dir_all(dir.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(dir.join(".cache")).unwrap();

        fs::write(dir.join("index.html"), "<div></div>").unwrap();
        fs::write(dir.join("pages/about.html"), "<div></div>").unwrap();
        fs::write(dir.join("styles/base.styl"), ".card\n").unwrap();
        fs::write(dir.join("notes.txt"), "not audited").unwrap();
        fs::write(dir.join("node_modules/pkg/vendor.html"), "<div></div>").unwrap();
        fs::write(dir.join(".cache/stale.styl"), ".gone\n").unwrap();
        fs::write(dir.join(".hidden.html"), "<div></div>").unwrap();

        dir
    }

    #[test]
    fn test_gather_classifies_by_extension() {
        let dir = create_test_tree();
        let files = gather_source_files(&dir, "html", "styl", &[]).unwrap();

        assert_eq!(files.markup.len(), 2);
        assert_eq!(files.stylesheets.len(), 1);
        assert_eq!(files.len(), 3);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_gather_prunes_hidden_and_excluded() {
        let dir = create_test_tree();
        let files = gather_source_files(&dir, "html", "styl", &[]).unwrap();

        assert!(files.markup.iter().all(|p| !p.to_string_lossy().contains("node_modules")));
        assert!(files.markup.iter().all(|p| !p.to_string_lossy().contains(".hidden")));
        assert!(files.stylesheets.iter().all(|p| !p.to_string_lossy().contains(".cache")));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_gather_extra_excludes() {
        let dir = create_test_tree();
        let files =
            gather_source_files(&dir, "html", "styl", &["pages".to_string()]).unwrap();

        assert_eq!(files.markup.len(), 1);
        assert!(files.markup[0].ends_with("index.html"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_gather_results_sorted() {
        let dir = create_test_tree();
        let files = gather_source_files(&dir, "html", "styl", &[]).unwrap();

        let mut sorted = files.markup.clone();
        sorted.sort();
        assert_eq!(files.markup, sorted);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_source_kind_display() {
        assert_eq!(SourceKind::Markup.to_string(), "markup");
        assert_eq!(SourceKind::Stylesheet.to_string(), "stylesheet");
    }
}
