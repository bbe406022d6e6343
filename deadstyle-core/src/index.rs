//! Cross-reference index: the accumulator for one audit run.
//!
//! Per-file extraction results are folded into two global maps:
//!
//! - usages: selector → every site where markup references it
//! - declarations: selector → the file that declares it
//!
//! The index is owned by the audit run and passed into each fold call;
//! it is build-once and read-only after the crawl completes.

use serde::Serialize;
use std::collections::HashMap;

use crate::markup::StyledElement;
use crate::stylesheet::DeclaredSelectors;

/// One place a selector is referenced from markup.
///
/// Derived 1:1 from a (styled element, selector) pair; many sites may map
/// to one selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageSite {
    /// Markup file the reference lives in
    pub file: String,
    /// 1-indexed source line, 0 when attribution failed
    pub line_no: usize,
    /// Tag name of the referencing element
    pub tag: String,
    /// Opening-tag snippet of the referencing element
    pub element: String,
}

/// Global selector indices accumulated across all source files.
#[derive(Debug, Clone, Default)]
pub struct CrossRefIndex {
    /// selector → usage sites, in file-then-element encounter order
    usages: HashMap<String, Vec<UsageSite>>,
    /// selector → declaring file; first declaration wins
    declarations: HashMap<String, String>,
    /// per-file styled-element records, keyed by markup file path
    markup_records: HashMap<String, Vec<StyledElement>>,
    /// per-file declared selectors, keyed by stylesheet file path
    stylesheet_selectors: HashMap<String, DeclaredSelectors>,
}

impl CrossRefIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one markup file's styled elements into the usage index.
    ///
    /// Every (record, selector) pair appends one [`UsageSite`]; within a
    /// selector, sites keep the order files and elements were folded in.
    pub fn add_markup_file(&mut self, path: &str, records: Vec<StyledElement>) {
        for record in &records {
            for sel in &record.selectors {
                self.usages.entry(sel.clone()).or_default().push(UsageSite {
                    file: path.to_string(),
                    line_no: record.line_no,
                    tag: record.tag.clone(),
                    element: record.snippet.clone(),
                });
            }
        }

        self.markup_records.insert(path.to_string(), records);
    }

    /// Fold one stylesheet file's declared selectors into the declaration
    /// index.
    ///
    /// Merge policy: **first declaration wins**. A selector already present
    /// keeps its original declaring file; later re-declarations elsewhere
    /// are silently skipped and never recorded as conflicts.
    pub fn add_stylesheet_file(&mut self, path: &str, declared: DeclaredSelectors) {
        for sel in declared.iter() {
            self.declarations
                .entry(sel.clone())
                .or_insert_with(|| path.to_string());
        }

        self.stylesheet_selectors.insert(path.to_string(), declared);
    }

    /// selector → usage sites across all folded markup files.
    pub fn usages(&self) -> &HashMap<String, Vec<UsageSite>> {
        &self.usages
    }

    /// selector → declaring file across all folded stylesheet files.
    pub fn declarations(&self) -> &HashMap<String, String> {
        &self.declarations
    }

    /// Styled-element records of one folded markup file.
    pub fn markup_records(&self, path: &str) -> Option<&[StyledElement]> {
        self.markup_records.get(path).map(Vec::as_slice)
    }

    /// Declared selectors of one folded stylesheet file.
    pub fn stylesheet_selectors(&self, path: &str) -> Option<&DeclaredSelectors> {
        self.stylesheet_selectors.get(path)
    }

    /// Number of distinct selectors referenced from markup.
    pub fn used_count(&self) -> usize {
        self.usages.len()
    }

    /// Number of distinct selectors declared in stylesheets.
    pub fn declared_count(&self) -> usize {
        self.declarations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::extract_styled_elements;
    use crate::stylesheet::extract_declared_selectors;

    fn styled(tag: &str, selectors: &[&str]) -> StyledElement {
        StyledElement {
            tag: tag.to_string(),
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            line_no: 1,
            snippet: format!("<{tag}>"),
        }
    }

    #[test]
    fn test_markup_fold_builds_usage_sites() {
        let mut index = CrossRefIndex::new();
        index.add_markup_file("a.html", vec![styled("div", &[".card", ".wide"])]);

        assert_eq!(index.used_count(), 2);
        let sites = &index.usages()[".card"];
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].file, "a.html");
        assert_eq!(sites[0].tag, "div");
    }

    #[test]
    fn test_usage_sites_keep_encounter_order() {
        let mut index = CrossRefIndex::new();
        index.add_markup_file("a.html", vec![styled("div", &[".card"])]);
        index.add_markup_file("b.html", vec![styled("span", &[".card"])]);

        let files: Vec<&str> = index.usages()[".card"]
            .iter()
            .map(|s| s.file.as_str())
            .collect();
        assert_eq!(files, vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_first_declaration_wins() {
        let mut index = CrossRefIndex::new();
        index.add_stylesheet_file("first.styl", extract_declared_selectors(".card\n"));
        index.add_stylesheet_file("second.styl", extract_declared_selectors(".card\n#nav\n"));

        assert_eq!(index.declarations()[".card"], "first.styl");
        assert_eq!(index.declarations()["#nav"], "second.styl");
    }

    #[test]
    fn test_per_file_results_retained() {
        let mut index = CrossRefIndex::new();
        index.add_markup_file(
            "a.html",
            extract_styled_elements(r#"<div class="card"></div>"#),
        );
        index.add_stylesheet_file("base.styl", extract_declared_selectors(".card\n"));

        assert_eq!(index.markup_records("a.html").unwrap().len(), 1);
        assert_eq!(index.stylesheet_selectors("base.styl").unwrap().len(), 1);
        assert!(index.markup_records("missing.html").is_none());
    }

    #[test]
    fn test_counts() {
        let mut index = CrossRefIndex::new();
        index.add_markup_file("a.html", vec![styled("div", &[".a", ".b"])]);
        index.add_stylesheet_file("s.styl", extract_declared_selectors(".a\n#x\n"));

        assert_eq!(index.used_count(), 2);
        assert_eq!(index.declared_count(), 2);
    }
}
