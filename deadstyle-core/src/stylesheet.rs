//! Declared-selector extraction from line-based stylesheets.
//!
//! The supported stylesheet dialect introduces one selector per line
//! (Stylus-style indentation syntax, not brace-delimited CSS): a trimmed
//! line starting with `.` or `&` declares a class selector, `#` declares an
//! id selector, and every other line (properties, comments, blanks) is
//! ignored without error.

use serde::Serialize;

use crate::selector::{classify_line, LineKind};

/// Selectors declared by one stylesheet file.
///
/// Both sets keep declaration order and are deduplicated within the file;
/// the same selector declared in *other* files is handled by the
/// cross-reference index, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeclaredSelectors {
    /// Class declarations, raw trimmed lines (`.card`, `&.active`)
    pub classes: Vec<String>,
    /// Id declarations, raw trimmed lines (`#nav`)
    pub ids: Vec<String>,
}

impl DeclaredSelectors {
    /// True when the file declared no selectors at all.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.ids.is_empty()
    }

    /// Number of distinct selectors declared by the file.
    pub fn len(&self) -> usize {
        self.classes.len() + self.ids.len()
    }

    /// All declared selectors, classes first, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.classes.iter().chain(self.ids.iter())
    }
}

/// Extract the declared selectors from stylesheet file content.
pub fn extract_declared_selectors(content: &str) -> DeclaredSelectors {
    let mut declared = DeclaredSelectors::default();

    for raw_line in content.lines() {
        let line = raw_line.trim();
        match classify_line(line) {
            LineKind::Class => {
                if !declared.classes.iter().any(|s| s == line) {
                    declared.classes.push(line.to_string());
                }
            }
            LineKind::Id => {
                if !declared.ids.iter().any(|s| s == line) {
                    declared.ids.push(line.to_string());
                }
            }
            LineKind::Other => {}
        }
    }

    declared
}
