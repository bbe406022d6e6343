//! Styled-element extraction from markup files.
//!
//! Parses one markup file into a sequence of [`StyledElement`] records:
//! every element carrying a `class` or `id` attribute, with its selectors
//! normalized to `.name` / `#name` form, its opening tag as a snippet, and
//! a best-effort source line.
//!
//! Parsing goes through html5ever (via `scraper`), which recovers from
//! malformed markup instead of aborting — real-world templates are
//! frequently non-well-formed.

use scraper::{Html, Selector};
use serde::Serialize;
use std::sync::LazyLock;

use crate::selector;

static ANY_ELEMENT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("*").expect("Failed to parse universal selector - this is a bug")
});

/// One styled element found in a markup file.
///
/// `selectors` is non-empty and deduplicated, in attribute order; elements
/// without a class or id are never recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledElement {
    /// Tag name (`div`, `span`, ...)
    pub tag: String,
    /// Normalized selectors (`.card`, `#nav`)
    pub selectors: Vec<String>,
    /// 1-indexed source line, 0 when attribution failed
    pub line_no: usize,
    /// First line of the element's serialized form
    pub snippet: String,
}

/// Extract all styled elements from markup file content, in document order.
///
/// Attribute priority is fixed and mutually exclusive: if a `class`
/// attribute is present, all of its whitespace-separated tokens are
/// recorded as class selectors and any `id` attribute is ignored;
/// otherwise a present `id` is recorded as an id selector. An element with
/// a `class` attribute that yields no tokens is not recorded at all, even
/// if it also carries an id.
pub fn extract_styled_elements(content: &str) -> Vec<StyledElement> {
    let document = Html::parse_document(content);
    let lines: Vec<&str> = content.lines().collect();
    let mut records = Vec::with_capacity(16);

    for element in document.select(&ANY_ELEMENT) {
        let value = element.value();
        let mut selectors: Vec<String> = Vec::new();

        if let Some(classes) = value.attr("class") {
            for token in classes.split_whitespace() {
                let sel = selector::class_selector(token);
                if !selectors.contains(&sel) {
                    selectors.push(sel);
                }
            }
        } else if let Some(id) = value.attr("id") {
            let id = id.trim();
            if !id.is_empty() {
                selectors.push(selector::id_selector(id));
            }
        }

        if selectors.is_empty() {
            continue;
        }

        let tag = value.name().to_string();
        let snippet = opening_tag_snippet(&element.html());
        let line_no = attribute_line(&lines, &tag, &selectors[0]);

        records.push(StyledElement {
            tag,
            selectors,
            line_no,
            snippet,
        });
    }

    records
}

/// First line of the element's serialized form, trimmed.
fn opening_tag_snippet(html: &str) -> String {
    html.trim().lines().next().unwrap_or_default().to_string()
}

/// Best-effort line attribution: the first raw line that textually contains
/// both the opening-tag marker and the element's first selector name
/// (unprefixed) wins; 0 when no line matches.
///
/// Known limitation: when the same tag/selector text appears more than once
/// verbatim, the earliest occurrence is attributed even if it belongs to a
/// different element.
fn attribute_line(lines: &[&str], tag: &str, first_selector: &str) -> usize {
    let open_tag = format!("<{tag}");
    let name = &first_selector[1..];

    lines
        .iter()
        .position(|line| line.contains(&open_tag) && line.contains(name))
        .map_or(0, |index| index + 1)
}
