//! Selector normalization shared by the extractors and the diff engine.
//!
//! Two syntaxes feed the audit: markup attributes (`class="card"`,
//! `id="nav"`) and line-based stylesheet declarations (`.card`, `#nav`,
//! `&.active`, `> .child`). Both sides are normalized into `.name` / `#name`
//! selector strings here; the stylesheet-only nesting markers `&` and `>`
//! are reconciled by the diff engine via [`nested_variants`] and
//! [`strip_nesting_prefix`].

/// Classification of a trimmed stylesheet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with `.` or `&` (nesting-combination marker)
    Class,
    /// Starts with `#`
    Id,
    /// Anything else, including blank lines — ignored by the extractor
    Other,
}

/// Normalize a raw class token from markup into a `.`-prefixed selector.
pub fn class_selector(token: &str) -> String {
    format!(".{token}")
}

/// Normalize a raw id token from markup into a `#`-prefixed selector.
pub fn id_selector(token: &str) -> String {
    format!("#{token}")
}

/// Classify one stylesheet line by its first non-whitespace character.
///
/// Only `.`, `&` and `#` introduce selectors; no other character does.
pub fn classify_line(line: &str) -> LineKind {
    match line.trim_start().chars().next() {
        Some('.') | Some('&') => LineKind::Class,
        Some('#') => LineKind::Id,
        _ => LineKind::Other,
    }
}

/// The nesting-prefixed forms a markup selector may be declared under.
///
/// Markup selectors never carry a nesting marker, so the usage side of the
/// diff must also try `&sel` and `>sel` against the declaration index.
pub fn nested_variants(selector: &str) -> [String; 2] {
    [format!("&{selector}"), format!(">{selector}")]
}

/// Rewrite a declared selector to markup form by stripping one leading
/// `&.` or `>.` nesting prefix. Selectors without such a prefix are
/// returned unchanged.
pub fn strip_nesting_prefix(selector: &str) -> String {
    if let Some(rest) = selector
        .strip_prefix("&.")
        .or_else(|| selector.strip_prefix(">."))
    {
        format!(".{rest}")
    } else {
        selector.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_and_id_prefixes() {
        assert_eq!(class_selector("card"), ".card");
        assert_eq!(id_selector("nav"), "#nav");
    }

    #[test]
    fn test_classify_class_lines() {
        assert_eq!(classify_line(".card"), LineKind::Class);
        assert_eq!(classify_line("&.active"), LineKind::Class);
        assert_eq!(classify_line("  .indented"), LineKind::Class);
    }

    #[test]
    fn test_classify_id_lines() {
        assert_eq!(classify_line("#header"), LineKind::Id);
        assert_eq!(classify_line("   #footer"), LineKind::Id);
    }

    #[test]
    fn test_classify_ignores_everything_else() {
        assert_eq!(classify_line(""), LineKind::Other);
        assert_eq!(classify_line("   "), LineKind::Other);
        assert_eq!(classify_line("color red"), LineKind::Other);
        assert_eq!(classify_line("// comment"), LineKind::Other);
        assert_eq!(classify_line("div"), LineKind::Other);
    }

    #[test]
    fn test_nested_variants() {
        assert_eq!(
            nested_variants(".card"),
            ["&.card".to_string(), ">.card".to_string()]
        );
    }

    #[test]
    fn test_strip_nesting_prefix() {
        assert_eq!(strip_nesting_prefix("&.active"), ".active");
        assert_eq!(strip_nesting_prefix(">.child"), ".child");
        assert_eq!(strip_nesting_prefix(".plain"), ".plain");
        assert_eq!(strip_nesting_prefix("#nav"), "#nav");
    }

    #[test]
    fn test_strip_nesting_prefix_only_leading() {
        // Only one leading marker is rewritten; interior text is untouched.
        assert_eq!(strip_nesting_prefix("&.a > .b"), ".a > .b");
    }
}
