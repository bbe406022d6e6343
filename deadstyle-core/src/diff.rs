//! Two-way selector diff over the completed cross-reference index.
//!
//! The declaration and usage sides spell the *same* logical selector with
//! different prefix conventions (stylesheet nesting syntax vs. flat markup
//! classes), so each direction normalizes independently toward the other
//! side's convention:
//!
//! - undefined: a used selector `s` also matches declarations `&s` / `>s`
//! - unused: a declared selector matches usages after a leading `&.` / `>.`
//!   is rewritten to `.`
//!
//! The two rules are deliberately not one shared normalization function;
//! collapsing them would conflate a top-level `.foo` with a nested `&.foo`
//! declared under a different parent.

use serde::Serialize;

use crate::index::{CrossRefIndex, UsageSite};
use crate::selector::{nested_variants, strip_nesting_prefix};

/// A selector declared in a stylesheet but never referenced by markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnusedSelector {
    pub selector: String,
    /// The declaring stylesheet file
    pub file: String,
}

/// A selector referenced by markup but never declared in any stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UndefinedSelector {
    pub selector: String,
    /// Every markup site referencing the selector, in crawl order
    pub sites: Vec<UsageSite>,
}

/// Summary counts for one diff.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffStats {
    pub used_selectors: usize,
    pub declared_selectors: usize,
    pub undefined_count: usize,
    pub unused_count: usize,
}

/// Result of diffing the two indices. Plain data; formatting lives in
/// [`crate::report`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffResult {
    pub unused: Vec<UnusedSelector>,
    pub undefined: Vec<UndefinedSelector>,
    pub stats: DiffStats,
}

/// Find selectors used in markup with no declaration under any nesting
/// variant.
///
/// A used selector `s` counts as defined when `s`, `&s` or `>s` is a key
/// in the declaration index. Results are sorted by selector; each entry
/// carries all of the selector's usage sites.
pub fn find_undefined(index: &CrossRefIndex) -> Vec<UndefinedSelector> {
    let declarations = index.declarations();

    let mut undefined: Vec<UndefinedSelector> = index
        .usages()
        .iter()
        .filter(|(sel, _)| {
            !declarations.contains_key(*sel)
                && !nested_variants(sel.as_str())
                    .iter()
                    .any(|variant| declarations.contains_key(variant))
        })
        .map(|(sel, sites)| UndefinedSelector {
            selector: sel.clone(),
            sites: sites.clone(),
        })
        .collect();

    undefined.sort_by(|a, b| a.selector.cmp(&b.selector));
    undefined
}

/// Find selectors declared in stylesheets that no markup references.
///
/// A declared selector `s` counts as used when `s` itself, or `s` with a
/// leading `&.`/`>.` rewritten to `.`, is a key in the usage index.
/// Results are sorted by selector; each entry carries the single declaring
/// file.
pub fn find_unused(index: &CrossRefIndex) -> Vec<UnusedSelector> {
    let usages = index.usages();

    let mut unused: Vec<UnusedSelector> = index
        .declarations()
        .iter()
        .filter(|(sel, _)| {
            !usages.contains_key(*sel)
                && !usages.contains_key(&strip_nesting_prefix(sel.as_str()))
        })
        .map(|(sel, file)| UnusedSelector {
            selector: sel.clone(),
            file: file.clone(),
        })
        .collect();

    unused.sort_by(|a, b| a.selector.cmp(&b.selector));
    unused
}

/// Run both diff directions and collect summary counts.
pub fn diff(index: &CrossRefIndex) -> DiffResult {
    let undefined = find_undefined(index);
    let unused = find_unused(index);

    let stats = DiffStats {
        used_selectors: index.used_count(),
        declared_selectors: index.declared_count(),
        undefined_count: undefined.len(),
        unused_count: unused.len(),
    };

    DiffResult {
        unused,
        undefined,
        stats,
    }
}
