//! deadstyle-core: selector audit library for markup/stylesheet trees.
//!
//! This library cross-references CSS-like selectors (classes and ids) used
//! in markup files against selectors declared in line-based stylesheets,
//! and reports the two-way diff:
//!
//! - **Undefined selectors**: referenced in markup, never declared in any
//!   stylesheet (after nesting-prefix reconciliation)
//! - **Unused selectors**: declared in a stylesheet, never referenced by
//!   any markup element
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use deadstyle_core::prelude::*;
//!
//! let result = Deadstyle::new("/path/to/site")
//!     .markup_extension("html")
//!     .stylesheet_extension("styl")
//!     .audit()?;
//!
//! for undefined in &result.diff.undefined {
//!     println!("Undefined selector: {}", undefined.selector);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`selector`]: Selector normalization and nesting-prefix rules
//! - [`markup`]: Styled-element extraction from markup files
//! - [`stylesheet`]: Declared-selector extraction from stylesheets
//! - [`index`]: Cross-reference index folding per-file results
//! - [`diff`]: Two-way undefined/unused diff engine
//! - [`scan`]: Parallel source-file discovery
//! - [`builder`]: Fluent audit builder owning one run
//! - [`config`]: deadstyle.toml loading and extension validation
//! - [`report`]: Plain-text and JSON presenters
//! - [`error`]: Typed error handling
//! - [`logging`]: Structured tracing setup

pub mod builder;
pub mod config;
pub mod diff;
pub mod error;
pub mod index;
pub mod logging;
pub mod markup;
pub mod prelude;
pub mod report;
pub mod scan;
pub mod selector;
pub mod stylesheet;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{DeadstyleError, DeadstyleResult, IoResultExt};

// Builder API
pub use builder::{AuditResult, Deadstyle, FileReport};

// Configuration
pub use config::{
    load_config, normalize_extension, DeadstyleConfig, OutputConfig, DEFAULT_MARKUP_EXT,
    DEFAULT_STYLESHEET_EXT,
};

// Diff engine
pub use diff::{
    diff, find_undefined, find_unused, DiffResult, DiffStats, UndefinedSelector, UnusedSelector,
};

// Cross-reference index
pub use index::{CrossRefIndex, UsageSite};

// Logging
pub use logging::init_structured_logging;

// Extraction
pub use markup::{extract_styled_elements, StyledElement};
pub use stylesheet::{extract_declared_selectors, DeclaredSelectors};

// Reporting
pub use report::{print_json, print_plain};

// File scanning
pub use scan::{gather_source_files, SourceFiles, SourceKind, EXCLUDED_DIRS};

// Selector normalization
pub use selector::{
    class_selector, classify_line, id_selector, nested_variants, strip_nesting_prefix, LineKind,
};
