//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use deadstyle_core::prelude::*;
//! ```

// Core audit types
pub use crate::error::{DeadstyleError, DeadstyleResult};

// Builder API
pub use crate::builder::{AuditResult, Deadstyle, FileReport};

// Extraction
pub use crate::markup::{extract_styled_elements, StyledElement};
pub use crate::stylesheet::{extract_declared_selectors, DeclaredSelectors};

// Index and diff
pub use crate::diff::{diff, find_undefined, find_unused, DiffResult};
pub use crate::index::{CrossRefIndex, UsageSite};

// File scanning
pub use crate::scan::{gather_source_files, SourceFiles};

// Configuration
pub use crate::config::{load_config, DeadstyleConfig};
