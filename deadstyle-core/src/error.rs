//! Typed error handling for deadstyle.
//!
//! Provides structured errors that library consumers can match on,
//! with context about what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deadstyle operations.
#[derive(Error, Debug)]
pub enum DeadstyleError {
    /// I/O error when reading a source file
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A source file could not be interpreted even permissively
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Invalid audit configuration (rejected before any crawling starts)
    #[error("Config error: {message}")]
    Config { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DeadstyleError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a parse error for a source file.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable within a run.
    ///
    /// I/O and parse failures are scoped to a single file: the file is
    /// skipped and the audit continues with partial results. Config errors
    /// are raised before the crawl and abort the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Parse { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Parse { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for deadstyle results.
pub type DeadstyleResult<T> = Result<T, DeadstyleError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> DeadstyleResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> DeadstyleResult<T> {
        self.map_err(|e| DeadstyleError::io(path, e))
    }
}
