//! Error type for store operations.
//!
//! Every filesystem failure in this crate surfaces as [`OperationalError`]:
//! one kind, carrying the operation that failed, the path involved, and the
//! underlying I/O error. There is no transient/permanent distinction at this
//! layer and no retries; a failure is terminal for the call that produced it.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The single error kind for filesystem failures in this crate.
///
/// Partial files may remain on disk after an error, so callers must not
/// assume the destination path is absent.
#[derive(Debug, Error)]
#[error("{operation} {path}: {source}")]
pub struct OperationalError {
    operation: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl OperationalError {
    pub(crate) fn new(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self {
            operation,
            path: path.into(),
            source,
        }
    }

    /// The operation that failed, e.g. `"create temp file"`.
    pub fn operation(&self) -> &str {
        self.operation
    }

    /// The path the failed operation was addressing.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Kind of the underlying I/O error.
    pub fn io_kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, OperationalError>;
