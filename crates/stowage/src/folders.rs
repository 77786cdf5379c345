//! Directory provisioning for the store.
//!
//! Creation is recursive and idempotent; deletion is recursive. Temporary
//! directories are allocated with an atomic create-retry loop, so concurrent
//! callers always receive distinct paths.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{OperationalError, Result};
use crate::store::unique_name;

/// Create `path` and any missing parents. Succeeds if it already exists.
pub fn create(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| OperationalError::new("create folder", path, e))
}

/// Remove `path` and everything beneath it.
pub fn delete(path: &Path) -> Result<()> {
    debug!(path = %path.display(), "deleting folder");
    fs::remove_dir_all(path).map_err(|e| OperationalError::new("delete folder", path, e))
}

/// Allocate a fresh uniquely named directory under `base`.
///
/// `base` is created first if absent. Allocation rides on `fs::create_dir`,
/// which fails atomically when the name is taken; on `AlreadyExists` a new
/// random name is drawn. Two calls never return the same path.
pub fn create_temp_in(base: &Path) -> Result<PathBuf> {
    create(base)?;

    loop {
        let candidate = base.join(unique_name());
        match fs::create_dir(&candidate) {
            Ok(()) => {
                debug!(path = %candidate.display(), "created temp folder");
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(OperationalError::new("create temp folder", candidate, e)),
        }
    }
}
