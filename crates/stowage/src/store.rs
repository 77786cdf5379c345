//! TempStore: filesystem-backed temporary content storage.
//!
//! Layout:
//! ```text
//! {tmp_root}/
//! └── stowage-tmp/
//!     ├── 3f9c1d2ab54e...   # put() files, random 32-hex names
//!     └── report.txt        # put_named() files, caller-chosen names
//! ```
//!
//! `put` allocates collision-free paths with an exclusive-create loop.
//! `put_named` and `create` deliberately overwrite: two writers to the same
//! name race and the last one wins.

use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::config::{StowageConfig, SCRATCH_DIR_NAME};
use crate::content::ContentSource;
use crate::error::{OperationalError, Result};
use crate::folders;

/// Filesystem-backed temporary content store.
///
/// Stored files are never mutated by the store; removing them is the
/// caller's responsibility.
#[derive(Debug, Clone)]
pub struct TempStore {
    config: StowageConfig,
}

impl TempStore {
    /// Create a store with the given configuration.
    pub fn new(config: StowageConfig) -> Self {
        Self { config }
    }

    /// Create a store with a specific base path.
    pub fn with_tmp_root(path: impl Into<PathBuf>) -> Self {
        Self::new(StowageConfig::with_tmp_root(path))
    }

    /// Get the configuration.
    pub fn config(&self) -> &StowageConfig {
        &self.config
    }

    /// Write `content` to a freshly allocated path under the managed temp
    /// root and return the absolute path.
    ///
    /// Repeated calls never return the same path, even across concurrent
    /// callers: the file is opened with exclusive create and a new random
    /// name is drawn on collision.
    pub fn put<'a>(
        &self,
        content: impl Into<ContentSource<'a>>,
        root: Option<&Path>,
    ) -> Result<PathBuf> {
        let dir = self.scratch_root(root)?;
        let (path, mut file) = create_exclusive(&dir)?;

        let written = content
            .into()
            .drain_to(&mut file)
            .map_err(|e| OperationalError::new("write temp file", &path, e))?;

        debug!(path = %path.display(), bytes = written, "stored temp file");
        absolute(path)
    }

    /// Like [`put`](Self::put), but the final path component is exactly
    /// `filename`.
    ///
    /// There is no collision protection: two calls with the same filename
    /// and root write to the same path, and the last writer wins.
    pub fn put_named<'a>(
        &self,
        content: impl Into<ContentSource<'a>>,
        filename: &str,
        root: Option<&Path>,
    ) -> Result<PathBuf> {
        let dir = self.scratch_root(root)?;
        write_file(dir.join(filename), content.into())
    }

    /// Write `content` to `directory/filename`, creating `directory` if
    /// necessary. Overwrites an existing file.
    pub fn create<'a>(
        &self,
        directory: &Path,
        filename: &str,
        content: impl Into<ContentSource<'a>>,
    ) -> Result<PathBuf> {
        folders::create(directory)?;
        write_file(directory.join(filename), content.into())
    }

    /// Resolve the managed temp root, creating it if absent and reusing it
    /// if present.
    fn scratch_root(&self, root: Option<&Path>) -> Result<PathBuf> {
        let dir = match root {
            Some(base) => base.join(SCRATCH_DIR_NAME),
            None => self.config.scratch_dir(),
        };
        folders::create(&dir)?;
        Ok(dir)
    }
}

/// Final path component of a caller-supplied path string.
///
/// Splits on both `/` and `\` so paths recorded on foreign systems resolve
/// to a usable basename. Everything else is preserved literally, embedded
/// null bytes included.
pub fn filename_from_path(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Random 32-hex name: a v4 uuid hashed with BLAKE3, truncated to 128 bits.
pub(crate) fn unique_name() -> String {
    let uuid = Uuid::new_v4();
    let digest = blake3::hash(uuid.as_bytes());
    hex::encode(&digest.as_bytes()[..16])
}

/// Open a freshly named file with exclusive create, drawing a new name on
/// collision. `create_new` makes the existence check and the creation one
/// atomic step, so concurrent callers cannot be handed the same path.
fn create_exclusive(dir: &Path) -> Result<(PathBuf, File)> {
    loop {
        let path = dir.join(unique_name());
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(OperationalError::new("create temp file", path, e)),
        }
    }
}

fn write_file(path: PathBuf, content: ContentSource<'_>) -> Result<PathBuf> {
    let mut file =
        File::create(&path).map_err(|e| OperationalError::new("create file", &path, e))?;

    let written = content
        .drain_to(&mut file)
        .map_err(|e| OperationalError::new("write file", &path, e))?;

    debug!(path = %path.display(), bytes = written, "wrote file");
    absolute(path)
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    match env::current_dir() {
        Ok(cwd) => Ok(cwd.join(path)),
        Err(e) => Err(OperationalError::new("resolve path", path, e)),
    }
}
