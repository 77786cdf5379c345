//! Store configuration with environment variable and file-based loading.
//!
//! Environment variables:
//! - `STOWAGE_TMP_PATH`: base path for temporary storage
//!
//! Default base path: the system temp directory. The store never reads
//! configuration behind the caller's back; a [`StowageConfig`] is built up
//! front and passed in.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the managed subtree created under the configured base path.
pub(crate) const SCRATCH_DIR_NAME: &str = "stowage-tmp";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Configuration for the temporary content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StowageConfig {
    /// Base path under which the managed `stowage-tmp` subtree lives.
    #[serde(rename = "tmppath", default = "default_tmp_root")]
    pub tmp_root: PathBuf,
}

fn default_tmp_root() -> PathBuf {
    env::temp_dir()
}

impl Default for StowageConfig {
    fn default() -> Self {
        Self {
            tmp_root: default_tmp_root(),
        }
    }
}

impl StowageConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let tmp_root = env::var("STOWAGE_TMP_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_tmp_root());

        Self { tmp_root }
    }

    /// Load configuration from a TOML file, falling back to environment.
    ///
    /// The file should contain a `[storage]` section:
    /// ```toml
    /// [storage]
    /// tmppath = "/var/lib/stowage"
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let table: toml::Table =
            contents
                .parse()
                .map_err(|e: toml::de::Error| ConfigError::Parse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;

        match table.get("storage") {
            Some(section) => {
                section
                    .clone()
                    .try_into()
                    .map_err(|e: toml::de::Error| ConfigError::Parse {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })
            }
            // No [storage] section, fall back to env
            None => Ok(Self::from_env()),
        }
    }

    /// Create a config with a specific base path.
    pub fn with_tmp_root(path: impl Into<PathBuf>) -> Self {
        Self {
            tmp_root: path.into(),
        }
    }

    /// The managed temporary subtree under the base path.
    pub fn scratch_dir(&self) -> PathBuf {
        self.tmp_root.join(SCRATCH_DIR_NAME)
    }
}
