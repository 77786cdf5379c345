//! Temporary content storage.
//!
//! A small filesystem-backed store for short-lived files: hand it bytes or a
//! byte stream, get back the absolute path of a freshly written file under a
//! managed temporary root. Companion helpers provide directory provisioning
//! and streaming file digests.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stowage::{StowageConfig, TempStore};
//!
//! // Create from environment (reads STOWAGE_TMP_PATH)
//! let store = TempStore::new(StowageConfig::from_env());
//!
//! // Or over a specific base path
//! let store = TempStore::with_tmp_root("/tank/scratch");
//!
//! // Store content at a unique path
//! let path = store.put(b"hello", None).unwrap();
//! println!("stored at {}", path.display());
//!
//! // Or under a fixed name (repeat calls overwrite)
//! let report = store.put_named(b"summary", "report.txt", None).unwrap();
//! println!("report at {}", report.display());
//!
//! // Digest what was written
//! let digest = stowage::hash::sha256_file(&path).unwrap();
//! println!("sha256 {}", digest);
//! ```
//!
//! # Configuration
//!
//! Environment variables:
//! - `STOWAGE_TMP_PATH`: base path for the managed temp subtree (default:
//!   the system temp directory)
//!
//! Configuration is always passed in explicitly; see [`StowageConfig`] for
//! the TOML file form.
//!
//! # Concurrency
//!
//! All I/O is synchronous and blocking; the filesystem is the only shared
//! state. [`TempStore::put`] is collision-free under concurrent callers
//! because name allocation uses exclusive create. [`TempStore::put_named`]
//! and [`TempStore::create`] have no such protection: concurrent writers to
//! the same path race and the last writer wins.

pub mod config;
pub mod content;
pub mod error;
pub mod folders;
pub mod hash;
pub mod store;

// Re-exports for convenience
pub use config::{ConfigError, StowageConfig};
pub use content::ContentSource;
pub use error::{OperationalError, Result};
pub use store::{filename_from_path, TempStore};
