//! Streaming file digests.
//!
//! Files are read in fixed-size chunks and fed to the digest incrementally,
//! so memory stays bounded regardless of file size. Digests are returned as
//! lowercase hexadecimal strings.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::content::CHUNK_SIZE;
use crate::error::{OperationalError, Result};

/// MD5 digest of a file's contents.
pub fn md5_file(path: &Path) -> Result<String> {
    digest_file::<Md5>(path)
}

/// SHA1 digest of a file's contents.
pub fn sha1_file(path: &Path) -> Result<String> {
    digest_file::<Sha1>(path)
}

/// SHA256 digest of a file's contents.
pub fn sha256_file(path: &Path) -> Result<String> {
    digest_file::<Sha256>(path)
}

fn digest_file<D: Digest>(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).map_err(|e| OperationalError::new("open file for hashing", path, e))?;

    let mut hasher = D::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let n = file
            .read(&mut buffer)
            .map_err(|e| OperationalError::new("read file for hashing", path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
