//! Streaming SHA-512 digests for file content comparison

use crate::error::VerifyError;
use sha2::{Digest, Sha512};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the SHA-512 digest of a file and return it as lowercase hex.
///
/// Reads in fixed-size chunks so memory use stays bounded for arbitrarily
/// large files. I/O failures propagate to the caller; they must never be
/// reported as a content mismatch.
pub fn file_digest(path: &Path) -> Result<String, VerifyError> {
    let mut file = File::open(path).map_err(|source| VerifyError::Digest {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Sha512::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|source| VerifyError::Digest {
            path: path.to_path_buf(),
            source,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
