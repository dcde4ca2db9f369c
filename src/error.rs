//! Error types for archive verification.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a verification run.
///
/// A structural or content mismatch between the two trees is not an error;
/// it is reported as a [`crate::compare::Comparison`] verdict. Everything
/// here is a genuine failure: the run cannot produce a verdict at all.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to unpack archive {archive:?}: {reason}")]
    Extract { archive: PathBuf, reason: String },

    #[error("unsupported archive format: {0:?}")]
    UnsupportedArchive(PathBuf),

    #[error("ambiguous extraction layout: expected the downloaded archive and exactly one extracted root, found {found} entries")]
    AmbiguousLayout { found: usize },

    #[error("downloaded archive no longer present in the work area after unpacking")]
    MissingArchive,

    #[error("extracted root {0:?} is not a directory")]
    ExtractedRootNotADirectory(PathBuf),

    #[error("not a readable directory: {0:?}")]
    InvalidRoot(PathBuf),

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {path:?} for digesting: {source}")]
    Digest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
