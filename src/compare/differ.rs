//! Tree differ: staged structural and content comparison of two inventories

use crate::compare::digest;
use crate::compare::inventory::PathInventory;
use crate::error::VerifyError;
use std::fmt;
use tracing::{debug, trace};

/// Verdict of a tree comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual(Mismatch),
}

/// The specific cause of an unequal verdict.
///
/// Each stage of [`diff`] is a hard gate; the first stage to signal
/// inequality produces the verdict and no later stage runs, so exactly one
/// cause is ever reported per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Directory sets differ in size; carries the entries with no exact
    /// match on the other side.
    DirectoryCount {
        archive_only: Vec<String>,
        local_only: Vec<String>,
    },
    /// Sorted directory lists diverge at a paired position.
    DirectoryName { archive: String, local: String },
    /// File sets differ in size; carries the unmatched entries.
    FileCount {
        archive_only: Vec<String>,
        local_only: Vec<String>,
    },
    /// Sorted file lists diverge at a paired position.
    FileName { archive: String, local: String },
    /// A paired file's bytes differ between the two trees.
    Digest {
        file: String,
        archive_digest: String,
        local_digest: String,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::DirectoryCount {
                archive_only,
                local_only,
            } => {
                for dir in archive_only {
                    writeln!(f, "Archive directory \"{}\" has no match on local.", dir)?;
                }
                for dir in local_only {
                    writeln!(f, "Local directory \"{}\" has no match in archive.", dir)?;
                }
                write!(f, "Directory structure is not equal.")
            }
            Mismatch::DirectoryName { archive, local } => write!(
                f,
                "Directory name not equal: \"{}\" in archive, \"{}\" on local.",
                archive, local
            ),
            Mismatch::FileCount {
                archive_only,
                local_only,
            } => {
                for file in archive_only {
                    writeln!(f, "Archive file \"{}\" has no match on local.", file)?;
                }
                for file in local_only {
                    writeln!(f, "Local file \"{}\" has no match in archive.", file)?;
                }
                write!(f, "File count different.")
            }
            Mismatch::FileName { archive, local } => write!(
                f,
                "File name not equal: \"{}\" in archive, \"{}\" on local.",
                archive, local
            ),
            Mismatch::Digest {
                file,
                archive_digest,
                local_digest,
            } => write!(
                f,
                "Hash mismatch for \"{}\": \"{}\" in archive, \"{}\" on local.",
                file, archive_digest, local_digest
            ),
        }
    }
}

/// Compare two inventories: directory sets, then file-name sets, then file
/// content by digest.
///
/// Both inventories are sorted here, so callers may pass them in any
/// traversal order. Comparison is by exact relative-path string equality,
/// case-sensitive. The stages run in a fixed order and stop at the first
/// inequality; content digests are only computed once both name lists are
/// confirmed positionally equal.
pub fn diff(
    mut archive: PathInventory,
    mut local: PathInventory,
) -> Result<Comparison, VerifyError> {
    archive.sort();
    local.sort();

    // Stage 1: directory counts, with set-difference diagnostics.
    if archive.directories.len() != local.directories.len() {
        return Ok(Comparison::NotEqual(Mismatch::DirectoryCount {
            archive_only: unmatched(&archive.directories, &local.directories),
            local_only: unmatched(&local.directories, &archive.directories),
        }));
    }

    // Stage 2: lock-step directory names.
    for (archive_dir, local_dir) in archive.directories.iter().zip(local.directories.iter()) {
        if archive_dir != local_dir {
            return Ok(Comparison::NotEqual(Mismatch::DirectoryName {
                archive: archive_dir.clone(),
                local: local_dir.clone(),
            }));
        }
        trace!(directory = %archive_dir, "Directory pair matched");
    }

    // Stage 3: file counts.
    if archive.files.len() != local.files.len() {
        return Ok(Comparison::NotEqual(Mismatch::FileCount {
            archive_only: unmatched(&archive.files, &local.files),
            local_only: unmatched(&local.files, &archive.files),
        }));
    }

    // Stage 4: lock-step file names.
    for (archive_file, local_file) in archive.files.iter().zip(local.files.iter()) {
        if archive_file != local_file {
            return Ok(Comparison::NotEqual(Mismatch::FileName {
                archive: archive_file.clone(),
                local: local_file.clone(),
            }));
        }
    }

    // Stage 5: content digests for the confirmed pairs, first mismatch wins.
    for file in archive.files.iter() {
        let archive_digest = digest::file_digest(&archive.resolve(file))?;
        let local_digest = digest::file_digest(&local.resolve(file))?;
        if archive_digest != local_digest {
            return Ok(Comparison::NotEqual(Mismatch::Digest {
                file: file.clone(),
                archive_digest,
                local_digest,
            }));
        }
        debug!(file = %file, digest = %archive_digest, "File pair matched");
    }

    Ok(Comparison::Equal)
}

/// Entries of `candidates` with no exact string match in `other`.
/// `other` must already be sorted.
fn unmatched(candidates: &[String], other: &[String]) -> Vec<String> {
    candidates
        .iter()
        .filter(|entry| other.binary_search(entry).is_err())
        .cloned()
        .collect()
}
