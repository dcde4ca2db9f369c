//! Scoped temporary work area for one verification run

use crate::error::VerifyError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// Owns the temporary directory holding the downloaded archive and its
/// extraction output.
///
/// The directory and everything inside it is removed when the value is
/// dropped, on every exit path. No cleanup step in the orchestrator may
/// reference paths that were never created.
pub struct Staging {
    dir: TempDir,
}

impl Staging {
    pub fn create() -> Result<Self, VerifyError> {
        let dir = tempfile::Builder::new().prefix("relcheck_").tempdir()?;
        debug!(path = %dir.path().display(), "Created staging directory");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Validate the post-extraction layout and return the extracted root.
    ///
    /// After unpacking, the work area must hold exactly two entries: the
    /// downloaded archive file itself and a single extracted directory.
    /// Anything else (multi-root archives, archives that unpack to a bare
    /// file, an archive that disappeared) is an ambiguous layout the
    /// comparison cannot interpret.
    pub fn locate_extracted_root(&self, archive_file: &Path) -> Result<PathBuf, VerifyError> {
        let archive_name = archive_file.file_name().ok_or(VerifyError::MissingArchive)?;

        let mut entries = Vec::new();
        for entry in fs::read_dir(self.path())? {
            entries.push(entry?.path());
        }

        if entries.len() != 2 {
            return Err(VerifyError::AmbiguousLayout {
                found: entries.len(),
            });
        }
        if !entries.iter().any(|p| p.file_name() == Some(archive_name)) {
            return Err(VerifyError::MissingArchive);
        }

        let root = entries
            .into_iter()
            .find(|p| p.file_name() != Some(archive_name))
            .ok_or(VerifyError::AmbiguousLayout { found: 2 })?;

        if !root.is_dir() {
            return Err(VerifyError::ExtractedRootNotADirectory(root));
        }

        debug!(root = %root.display(), "Located extracted root");
        Ok(root)
    }
}
