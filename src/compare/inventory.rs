//! Path inventory builder: walks a root and collects relative paths

use crate::error::VerifyError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Normalized inventory of one directory tree.
///
/// Both collections hold paths relative to `root` with `/` as the
/// separator, so inventories built from different roots compare directly.
/// A filesystem walk cannot yield the same path twice, so both collections
/// are duplicate-free by construction. The walk gives no order guarantee;
/// callers must [`sort`](PathInventory::sort) before any pairwise
/// comparison.
#[derive(Debug, Clone)]
pub struct PathInventory {
    pub root: PathBuf,
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl PathInventory {
    /// Sort both collections lexicographically for deterministic,
    /// order-independent comparison.
    pub fn sort(&mut self) {
        self.directories.sort();
        self.files.sort();
    }

    /// Absolute path of an entry given its relative key.
    pub fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(Path::new(key))
    }
}

/// Recursively walk `root` and build its [`PathInventory`].
///
/// Fails if `root` does not exist or is not a directory. Symlinks are not
/// followed; entries that are neither files nor directories are skipped.
pub fn build_inventory(root: &Path) -> Result<PathInventory, VerifyError> {
    if !root.is_dir() {
        return Err(VerifyError::InvalidRoot(root.to_path_buf()));
    }

    let mut directories = Vec::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| VerifyError::InvalidRoot(root.to_path_buf()))?;
        let key = relative_key(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            directories.push(key);
        } else if file_type.is_file() {
            files.push(key);
        }
    }

    debug!(
        root = %root.display(),
        directories = directories.len(),
        files = files.len(),
        "Built path inventory"
    );

    Ok(PathInventory {
        root: root.to_path_buf(),
        directories,
        files,
    })
}

/// Join path components with `/` so keys are separator-normalized across
/// platforms and trees.
fn relative_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
