//! On-disk directory traversal.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::SemicountError;
use crate::Result;

use super::SourceTree;

/// A directory on disk, walked recursively.
///
/// Only regular files strictly beneath the root are listed. Symlinks that
/// resolve to regular files are listed too, but symlinked directories are
/// not descended.
#[derive(Debug, Clone)]
pub struct DirectoryTree {
    root: PathBuf,
}

impl DirectoryTree {
    /// Create a tree rooted at `root`. Nothing is read until [`SourceTree::files`].
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceTree for DirectoryTree {
    type Reader = File;

    fn files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.try_exists()? {
            return Err(SemicountError::PathNotFound(self.root.clone()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "skipping entry that could not be visited");
                    continue;
                }
            };

            let path = entry.path();

            // is_file() follows symlinks
            if path.is_file() {
                files.push(path.to_path_buf());
            }
        }

        // Sort for deterministic output
        files.sort();
        debug!(root = %self.root().display(), files = files.len(), "discovered files");

        Ok(files)
    }

    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }
}
