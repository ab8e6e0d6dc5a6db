//! In-memory source tree.

use std::collections::BTreeMap;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use crate::Result;

use super::SourceTree;

#[derive(Debug, Clone)]
enum Entry {
    Contents(Vec<u8>),
    Unreadable(io::ErrorKind, String),
}

/// A fixed set of files held in memory.
///
/// Lets the counting pipeline run without touching the filesystem. Files can
/// also be marked unreadable to exercise the skip path.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    entries: BTreeMap<PathBuf, Entry>,
}

impl MemoryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given raw contents.
    pub fn file(mut self, path: impl Into<PathBuf>, contents: impl AsRef<[u8]>) -> Self {
        self.entries
            .insert(path.into(), Entry::Contents(contents.as_ref().to_vec()));
        self
    }

    /// Add a file that fails to open with the given error.
    pub fn unreadable(
        mut self,
        path: impl Into<PathBuf>,
        kind: io::ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        self.entries
            .insert(path.into(), Entry::Unreadable(kind, message.into()));
        self
    }
}

impl SourceTree for MemoryTree {
    type Reader = Cursor<Vec<u8>>;

    fn files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn open(&self, path: &Path) -> io::Result<Self::Reader> {
        match self.entries.get(path) {
            Some(Entry::Contents(bytes)) => Ok(Cursor::new(bytes.clone())),
            Some(Entry::Unreadable(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )),
        }
    }
}
