//! Source discovery: find files to count.
//!
//! This module handles the first stage of the pipeline - listing the files
//! beneath a root and opening them for reading. Counting code only talks to
//! the [`SourceTree`] trait, so the same aggregation runs against:
//!
//! - **[`DirectoryTree`]**: a real directory, walked recursively
//! - **[`MemoryTree`]**: an in-memory set of files, for tests
//!
//! ## Example
//!
//! ```rust
//! use semicountlib::source::{MemoryTree, SourceTree};
//!
//! let tree = MemoryTree::new().file("src/main.c", "int main() { return 0; }\n");
//! assert_eq!(tree.files().unwrap().len(), 1);
//! ```

pub mod directory;
pub mod memory;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::Result;

pub use directory::DirectoryTree;
pub use memory::MemoryTree;

/// A set of files that can be listed and read.
pub trait SourceTree {
    /// Reader returned for a single file.
    type Reader: Read;

    /// List every regular file in the tree.
    ///
    /// Failing here is fatal for a run: nothing can be counted without a
    /// file list.
    fn files(&self) -> Result<Vec<PathBuf>>;

    /// Open one listed file for reading.
    fn open(&self, path: &Path) -> io::Result<Self::Reader>;
}
