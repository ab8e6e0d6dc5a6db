//! High-level counting API.
//!
//! This module provides the main entry points for counting lines and
//! semicolons, from a single string up to a whole directory tree.

use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::SemicountError;
use crate::source::{DirectoryTree, SourceTree};
use crate::Result;

use super::scanner::Scanner;
use super::stats::{CountResult, FileCounts, FileOutcome, SkippedFile};

/// Count every file in a source tree.
///
/// This is the core of a run. It:
/// 1. Lists the files of the tree
/// 2. Counts each file independently
/// 3. Sums successful counts and collects the files it had to skip
///
/// Only a failure to list the tree is returned as an error. A file that
/// cannot be opened or decoded lands in [`CountResult::skipped`] and adds
/// nothing to the totals.
///
/// # Example
///
/// ```rust
/// use semicountlib::{count_tree, MemoryTree};
///
/// let tree = MemoryTree::new()
///     .file("a.txt", "a;b;c\n")
///     .file("blob.bin", [0xffu8, 0xfe, 0x00]);
///
/// let result = count_tree(&tree).unwrap();
/// assert_eq!(result.total.lines, 1);
/// assert_eq!(result.total.semicolons, 2);
/// assert_eq!(result.skipped.len(), 1);
/// ```
pub fn count_tree<S: SourceTree>(tree: &S) -> Result<CountResult> {
    let files = tree.files()?;

    let mut result = CountResult::new();

    for path in &files {
        let outcome = count_entry(tree, path);
        match &outcome {
            Ok(counts) => debug!(
                path = %path.display(),
                lines = counts.lines,
                semicolons = counts.semicolons,
                "counted file"
            ),
            Err(skipped) => debug!(
                path = %path.display(),
                reason = %skipped.reason,
                "skipped file"
            ),
        }
        result.record(outcome);
    }

    Ok(result)
}

/// Count one file of a source tree.
///
/// Open and decode failures become a [`SkippedFile`] carrying the path and
/// the underlying error message.
pub fn count_entry<S: SourceTree>(tree: &S, path: &Path) -> FileOutcome {
    tree.open(path)
        .and_then(count_reader)
        .map_err(|e| SkippedFile::new(path.to_path_buf(), e.to_string()))
}

/// Count every file beneath a directory on disk.
///
/// # Example
///
/// ```rust
/// use semicountlib::count_directory;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("main.c"), "int x;\nint y;\n").unwrap();
///
/// let result = count_directory(dir.path()).unwrap();
/// assert_eq!(result.file_count, 1);
/// assert_eq!(result.total.semicolons, 2);
/// ```
pub fn count_directory(path: impl AsRef<Path>) -> Result<CountResult> {
    count_tree(&DirectoryTree::new(path))
}

/// Count a single file on disk.
///
/// Unlike [`count_tree`], failures are returned as errors.
///
/// # Example
///
/// ```rust
/// use semicountlib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let file_path = dir.path().join("b.txt");
/// fs::write(&file_path, "x\ny;\n").unwrap();
///
/// let counts = count_file(&file_path).unwrap();
/// assert_eq!(counts.lines, 2);
/// assert_eq!(counts.semicolons, 1);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<FileCounts> {
    let path = path.as_ref();
    Scanner::open(path)?
        .scan()
        .map_err(|e| SemicountError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Count the UTF-8 text read from any reader.
pub fn count_reader<R: Read>(reader: R) -> io::Result<FileCounts> {
    Scanner::new(reader).scan()
}

/// Count a string of text.
///
/// # Example
///
/// ```rust
/// use semicountlib::count_str;
///
/// let counts = count_str("for (;;) {\n}");
/// assert_eq!(counts.lines, 2);
/// assert_eq!(counts.semicolons, 2);
/// ```
pub fn count_str(source: &str) -> FileCounts {
    // Reading from a &str can neither fail nor yield invalid UTF-8
    count_reader(source.as_bytes()).unwrap_or_default()
}
