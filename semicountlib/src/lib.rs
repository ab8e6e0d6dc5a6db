//! # semicountlib
//!
//! Counts lines of text and occurrences of `;` across every file of a
//! directory tree.
//!
//! ## Overview
//!
//! The counting pipeline has two stages:
//!
//! - **Source discovery** ([`source`]): list every regular file beneath a root,
//!   either on disk ([`DirectoryTree`]) or in memory ([`MemoryTree`]).
//! - **Data collection** ([`data`]): scan each file as UTF-8 text and sum the
//!   per-file counts into a [`CountResult`].
//!
//! A file that cannot be opened or decoded never aborts a run. It contributes
//! nothing to the totals and is reported in [`CountResult::skipped`].
//!
//! ## Example
//!
//! ```rust
//! use semicountlib::{count_directory, count_str};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.txt"), "a;b;c\n").unwrap();
//! fs::create_dir(dir.path().join("nested")).unwrap();
//! fs::write(dir.path().join("nested/b.txt"), "x\ny;\n").unwrap();
//!
//! let result = count_directory(dir.path()).unwrap();
//! assert_eq!(result.total.lines, 3);
//! assert_eq!(result.total.semicolons, 3);
//!
//! // Count a string directly
//! let counts = count_str("int x = 1;");
//! assert_eq!(counts.lines, 1);
//! ```

pub mod data;
pub mod error;
pub mod source;

pub use data::{
    count_directory, count_entry, count_file, count_reader, count_str, count_tree, CountResult,
    FileCounts, FileOutcome, Scanner, SkippedFile, COUNTED_CHAR,
};
pub use error::SemicountError;
pub use source::{DirectoryTree, MemoryTree, SourceTree};

/// Result type for semicountlib operations
pub type Result<T> = std::result::Result<T, SemicountError>;
