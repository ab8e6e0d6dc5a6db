//! Data collection: scan files and collect counts.
//!
//! This module handles the second stage of the pipeline - reading each file
//! as text and summing what it contains. It provides:
//!
//! - **Scanning**: a character scanner that counts lines and semicolons
//! - **Statistics**: result records (`FileCounts`, `SkippedFile`, `CountResult`)
//! - **Counting**: high-level API (`count_tree`, `count_directory`, `count_file`)
//!
//! ## Example
//!
//! ```rust
//! use semicountlib::data::count_tree;
//! use semicountlib::source::MemoryTree;
//!
//! let tree = MemoryTree::new()
//!     .file("a.txt", "a;b;c\n")
//!     .file("b.txt", "x\ny;\n");
//!
//! let result = count_tree(&tree).unwrap();
//! assert_eq!(result.total.lines, 3);
//! assert_eq!(result.total.semicolons, 3);
//! ```

pub mod counter;
pub mod scanner;
pub mod stats;

pub use counter::{
    count_directory, count_entry, count_file, count_reader, count_str, count_tree,
};
pub use scanner::{Scanner, COUNTED_CHAR};
pub use stats::{CountResult, FileCounts, FileOutcome, SkippedFile};
