//! Result records for a counting run.
//!
//! A run produces one [`FileOutcome`] per file: either the file's
//! [`FileCounts`] or a [`SkippedFile`] explaining why it was not counted.
//! [`CountResult`] folds those outcomes into running totals.

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Line and semicolon counts for a file or a whole tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    /// Lines of text, including a trailing unterminated line
    pub lines: u64,
    /// Occurrences of `;`
    pub semicolons: u64,
}

impl FileCounts {
    /// Create counts from explicit values.
    pub fn new(lines: u64, semicolons: u64) -> Self {
        Self { lines, semicolons }
    }
}

impl Add for FileCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            lines: self.lines + other.lines,
            semicolons: self.semicolons + other.semicolons,
        }
    }
}

impl AddAssign for FileCounts {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.semicolons += other.semicolons;
    }
}

impl Sum for FileCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// A file that could not be counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path to the file.
    pub path: PathBuf,
    /// Why it was skipped (the underlying error message).
    pub reason: String,
}

impl SkippedFile {
    /// Create a new skipped-file record.
    pub fn new(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping {}: {}", self.path.display(), self.reason)
    }
}

/// Outcome of counting one file.
pub type FileOutcome = std::result::Result<FileCounts, SkippedFile>;

/// Result of counting every file in a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountResult {
    /// Number of files counted successfully
    pub file_count: usize,
    /// Totals across all counted files
    pub total: FileCounts,
    /// Files that could not be counted, in traversal order
    pub skipped: Vec<SkippedFile>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's outcome into the result.
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            Ok(counts) => {
                self.total += counts;
                self.file_count += 1;
            }
            Err(skipped) => self.skipped.push(skipped),
        }
    }
}

impl FromIterator<FileOutcome> for CountResult {
    fn from_iter<I: IntoIterator<Item = FileOutcome>>(iter: I) -> Self {
        let mut result = Self::new();
        for outcome in iter {
            result.record(outcome);
        }
        result
    }
}
