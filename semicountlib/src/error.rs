//! Error types for semicountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting
#[derive(Error, Debug)]
pub enum SemicountError {
    /// Failed to open or decode a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Root path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
