//! Loader error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a corpus load
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The corpus directory could not be listed
    #[error("Cannot read directory '{}': {source}", path.display())]
    DirectoryUnreadable {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A matching report file could not be read
    #[error("Cannot read report '{}': {source}", path.display())]
    SourceUnreadable {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoaderError {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LoaderError::DirectoryUnreadable { path, .. }
            | LoaderError::SourceUnreadable { path, .. } => Some(path),
            LoaderError::Config(_) => None,
        }
    }
}
