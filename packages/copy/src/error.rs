//! Error types for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Errors that can occur during copy operations.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Failed to create target directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to copy a file.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    FileCopyError {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },
}

impl CopyError {
    /// The IO error that caused this failure.
    #[must_use]
    pub const fn io_error(&self) -> &std::io::Error {
        match self {
            Self::CreateDirError { io_error, .. } | Self::FileCopyError { io_error, .. } => {
                io_error
            }
        }
    }
}
