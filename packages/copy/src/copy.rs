//! Single-file copy and directory preparation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::CopyError;

/// Ensure a directory exists, creating any missing parents.
///
/// Succeeds without changes if the directory is already present.
///
/// # Errors
///
/// * If the directory cannot be created (permissions, or a non-directory
///   already occupies the path)
pub fn ensure_dir(path: &Path) -> Result<(), CopyError> {
    log::debug!("Ensuring directory: {}", path.display());

    fs::create_dir_all(path).map_err(|e| CopyError::CreateDirError {
        path: path.to_path_buf(),
        io_error: e,
    })
}

/// Copy a single file, overwriting the target if it exists.
///
/// The target's parent directory must already exist. File contents are
/// copied byte-for-byte; metadata is not preserved beyond what the
/// platform copy does on its own.
///
/// A missing or unreadable source is reported before the target is
/// touched, so a failed copy never creates or truncates the target.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `target` - Target file path
///
/// # Errors
///
/// * If the source cannot be read
/// * If the copy operation fails
pub fn overwrite_file(source: &Path, target: &Path) -> Result<(), CopyError> {
    log::debug!(
        "Overwriting file: {} -> {}",
        source.display(),
        target.display()
    );

    fs::metadata(source).map_err(|e| CopyError::FileCopyError {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        io_error: e,
    })?;

    copy_file_with_reflink(source, target)
}

/// Copy a single file, trying reflink first then falling back to regular copy.
fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), CopyError> {
    // Reflink refuses to replace an existing target, which lands us in the fallback
    match reflink_copy::reflink(source, target) {
        Ok(()) => {
            log::trace!("Reflinked {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(e) => {
            log::trace!("Reflink unavailable ({e}), falling back to copy");
            let bytes = fs::copy(source, target).map_err(|e| CopyError::FileCopyError {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            })?;
            log::trace!(
                "Copied {} -> {} ({bytes} bytes)",
                source.display(),
                target.display()
            );
            Ok(())
        }
    }
}
