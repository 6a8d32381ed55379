//! Error types for staging operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use avatar_stage_copy::CopyError;
use thiserror::Error;

/// Errors that abort a staging run.
///
/// Individual copy failures are not errors at this level; they are
/// recorded in the [`StageReport`](crate::StageReport).
#[derive(Debug, Error)]
pub enum OperationError {
    /// The destination directory could not be prepared.
    #[error("Cannot stage into {}: {source}", path.display())]
    PrepareError {
        /// The destination directory.
        path: PathBuf,
        /// The underlying copy module error.
        #[source]
        source: CopyError,
    },
}
