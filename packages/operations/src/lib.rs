//! Staging run for avatar-stage.
//!
//! Applies a manifest against a base directory:
//!
//! * Prepare the destination directory (fatal on failure)
//! * Copy each task in order, overwriting existing targets
//! * Record every outcome without stopping on failures
//!
//! # Example
//!
//! ```rust,ignore
//! use avatar_stage_operations::{TaskOutcome, stage};
//!
//! let report = stage(&manifest, &cwd, |record| match &record.outcome {
//!     TaskOutcome::Copied => println!("copied {}", record.task.source.display()),
//!     TaskOutcome::Failed(e) => println!("failed: {e}"),
//! })?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod apply;
mod error;

pub use apply::{StageReport, TaskRecord, prepare_destination, run_tasks, stage};
pub use error::OperationError;

use avatar_stage_copy::CopyError;

/// Outcome of a single copy task.
#[derive(Debug)]
pub enum TaskOutcome {
    /// The file was copied to its destination.
    Copied,
    /// The copy failed; the destination was left as it was.
    Failed(CopyError),
}

impl TaskOutcome {
    /// Whether the task copied successfully.
    #[must_use]
    pub const fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

impl std::fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copied => write!(f, "copied"),
            Self::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}
