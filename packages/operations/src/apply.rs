//! Manifest application: prepare the destination, then copy each task.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use avatar_stage_config::{CopyTask, Manifest};
use avatar_stage_copy::{ensure_dir, overwrite_file};

use crate::TaskOutcome;
use crate::error::OperationError;

/// Record of a single copy task.
#[derive(Debug)]
pub struct TaskRecord {
    /// Position of the task in the manifest (0-based).
    pub index: usize,
    /// The task as written in the manifest.
    pub task: CopyTask,
    /// What happened.
    pub outcome: TaskOutcome,
}

/// Result of a staging run, one record per task in manifest order.
#[derive(Debug, Default)]
pub struct StageReport {
    /// Per-task records.
    pub records: Vec<TaskRecord>,
}

impl StageReport {
    /// Number of tasks that were copied.
    #[must_use]
    pub fn copied(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_copied()).count()
    }

    /// Number of tasks that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.records.len() - self.copied()
    }

    /// Whether any task failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// Ensure the destination directory exists.
///
/// `dest_dir` is resolved against `base` unless it is absolute.
///
/// # Errors
///
/// * If the directory cannot be created
pub fn prepare_destination(base: &Path, dest_dir: &Path) -> Result<PathBuf, OperationError> {
    let path = base.join(dest_dir);

    ensure_dir(&path).map_err(|e| OperationError::PrepareError {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}

/// Copy every task in order, recording each outcome.
///
/// A failed copy is recorded and the loop moves on to the next task.
/// `on_record` is called after each task, in order, so output can be
/// streamed while the run is in progress.
pub fn run_tasks<F>(base: &Path, tasks: &[CopyTask], mut on_record: F) -> StageReport
where
    F: FnMut(&TaskRecord),
{
    let mut report = StageReport::default();

    for (index, task) in tasks.iter().enumerate() {
        let (source, destination) = task.resolve(base);

        let outcome = match overwrite_file(&source, &destination) {
            Ok(()) => TaskOutcome::Copied,
            Err(e) => TaskOutcome::Failed(e),
        };
        log::debug!("Task {index} {}: {outcome}", source.display());

        let record = TaskRecord {
            index,
            task: task.clone(),
            outcome,
        };
        on_record(&record);
        report.records.push(record);
    }

    report
}

/// Apply a manifest: prepare its destination directory, then run its tasks.
///
/// # Arguments
///
/// * `manifest` - The manifest to apply
/// * `base` - Directory that relative manifest paths are resolved against
/// * `on_record` - Called after each task with its record
///
/// # Errors
///
/// * If the destination directory cannot be prepared; no task is attempted
pub fn stage<F>(
    manifest: &Manifest,
    base: &Path,
    on_record: F,
) -> Result<StageReport, OperationError>
where
    F: FnMut(&TaskRecord),
{
    let dest_dir = prepare_destination(base, &manifest.dest_dir)?;
    log::info!("Staging into {}", dest_dir.display());

    let tasks = manifest.tasks();
    let report = run_tasks(base, &tasks, on_record);

    log::info!(
        "Staged {} of {} files ({} failed)",
        report.copied(),
        tasks.len(),
        report.failed()
    );

    Ok(report)
}
