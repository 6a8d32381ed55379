//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::path::Path;

use avatar_stage_operations::{TaskOutcome, TaskRecord};
use colored::Colorize;

/// Format a successful copy.
#[must_use]
pub fn format_copied(source: &Path, destination: &Path) -> String {
    format!(
        "{} Copied {} to {}",
        "✓".green(),
        source.display(),
        destination.display().to_string().cyan()
    )
}

/// Format a failed copy.
#[must_use]
pub fn format_copy_failed(source: &Path, detail: &str) -> String {
    format!(
        "{} Error copying {}: {}",
        "✗".red(),
        source.display(),
        detail.dimmed()
    )
}

/// Format the console line for a finished task.
#[must_use]
pub fn format_record(record: &TaskRecord) -> String {
    match &record.outcome {
        TaskOutcome::Copied => format_copied(&record.task.source, &record.task.destination),
        TaskOutcome::Failed(e) => {
            format_copy_failed(&record.task.source, &e.io_error().to_string())
        }
    }
}

/// Print the console line for a finished task.
pub fn print_record(record: &TaskRecord) {
    println!("{}", format_record(record));
    // Flush to ensure output appears immediately
    let _ = std::io::stdout().flush();
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
