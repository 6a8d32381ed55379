//! Manifest types for avatar-stage.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One file to stage: copy `source` to `destination`.
///
/// Identity is the position in the manifest; nothing prevents two tasks
/// from naming the same paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTask {
    /// Source file path, as written in the manifest.
    pub source: PathBuf,
    /// Destination file path, as written in the manifest.
    pub destination: PathBuf,
}

impl CopyTask {
    /// Create a new task.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Resolve both paths against `base`.
    ///
    /// Absolute paths are returned unchanged.
    #[must_use]
    pub fn resolve(&self, base: &Path) -> (PathBuf, PathBuf) {
        (base.join(&self.source), base.join(&self.destination))
    }
}

/// The staging manifest: which files go where.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Human-readable description of this manifest.
    #[serde(default)]
    pub description: String,

    /// Directory that must exist before any file is copied.
    pub dest_dir: PathBuf,

    /// Source files, paired by position with `destinations`.
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    /// Destination files, paired by position with `sources`.
    #[serde(default)]
    pub destinations: Vec<PathBuf>,
}

impl Manifest {
    /// Pair sources with destinations in order.
    ///
    /// If the two lists differ in length the extra entries are dropped.
    #[must_use]
    pub fn tasks(&self) -> Vec<CopyTask> {
        if self.sources.len() != self.destinations.len() {
            log::warn!(
                "Manifest has {} sources but {} destinations, ignoring the extra entries",
                self.sources.len(),
                self.destinations.len()
            );
        }

        self.sources
            .iter()
            .zip(&self.destinations)
            .map(|(source, destination)| CopyTask::new(source, destination))
            .collect()
    }
}
