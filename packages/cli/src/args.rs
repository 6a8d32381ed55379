//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;

/// CLI arguments for avatar-stage.
#[derive(Debug, Parser)]
#[command(
    name = "avatar-stage",
    about = "Copy the partner avatars into public/avatars of the current project",
    version
)]
pub struct Args {
    /// Exit with a non-zero status if any image fails to copy.
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Determine the exit code for a finished run.
    ///
    /// Copy failures only affect the exit code with `--strict`.
    #[must_use]
    pub fn exit_code(&self, has_failures: bool) -> i32 {
        i32::from(self.strict && has_failures)
    }
}
