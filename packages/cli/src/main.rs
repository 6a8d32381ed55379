//! avatar-stage CLI entry point.
//!
//! Copies the partner avatar images listed in the built-in manifest into
//! `public/avatars/` of the current directory.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;

use std::env;

use clap::Parser;

use args::Args;
use avatar_stage_config::builtin_manifest;
use avatar_stage_operations::stage;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    match run() {
        Ok(has_failures) => std::process::exit(args.exit_code(has_failures)),
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Main application logic.
///
/// Returns whether any copy failed.
fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    let manifest = builtin_manifest()?;

    log::debug!("Working directory: {}", cwd.display());

    let report = stage(&manifest, &cwd, output::print_record)?;

    Ok(report.has_failures())
}
