//! Manifest loading for avatar-stage.
//!
//! The list of files to stage is a TOML document (`avatars.toml`) compiled
//! into the binary. This crate holds its types and parser.
//!
//! # Example
//!
//! ```rust,ignore
//! use avatar_stage_config::builtin_manifest;
//!
//! let manifest = builtin_manifest()?;
//! for task in manifest.tasks() {
//!     println!("{} -> {}", task.source.display(), task.destination.display());
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod toml_loader;
mod types;

pub use error::ConfigError;
pub use toml_loader::{builtin_manifest, parse_manifest};
pub use types::{CopyTask, Manifest};
