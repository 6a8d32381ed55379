//! Overwriting file copy with a copy-on-write fast path.
//!
//! This crate provides the two filesystem primitives avatar staging needs:
//!
//! * [`ensure_dir`] creates a directory and any missing parents, succeeding
//!   when it already exists
//! * [`overwrite_file`] copies a single file byte-for-byte, replacing any
//!   existing target, trying a reflink (APFS, Btrfs, `ReFS`) before a
//!   regular copy
//!
//! # Example
//!
//! ```rust,ignore
//! use avatar_stage_copy::{ensure_dir, overwrite_file};
//!
//! ensure_dir(Path::new("public/avatars"))?;
//! overwrite_file(source, Path::new("public/avatars/avatar1.png"))?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;

pub use copy::{ensure_dir, overwrite_file};
pub use error::CopyError;
