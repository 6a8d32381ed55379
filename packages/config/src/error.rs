//! Error types for manifest loading.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

/// Errors that can occur during manifest loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse TOML manifest.
    #[error("Failed to parse TOML manifest {origin}: {source}")]
    TomlParseError {
        /// Where the manifest came from (file name or `<built-in>`).
        origin: String,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}
