//! TOML manifest loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use crate::error::ConfigError;
use crate::types::Manifest;

/// The manifest compiled into the binary.
const BUILTIN_MANIFEST: &str = include_str!("../avatars.toml");

/// Origin label used in errors and logs for the compiled-in manifest.
const BUILTIN_ORIGIN: &str = "<built-in>";

/// Parse a TOML manifest.
///
/// # Arguments
///
/// * `content` - The TOML document
/// * `origin` - Label for error messages
///
/// # Errors
///
/// * If the content cannot be parsed as a manifest
pub fn parse_manifest(content: &str, origin: &str) -> Result<Manifest, ConfigError> {
    log::debug!("Parsing TOML manifest from {origin}");

    let manifest: Manifest =
        toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            origin: origin.to_string(),
            source: e,
        })?;

    log::debug!(
        "Loaded manifest: {:?} ({} sources, {} destinations)",
        manifest.description,
        manifest.sources.len(),
        manifest.destinations.len()
    );

    Ok(manifest)
}

/// Load the manifest compiled into the binary.
///
/// # Errors
///
/// * If the built-in manifest is malformed
pub fn builtin_manifest() -> Result<Manifest, ConfigError> {
    parse_manifest(BUILTIN_MANIFEST, BUILTIN_ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_manifest() {
        let manifest = parse_manifest(
            r#"
description = "Test manifest"
destDir = "public/avatars"
sources = ["/tmp/a.png", "/tmp/b.png"]
destinations = ["public/avatars/avatar1.png", "public/avatars/avatar2.png"]
"#,
            "test",
        )
        .unwrap();

        assert_eq!(manifest.description, "Test manifest");
        assert_eq!(manifest.dest_dir, PathBuf::from("public/avatars"));
        assert_eq!(
            manifest.sources,
            vec![PathBuf::from("/tmp/a.png"), PathBuf::from("/tmp/b.png")]
        );
        assert_eq!(manifest.tasks().len(), 2);
    }

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = parse_manifest(r#"destDir = "out""#, "test").unwrap();

        assert!(manifest.description.is_empty());
        assert!(manifest.sources.is_empty());
        assert!(manifest.tasks().is_empty());
    }

    #[test]
    fn test_parse_manifest_missing_dest_dir() {
        let err = parse_manifest(r#"sources = ["a.png"]"#, "broken.toml").unwrap_err();

        assert!(matches!(err, ConfigError::TomlParseError { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_builtin_manifest() {
        let manifest = builtin_manifest().unwrap();

        assert_eq!(manifest.dest_dir, PathBuf::from("public/avatars"));
        assert!(manifest.sources.iter().all(|p| p.is_absolute()));

        let destinations: Vec<PathBuf> = manifest
            .tasks()
            .into_iter()
            .map(|t| t.destination)
            .collect();
        assert_eq!(
            destinations,
            (1..=4)
                .map(|i| PathBuf::from(format!("public/avatars/avatar{i}.png")))
                .collect::<Vec<_>>()
        );
    }
}
