use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use avatar_stage_config::builtin_manifest;
use tempfile::TempDir;

fn run_in(dir: &Path, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_avatar-stage"))
        .args(extra_args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

/// The built-in sources only exist on the machine the avatars were made on.
fn builtin_sources_missing() -> bool {
    builtin_manifest()
        .unwrap()
        .sources
        .iter()
        .all(|p| !p.exists())
}

#[test]
fn test_missing_sources_exit_zero() {
    if !builtin_sources_missing() {
        return;
    }

    let project = TempDir::new().unwrap();
    let output = run_in(project.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(project.path().join("public/avatars").is_dir());
    for i in 1..=4 {
        assert!(
            !project
                .path()
                .join(format!("public/avatars/avatar{i}.png"))
                .exists()
        );
    }

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);

    let sources = builtin_manifest().unwrap().sources;
    for (line, source) in lines.iter().zip(&sources) {
        assert!(line.contains("Error copying"), "unexpected line: {line}");
        assert!(line.contains(&source.display().to_string()));
    }
}

#[test]
fn test_missing_sources_strict_exit_one() {
    if !builtin_sources_missing() {
        return;
    }

    let project = TempDir::new().unwrap();
    let output = run_in(project.path(), &["--strict"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(project.path().join("public/avatars").is_dir());
}

#[test]
fn test_existing_destination_is_reused() {
    if !builtin_sources_missing() {
        return;
    }

    let project = TempDir::new().unwrap();
    let avatars = project.path().join("public/avatars");
    fs::create_dir_all(&avatars).unwrap();
    fs::write(avatars.join("avatar1.png"), "from an earlier run").unwrap();

    let first = run_in(project.path(), &[]);
    let second = run_in(project.path(), &[]);

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        fs::read_to_string(avatars.join("avatar1.png")).unwrap(),
        "from an earlier run"
    );
}

#[test]
fn test_unpreparable_destination_is_fatal() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("public"), "not a directory").unwrap();

    let output = run_in(project.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("public"));
}
