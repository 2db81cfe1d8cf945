//! Integration tests for the list and completions commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the rulesync binary, rooted at `home`.
fn rulesync_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rulesync").expect("Failed to find rulesync binary");
    cmd.env("RULESYNC_HOME", home);
    cmd
}

// ============================================================================
// list Command Tests
// ============================================================================

#[test]
fn test_list_empty_registry_hints_at_init() {
    let home = TempDir::new().unwrap();
    rulesync_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects registered"))
        .stdout(predicate::str::contains("rulesync init"));
}

#[test]
fn test_list_json_empty_registry_has_shape() {
    let home = TempDir::new().unwrap();
    rulesync_cmd(home.path())
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"projects\""))
        .stdout(predicate::str::contains("\"total\": 0"));
}

#[test]
fn test_list_help() {
    let home = TempDir::new().unwrap();
    rulesync_cmd(home.path())
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List"))
        .stdout(predicate::str::contains("--json"));
}

// ============================================================================
// completions Command Tests
// ============================================================================

#[test]
fn test_completions_bash_mentions_subcommands() {
    let home = TempDir::new().unwrap();
    rulesync_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rulesync"))
        .stdout(predicate::str::contains("merge"));
}

#[test]
fn test_completions_does_not_create_app_directories() {
    let home = TempDir::new().unwrap();
    rulesync_cmd(home.path())
        .args(["completions", "zsh"])
        .assert()
        .success();

    assert!(
        !home.path().join("config").exists(),
        "completions must not touch the installation"
    );
}

// ============================================================================
// top-level surface
// ============================================================================

#[test]
fn test_no_command_prints_hint() {
    let home = TempDir::new().unwrap();
    rulesync_cmd(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rulesync --help"));
}

#[test]
fn test_help_lists_every_command() {
    let home = TempDir::new().unwrap();
    let mut assert = rulesync_cmd(home.path()).arg("--help").assert().success();

    for command in ["init", "merge", "sync", "clean", "list", "completions"] {
        assert = assert.stdout(predicate::str::contains(command));
    }
}
