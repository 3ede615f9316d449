//! Tests for error handling, suggestions and exit codes.

use std::fs;

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn skel(temp: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("skel");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("xdg"))
        .env_remove("SKEL_SKELETONS__LOCAL_PATH");
    cmd
}

#[test]
fn test_unknown_skeleton_is_not_found() {
    let temp = TempDir::new().unwrap();
    skel(&temp)
        .args(["new", "grpc", "github.com/u/widget", "--no-module-tool"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("skeleton 'grpc' not found"))
        .stderr(predicate::str::contains("skel list"));
}

#[test]
fn test_missing_identifier_is_user_error() {
    let temp = TempDir::new().unwrap();
    skel(&temp)
        .args(["new", "rest", "--no-module-tool"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_extra_identifier_is_user_error() {
    let temp = TempDir::new().unwrap();
    skel(&temp)
        .args(["new", "rest", "a.com/x", "b.com/y", "--no-module-tool"])
        .assert()
        .code(2);
    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn test_invalid_identifier_is_user_error() {
    let temp = TempDir::new().unwrap();
    skel(&temp)
        .args(["new", "rest", "not an identifier", "--no-module-tool"])
        .assert()
        .code(2);
}

#[test]
fn test_adapt_without_manifest_writes_nothing() {
    let temp = TempDir::new().unwrap();
    skel(&temp)
        .args(["new", "app", "--no-module-tool"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("go.mod"));

    assert!(!temp.path().join("note.go").exists());
}

#[test]
fn test_adapt_rejects_identifier_argument() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module github.com/u/widget\n").unwrap();
    skel(&temp)
        .args(["new", "app", "github.com/u/other", "--no-module-tool"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    skel(&temp)
        .args(["config", "get", "tools.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_explicit_config_file() {
    let temp = TempDir::new().unwrap();
    skel(&temp)
        .args(["--config", "absent.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_missing_skeleton_directory_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    skel(&temp)
        .env("SKEL_SKELETONS__LOCAL_PATH", temp.path().join("nowhere"))
        .arg("list")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("skeleton directory not found"));
}

#[test]
fn test_bad_flag_exits_two() {
    let temp = TempDir::new().unwrap();
    skel(&temp).args(["list", "--bogus"]).assert().code(2);
}
