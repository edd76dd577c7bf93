use assert_cmd::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Builds an `lcp` invocation isolated to `root` via env overrides.
fn lcp(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lcp").expect("binary exists");
    cmd.env("LCP_STAGING_DIR", root.join("staging"))
        .env("LCP_CONFIG_PATH", root.join("config.toml"))
        .current_dir(root);
    cmd
}

#[test]
fn list_before_copy_fails() {
    let root = tempdir().expect("create tmp dir");

    lcp(root.path())
        .arg("-l")
        .assert()
        .failure()
        .stderr(contains("nothing to list"));
}

#[test]
fn list_prints_staged_file_paths() {
    let root = tempdir().expect("create tmp dir");
    fs::write(root.path().join("README.md"), "readme").expect("write readme");
    fs::create_dir(root.path().join("notes")).expect("create notes dir");
    fs::write(root.path().join("notes/a.txt"), "a").expect("write nested file");

    lcp(root.path())
        .args(["-c", "README.md", "notes"])
        .assert()
        .success();

    lcp(root.path())
        .arg("-l")
        .assert()
        .success()
        .stdout(contains("README.md"))
        .stdout(contains("a.txt"));
}

#[test]
fn list_does_not_print_directories() {
    let root = tempdir().expect("create tmp dir");
    fs::create_dir(root.path().join("notes")).expect("create notes dir");
    fs::write(root.path().join("notes/a.txt"), "a").expect("write nested file");

    lcp(root.path()).args(["-c", "notes"]).assert().success();

    let output = lcp(root.path()).arg("-l").output().expect("run list");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    for line in stdout.lines() {
        assert!(
            line.ends_with("a.txt"),
            "unexpected list entry: {line}"
        );
    }
}

#[test]
fn clear_succeeds_when_nothing_staged() {
    let root = tempdir().expect("create tmp dir");

    lcp(root.path())
        .arg("-k")
        .assert()
        .success()
        .stderr(contains("cleared"));
}

#[test]
fn clear_removes_staged_set() {
    let root = tempdir().expect("create tmp dir");
    fs::write(root.path().join("file.txt"), "staged").expect("write source");

    lcp(root.path()).args(["-c", "file.txt"]).assert().success();
    assert!(root.path().join("staging").is_dir());

    lcp(root.path()).arg("-k").assert().success();
    assert!(!root.path().join("staging").exists(), "staging dir survived clear");

    lcp(root.path())
        .arg("-l")
        .assert()
        .failure()
        .stderr(contains("nothing to list"));
}

#[test]
fn quiet_suppresses_clear_confirmation() {
    let root = tempdir().expect("create tmp dir");

    lcp(root.path())
        .args(["-k", "-q"])
        .assert()
        .success()
        .stderr("");
}
