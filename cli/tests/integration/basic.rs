//! Basic functionality integration tests for the acp CLI.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_basic_file_copy() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "hello world").unwrap();

    let mut cmd = cargo_bin_cmd!("acp");
    cmd.arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("File copied successfully!"));

    assert!(dst.path().join("test.txt").exists());
    assert_eq!(
        fs::read_to_string(dst.path().join("test.txt")).unwrap(),
        "hello world"
    );
}

/// Round-trip fidelity around the 4096-byte buffer boundary and beyond.
#[rstest]
#[case(0)]
#[case(1)]
#[case(4095)]
#[case(4096)]
#[case(4097)]
#[case(100_000)]
fn test_round_trip_fidelity(#[case] size: usize) {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let data: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
    fs::write(src.path().join("data.bin"), &data).unwrap();

    let mut cmd = cargo_bin_cmd!("acp");
    cmd.arg(src.path().join("data.bin"))
        .arg(dst.path().join("data.bin"))
        .assert()
        .success();

    assert_eq!(fs::read(dst.path().join("data.bin")).unwrap(), data);
}

/// A fresh destination must not trigger a prompt. Stdin is empty here, so
/// any attempted confirmation would hit EOF and fail the run.
#[test]
fn test_no_prompt_when_destination_absent() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "content").unwrap();

    let mut cmd = cargo_bin_cmd!("acp");
    cmd.arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrite?").not());
}

#[cfg(unix)]
#[test]
fn test_new_destination_has_mode_0644() {
    use std::os::unix::fs::PermissionsExt;

    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "content").unwrap();

    let mut cmd = cargo_bin_cmd!("acp");
    cmd.arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .assert()
        .success();

    let mode = fs::metadata(dst.path().join("test.txt"))
        .unwrap()
        .permissions()
        .mode();
    // 0644 minus whatever the process umask removes
    assert_eq!(mode & 0o644, mode & 0o777);
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo_bin_cmd!("acp");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("acp"))
        .stdout(predicate::str::contains("SOURCE"));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("acp");
    cmd.arg("--version").assert().success();
}
