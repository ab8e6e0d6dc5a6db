//! Integration tests for the semicount CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_semicount(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_semicount"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_semicount(temp.path(), &["--help"]);

    assert!(success);
    assert!(stdout.contains("semicount"));
    assert!(stdout.contains("--verbose"));
}

#[test]
fn test_cli_version() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_semicount(temp.path(), &["--version"]);

    assert!(success);
    assert!(stdout.contains("semicount"));
}

#[test]
fn test_counts_src_tree() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"a;b;c\n");
    write_file(&temp.path().join("src/nested/b.txt"), b"x\ny;\n");
    // Outside src/, never counted
    write_file(&temp.path().join("other.txt"), b";;;;\n");

    let (stdout, stderr, success) = run_semicount(temp.path(), &[]);

    assert!(success);
    assert_eq!(stdout, "LOC: 3\nSEMICOLONS: 3\n");
    assert!(stderr.is_empty());
}

#[test]
fn test_empty_src_tree() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("src/empty")).unwrap();

    let (stdout, _, success) = run_semicount(temp.path(), &[]);

    assert!(success);
    assert_eq!(stdout, "LOC: 0\nSEMICOLONS: 0\n");
}

#[test]
fn test_undecodable_file_is_skipped() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"a;b;c\n");
    write_file(&temp.path().join("src/blob.bin"), &[b';', 0xff, 0xfe, b'\n']);

    let (stdout, stderr, success) = run_semicount(temp.path(), &[]);

    assert!(success);
    assert_eq!(stdout, "LOC: 1\nSEMICOLONS: 2\n");
    assert_eq!(
        stderr,
        "Skipping src/blob.bin: invalid UTF-8 sequence at byte 1\n"
    );
}

#[test]
fn test_truncated_file_is_skipped() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"a;\n");
    write_file(&temp.path().join("src/trunc.txt"), b"x\xc3");

    let (stdout, stderr, success) = run_semicount(temp.path(), &[]);

    assert!(success);
    assert_eq!(stdout, "LOC: 1\nSEMICOLONS: 1\n");
    assert_eq!(
        stderr,
        "Skipping src/trunc.txt: incomplete UTF-8 sequence at byte 1\n"
    );
}

#[test]
fn test_missing_src_fails() {
    let temp = tempdir().unwrap();

    let (stdout, stderr, success) = run_semicount(temp.path(), &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error: path does not exist: src"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"a;b;c\n");

    let (stdout, stderr, success) = run_semicount(temp.path(), &["--verbose"]);

    assert!(success);
    assert_eq!(stdout, "LOC: 1\nSEMICOLONS: 2\n");
    assert!(stderr.contains("counted file"));
}

#[test]
fn test_closed_stdout_still_succeeds() {
    use std::process::Stdio;

    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"a;b;c\n");

    let mut child = Command::new(env!("CARGO_BIN_EXE_semicount"))
        .current_dir(temp.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).is_empty());
}
