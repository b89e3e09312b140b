//! Integration tests for the `remove` subcommand.

mod common;

use common::{
    cmd, encrypted_pdf, encrypted_pdf_with_raw_password, expected_contents, is_encrypted,
    plain_page_contents, plain_pdf, write_pdf,
};
use predicates::prelude::*;

#[test]
fn removes_password_and_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(dir.path(), "secret.pdf", &encrypted_pdf("hunter2", 2));

    cmd()
        .args(["remove", path.to_str().unwrap(), "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Password removed: {}",
            path.display()
        )))
        .stdout(predicate::str::contains("All files processed!"))
        .stderr(predicate::str::contains("no backup is kept"));

    assert!(!is_encrypted(&path));
    assert_eq!(plain_page_contents(&path), expected_contents(2));
}

#[test]
fn wrong_password_still_exits_zero_and_leaves_file() {
    let dir = tempfile::tempdir().unwrap();
    let original = encrypted_pdf("right", 1);
    let path = write_pdf(dir.path(), "locked.pdf", &original);

    cmd()
        .args(["remove", path.to_str().unwrap(), "--password", "wrong"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Incorrect password for file: {}",
            path.display()
        )))
        .stdout(predicate::str::contains("All files processed!"));

    assert_eq!(std::fs::read(&path).unwrap(), original);
}

#[test]
fn mixed_batch_reports_each_file_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &encrypted_pdf("x", 1));
    let b = write_pdf(dir.path(), "b.pdf", &encrypted_pdf("y", 1));
    let c = write_pdf(dir.path(), "c.pdf", &plain_pdf(1));
    let broken = write_pdf(dir.path(), "d.pdf", b"not a pdf");

    let output = cmd()
        .args([
            "remove",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            c.to_str().unwrap(),
            broken.to_str().unwrap(),
            "--password",
            "x",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], format!("Password removed: {}", a.display()));
    assert_eq!(lines[1], format!("Incorrect password for file: {}", b.display()));
    assert_eq!(lines[2], format!("Password removed: {}", c.display()));
    assert!(lines[3].starts_with(&format!("An error occurred with file {}: ", broken.display())));
    assert_eq!(
        lines[4],
        "4 file(s): 2 unlocked, 1 incorrect password, 1 error(s)"
    );
    assert_eq!(lines[5], "All files processed!");

    assert!(!is_encrypted(&a));
    assert_eq!(plain_page_contents(&a), expected_contents(1));
    assert!(is_encrypted(&b));
    assert_eq!(plain_page_contents(&c), expected_contents(1));
}

#[test]
fn non_pdf_paths_are_skipped_and_duplicates_collapsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(dir.path(), "UPPER.PDF", &encrypted_pdf("pw", 1));
    let txt = dir.path().join("notes.txt");
    std::fs::write(&txt, "hello").unwrap();

    cmd()
        .args([
            "remove",
            path.to_str().unwrap(),
            txt.to_str().unwrap(),
            path.to_str().unwrap(),
            "--password",
            "pw",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: skipping non-PDF file"))
        .stdout(predicate::str::contains("1 file(s): 1 unlocked"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn password_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(dir.path(), "stdin.pdf", &encrypted_pdf("from stdin", 1));

    cmd()
        .args(["remove", path.to_str().unwrap(), "--password-stdin"])
        .write_stdin("from stdin\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password removed:"));

    assert!(!is_encrypted(&path));
    assert_eq!(plain_page_contents(&path), expected_contents(1));
}

#[test]
fn non_ascii_password_argument() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(
        dir.path(),
        "accent.pdf",
        &encrypted_pdf_with_raw_password(&[0xE9], 3),
    );

    cmd()
        .args(["remove", path.to_str().unwrap(), "--password", "é"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s): 1 unlocked"));

    assert_eq!(plain_page_contents(&path), expected_contents(3));
}

#[test]
fn json_output_shape() {
    let dir = tempfile::tempdir().unwrap();
    let ok = write_pdf(dir.path(), "ok.pdf", &encrypted_pdf("pw", 1));
    let bad = write_pdf(dir.path(), "bad.pdf", &encrypted_pdf("other", 1));
    let missing = dir.path().join("missing.pdf");

    let output = cmd()
        .args([
            "remove",
            ok.to_str().unwrap(),
            bad.to_str().unwrap(),
            missing.to_str().unwrap(),
            "--password",
            "pw",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);
    assert_eq!(files[0]["path"], ok.display().to_string());
    assert_eq!(files[0]["status"], "success");
    assert_eq!(files[1]["status"], "wrong_password");
    assert_eq!(files[2]["status"], "error");
    assert!(files[2]["message"].as_str().unwrap().contains("I/O error"));
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["succeeded"], 1);
    assert_eq!(json["summary"]["wrong_password"], 1);
    assert_eq!(json["summary"]["failed"], 1);
    assert!(!missing.exists());
    assert_eq!(plain_page_contents(&ok), expected_contents(1));
}

#[test]
fn max_input_bytes_skips_large_files() {
    let dir = tempfile::tempdir().unwrap();
    let original = encrypted_pdf("pw", 1);
    let path = write_pdf(dir.path(), "big.pdf", &original);

    cmd()
        .args([
            "remove",
            path.to_str().unwrap(),
            "--password",
            "pw",
            "--max-input-bytes",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("An error occurred with file"))
        .stdout(predicate::str::contains("max_input_bytes"));

    assert_eq!(std::fs::read(&path).unwrap(), original);
}

#[test]
fn no_verify_still_unlocks() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(dir.path(), "nv.pdf", &encrypted_pdf("pw", 1));

    cmd()
        .args(["remove", path.to_str().unwrap(), "--password", "pw", "--no-verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password removed:"));

    assert!(!is_encrypted(&path));
    assert_eq!(plain_page_contents(&path), expected_contents(1));
}

#[test]
fn quiet_suppresses_overwrite_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(dir.path(), "q.pdf", &encrypted_pdf("pw", 1));

    cmd()
        .env_remove("RUST_LOG")
        .args(["remove", path.to_str().unwrap(), "--password", "pw", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(dir.path(), "v.pdf", &encrypted_pdf("pw", 1));

    cmd()
        .env_remove("RUST_LOG")
        .args(["remove", path.to_str().unwrap(), "--password", "pw", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("password removed"))
        .stdout(predicate::str::contains("password removed").not());
}
