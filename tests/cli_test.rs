//! Command-line behavior of the `folio` binary.
//!
//! Only non-interactive paths are exercised; none of them touch the terminal.

use std::io::Write;
use std::process::{Command, Output};

fn folio(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .env_remove("FOLIO_CONTENT")
        .output()
        .expect("failed to run folio binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_version_prints_package_version() {
    let output = folio(&["--version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        format!("folio {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_help_lists_flags() {
    let output = folio(&["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("--content <path>"));
    assert!(out.contains("--section <id>"));
    assert!(out.contains("--no-anim"));
}

#[test]
fn test_check_bundled_document() {
    let output = folio(&["--check"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("✓ bundled document"));
    assert!(out.contains("Alex Morgan (Full-Stack Developer)"));
    assert!(out.contains("3 projects"));
    assert!(out.contains("2 positions, 2 certifications"));
}

#[test]
fn test_check_custom_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "personal": {{ "name": "Sam Rivera", "title": "Designer", "email": "sam@example.com" }} }}"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let output = folio(&["--check", &path]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Sam Rivera (Designer)"));
    assert!(out.contains("0 projects"));
    assert!(out.contains("sam@example.com"));
}

#[test]
fn test_check_invalid_document_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let output = folio(&["--check", &path]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("is not a valid portfolio document"));
}

#[test]
fn test_missing_flag_value_is_usage_error() {
    let output = folio(&["--content"]);
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("--content requires a value"));
    assert!(err.contains("Usage: folio"));
}
