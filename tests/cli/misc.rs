use crate::cli::support::{linked_vault, notegather, stderr_json};
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    notegather()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: notegather"))
        .stdout(predicate::str::contains("links"))
        .stdout(predicate::str::contains("recent"))
        .stdout(predicate::str::contains("gather"))
        .stdout(predicate::str::contains("journal"))
        .stdout(predicate::str::contains("sanitize"));
}

#[test]
fn test_version_flag() {
    notegather()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("notegather"));
}

#[test]
fn test_no_command_prints_banner() {
    notegather()
        .assert()
        .success()
        .stdout(predicate::str::contains("notegather --help"));
}

#[test]
fn test_json_error_envelope() {
    let vault = linked_vault();

    let output = vault
        .cmd()
        .args(["--format", "json", "links", "Nowhere"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "note_not_found");
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let output = notegather()
        .args(["--format", "json", "links"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let vault = linked_vault();

    vault
        .cmd()
        .args(["--quiet", "links", "Nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
