use crate::cli::support::linked_vault;
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let vault = linked_vault();

    vault
        .cmd()
        .args(["--log-level", "debug", "links", "Root"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("links_discovered"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let vault = linked_vault();

    vault
        .cmd()
        .args(["links", "Root"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_enables_debug() {
    let vault = linked_vault();

    vault
        .cmd()
        .args(["--verbose", "links", "Root"])
        .assert()
        .success()
        .stderr(predicate::str::contains("vault_opened"));
}

#[test]
fn test_log_json_format() {
    let vault = linked_vault();

    vault
        .cmd()
        .args(["--log-level", "debug", "--log-json", "links", "Root"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}
