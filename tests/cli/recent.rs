use crate::cli::support::{stdout_json, TestVault};
use predicates::prelude::*;

fn titles(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|n| n["info"]["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_recent_by_modification_time() {
    let vault = TestVault::new();
    vault.write("Fresh.md", "new");
    vault.write("Stale.md", "old");
    vault.backdate("Stale.md", 30);

    let output = vault
        .cmd()
        .args(["--format", "json", "recent", "--days", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(titles(&json), vec!["Fresh"]);
    assert_eq!(json[0]["matched_by"], "modified");
}

#[test]
fn test_recent_defaults_to_a_week() {
    let vault = TestVault::new();
    vault.write("Fresh.md", "new");
    vault.write("Older.md", "old");
    vault.backdate("Older.md", 10);

    let output = vault
        .cmd()
        .args(["--format", "json", "recent"])
        .output()
        .unwrap();
    assert_eq!(titles(&stdout_json(&output)), vec!["Fresh"]);
}

#[test]
fn test_recent_range_uses_filename_dates() {
    let vault = TestVault::new();
    vault.write("Meetings/2024-03-02 Standup.md", "standup");
    vault.write("2024-03-05 Later.md", "later");
    vault.write("Undated.md", "undated");

    let output = vault
        .cmd()
        .args([
            "--format",
            "json",
            "recent",
            "--from",
            "2024-03-01",
            "--to",
            "2024-03-03",
        ])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(titles(&json), vec!["2024-03-02 Standup"]);
    assert_eq!(json[0]["matched_by"], "filename_date");
    assert_eq!(json[0]["effective_date"], "2024-03-02T00:00:00");
}

#[test]
fn test_recent_human_output_and_exclusions() {
    let vault = TestVault::new();
    vault.write("Projects/Plan.md", "plan");
    vault.write("Templates/Daily.md", "template");

    vault
        .cmd()
        .args(["recent", "--days", "3", "--exclude", "Templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan (Projects/Plan.md, modified)"))
        .stdout(predicate::str::contains("Daily").not());
}

#[test]
fn test_recent_empty_result() {
    let vault = TestVault::new();
    vault.write("Stale.md", "old");
    vault.backdate("Stale.md", 60);

    vault
        .cmd()
        .args(["recent", "--days", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent notes"));
}

#[test]
fn test_recent_invalid_ranges() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["recent", "--from", "2024-03-05", "--to", "2024-03-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("date range"));

    vault
        .cmd()
        .args(["recent", "--from", "2024-03-05"])
        .assert()
        .code(2);

    vault
        .cmd()
        .args(["recent", "--days", "3", "--from", "2024-03-01", "--to", "2024-03-02"])
        .assert()
        .code(2);

    vault
        .cmd()
        .args(["recent", "--from", "March", "--to", "2024-03-02"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}
