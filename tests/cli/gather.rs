use crate::cli::support::{linked_vault, stdout_json, TestVault};
use chrono::{Days, Local};
use predicates::prelude::*;

fn journal_text() -> String {
    let today = Local::now().date_naive();
    let old = today.checked_sub_days(Days::new(30)).unwrap();
    format!(
        "Intro line\n\n### {}\nfresh entry\n\n### {}\nstale entry\n",
        today.format("%Y-%m-%d"),
        old.format("%Y-%m-%d")
    )
}

#[test]
fn test_gather_root_human_output() {
    let vault = linked_vault();

    vault
        .cmd()
        .args(["gather", "--root", "Root", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=== Root ===\n# Root\nStart at [[A]]."))
        .stdout(predicate::str::contains("\n\n=== A ===\n# A\n"))
        .stdout(predicate::str::contains("=== B ===").not())
        .stderr(predicate::str::contains("Gathered 2 notes"));
}

#[test]
fn test_gather_json_output() {
    let vault = linked_vault();

    let output = vault
        .cmd()
        .args(["--format", "json", "gather", "--root", "Root"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["included_titles"], serde_json::json!(["Root", "A", "B", "C"]));
    let text = json["text"].as_str().unwrap();
    assert_eq!(json["total_chars"], text.chars().count());
    assert_eq!(json["notes"].as_array().unwrap().len(), 4);
}

#[test]
fn test_gather_skip_and_include_overrides() {
    let vault = TestVault::new();
    vault.write("Root.md", "[[Big]] [[Small]]");
    vault.write("Big.md", &"b".repeat(200));
    vault.write("Small.md", "small body");

    let output = vault
        .cmd()
        .args([
            "--format",
            "json",
            "gather",
            "--root",
            "Root",
            "--max-chars",
            "100",
            "--skip",
            "Small",
        ])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["included_titles"], serde_json::json!(["Root"]));

    let output = vault
        .cmd()
        .args([
            "--format",
            "json",
            "gather",
            "--root",
            "Root",
            "--max-chars",
            "100",
            "--include",
            "Big",
        ])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["included_titles"], serde_json::json!(["Root", "Big", "Small"]));
}

#[test]
fn test_gather_trims_journal_notes() {
    let vault = TestVault::new();
    vault.write("Root.md", "[[Log]]");
    vault.write("Log.md", &journal_text());

    vault
        .cmd()
        .args(["gather", "--root", "Root", "--journal-days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Log ===\nIntro line\n\n### "))
        .stdout(predicate::str::contains("fresh entry"))
        .stdout(predicate::str::contains("stale entry").not());

    vault
        .cmd()
        .args(["gather", "--root", "Root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stale entry"));
}

#[test]
fn test_gather_journal_days_from_config() {
    let vault = TestVault::new();
    vault.write("Log.md", &journal_text());
    vault.write(".notegather.toml", "journal_days_back = 7\n");

    vault
        .cmd()
        .args(["gather", "--root", "Log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stale entry").not());

    // An empty header format turns journal trimming off
    vault.write(
        ".notegather.toml",
        "journal_days_back = 7\njournal_header_format = \"\"\n",
    );
    vault
        .cmd()
        .args(["gather", "--root", "Log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stale entry"));
}

#[test]
fn test_gather_recent_mode() {
    let vault = TestVault::new();
    vault.write("2024-03-01 Kickoff.md", "kickoff notes");
    vault.write("2024-03-02 Review.md", "review notes");
    vault.write("Elsewhere.md", "not in range");

    let output = vault
        .cmd()
        .args([
            "--format",
            "json",
            "gather",
            "--from",
            "2024-03-01",
            "--to",
            "2024-03-02",
        ])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(
        json["included_titles"],
        serde_json::json!(["2024-03-02 Review", "2024-03-01 Kickoff"])
    );
    assert!(json["notes"]
        .as_array()
        .unwrap()
        .iter()
        .all(|n| n["provenance"] == "recent activity" && n["depth"] == 0));
}

#[test]
fn test_gather_recent_mode_applies_budget() {
    let vault = TestVault::new();
    vault.write("New.md", &"n".repeat(60));
    vault.write("Mid.md", &"m".repeat(60));
    vault.backdate("Mid.md", 1);

    let output = vault
        .cmd()
        .args(["--format", "json", "gather", "--days", "7", "--max-chars", "100"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["included_titles"], serde_json::json!(["New"]));
}

#[test]
fn test_gather_requires_exactly_one_mode() {
    let vault = linked_vault();

    vault.cmd().arg("gather").assert().code(2);
    vault
        .cmd()
        .args(["gather", "--root", "Root", "--days", "3"])
        .assert()
        .code(2);
}

#[test]
fn test_gather_rejects_bad_header_format() {
    let vault = linked_vault();
    vault.write(".notegather.toml", "journal_header_format = \"### YYYY\"\n");

    vault
        .cmd()
        .args(["gather", "--root", "Root"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid header format"));
}
