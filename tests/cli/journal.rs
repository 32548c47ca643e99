use crate::cli::support::{stdout_json, TestVault};
use chrono::{Days, Local};
use predicates::prelude::*;

fn day(days_ago: u64) -> String {
    Local::now()
        .date_naive()
        .checked_sub_days(Days::new(days_ago))
        .unwrap()
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn test_journal_keeps_recent_sections() {
    let vault = TestVault::new();
    vault.write(
        "Work log.md",
        &format!(
            "# Work log\n\n### {} Monday\nrecent work\n\n### {}\nolder work\n",
            day(2),
            day(20)
        ),
    );

    vault
        .cmd()
        .args(["journal", "Work log", "--days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "# Work log\n\n### {} Monday\nrecent work\n",
            day(2)
        )))
        .stdout(predicate::str::contains("older work").not());
}

#[test]
fn test_journal_plain_note_unchanged() {
    let vault = TestVault::new();
    vault.write("Plain.md", "No dated sections here.\n");

    vault
        .cmd()
        .args(["journal", "Plain.md", "--days", "1"])
        .assert()
        .success()
        .stdout("No dated sections here.\n")
        .stderr(predicate::str::contains(
            "no journal date headers matching \"### YYYY-MM-DD\"",
        ));
}

#[test]
fn test_journal_json_output() {
    let vault = TestVault::new();
    vault.write(
        "Log.md",
        &format!("### {}\ntoday\n### 2001-01-01\nlong ago\n", day(0)),
    );

    let output = vault
        .cmd()
        .args(["--format", "json", "journal", "Log", "--days", "0"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["note"], "Log.md");
    assert_eq!(json["journal_style"], true);
    assert_eq!(json["header_format"], "### YYYY-MM-DD");
    assert_eq!(json["text"], format!("### {}\ntoday", day(0)));
}

#[test]
fn test_journal_custom_header_format() {
    let vault = TestVault::new();
    vault.write(".notegather.toml", "journal_header_format = \"## DD.MM.YYYY\"\n");
    let old = "## 01.01.2001\nancient\n";
    let today = Local::now().date_naive().format("## %d.%m.%Y").to_string();
    vault.write("Log.md", &format!("{today}\nnow\n{old}"));

    vault
        .cmd()
        .args(["journal", "Log", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("now"))
        .stdout(predicate::str::contains("ancient").not());
}

#[test]
fn test_journal_unknown_note() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["journal", "Missing", "--days", "3"])
        .assert()
        .code(3);
}
