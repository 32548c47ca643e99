use crate::cli::support::{linked_vault, note_titles, notegather, stdout_json, TestVault};
use predicates::prelude::*;

#[test]
fn test_links_follows_references_to_default_depth() {
    let vault = linked_vault();

    let output = vault
        .cmd()
        .args(["--format", "json", "links", "Root"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["root"], "Root.md");
    assert_eq!(json["max_depth"], 2);
    assert_eq!(note_titles(&json), vec!["Root", "A", "B", "C"]);

    let notes = json["notes"].as_array().unwrap();
    let depths: Vec<u64> = notes.iter().map(|n| n["depth"].as_u64().unwrap()).collect();
    assert_eq!(depths, vec![0, 1, 2, 2]);
    assert_eq!(notes[0]["provenance"], "root");
    assert_eq!(notes[2]["provenance"], "linked from A");
    assert!(notes.iter().all(|n| n["included"] == true));
}

#[test]
fn test_links_depth_flag() {
    let vault = linked_vault();

    let output = vault
        .cmd()
        .args(["--format", "json", "links", "Root", "--depth", "3"])
        .output()
        .unwrap();
    assert_eq!(note_titles(&stdout_json(&output)), vec!["Root", "A", "B", "C", "D"]);

    let output = vault
        .cmd()
        .args(["--format", "json", "links", "Root.md", "--depth", "1"])
        .output()
        .unwrap();
    assert_eq!(note_titles(&stdout_json(&output)), vec!["Root", "A"]);
}

#[test]
fn test_links_human_output() {
    let vault = linked_vault();

    vault
        .cmd()
        .args(["links", "Root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] 0 Root (Root.md"))
        .stdout(predicate::str::contains("[x] 2 C (C.md"))
        .stdout(predicate::str::contains("4 of 4 notes included"))
        .stdout(predicate::str::contains("Unrelated").not());
}

#[test]
fn test_links_budget_marks_overflow() {
    let vault = TestVault::new();
    vault.write("Root.md", "[[Big]] [[Small]]");
    vault.write("Big.md", &"b".repeat(500));
    vault.write("Small.md", "tiny");

    let output = vault
        .cmd()
        .args(["--format", "json", "links", "Root", "--max-chars", "100"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let notes = json["notes"].as_array().unwrap();
    let big = notes.iter().find(|n| n["title"] == "Big").unwrap();
    let small = notes.iter().find(|n| n["title"] == "Small").unwrap();
    assert_eq!(big["included"], false);
    assert_eq!(big["estimated_size"], 500);
    assert_eq!(small["included"], true);
    assert_eq!(json["summary"]["excluded"], 1);
}

#[test]
fn test_links_excluded_folder() {
    let vault = TestVault::new();
    vault.write("Root.md", "[[Kept]] [[Old]]");
    vault.write("Kept.md", "kept");
    vault.write("Archive/Old.md", "old");

    let output = vault
        .cmd()
        .args(["--format", "json", "links", "Root", "--exclude", "Archive"])
        .output()
        .unwrap();
    assert_eq!(note_titles(&stdout_json(&output)), vec!["Root", "Kept"]);
}

#[test]
fn test_links_rejects_invalid_depth() {
    let vault = linked_vault();

    vault
        .cmd()
        .args(["links", "Root", "--depth", "4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max depth"));

    vault
        .cmd()
        .args(["links", "Root", "--max-chars", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_links_unknown_root() {
    let vault = linked_vault();

    vault
        .cmd()
        .args(["links", "Nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: Nowhere"));
}

#[test]
fn test_links_missing_vault() {
    let vault = TestVault::new();
    let missing = vault.path().join("does-not-exist");

    notegather()
        .arg("--vault")
        .arg(&missing)
        .env("NOTEGATHER_CONFIG_DIR", vault.path())
        .args(["links", "Root"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vault not found"));
}

#[test]
fn test_links_vault_config_file() {
    let vault = linked_vault();
    vault.write(".notegather.toml", "max_depth = 1\n");

    let output = vault
        .cmd()
        .args(["--format", "json", "links", "Root"])
        .output()
        .unwrap();
    assert_eq!(note_titles(&stdout_json(&output)), vec!["Root", "A"]);

    // Flags win over the file
    let output = vault
        .cmd()
        .args(["--format", "json", "links", "Root", "--depth", "2"])
        .output()
        .unwrap();
    assert_eq!(note_titles(&stdout_json(&output)).len(), 4);
}

#[test]
fn test_links_explicit_config_errors() {
    let vault = linked_vault();
    let config = vault.write("custom.toml", "max_depth = 9\n");

    vault
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["links", "Root"])
        .assert()
        .code(2);

    vault
        .cmd()
        .arg("--config")
        .arg(vault.path().join("missing.toml"))
        .args(["links", "Root"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config"));
}

#[test]
fn test_links_collection_note_uses_checked_items_only() {
    let vault = TestVault::new();
    vault.write(
        "Reading list.md",
        "- [x] [[Chosen]]\n- [ ] [[Skipped]]\n\nAlso [[Ignored]]\n",
    );
    vault.write("Chosen.md", "yes");
    vault.write("Skipped.md", "no");
    vault.write("Ignored.md", "no");

    let output = vault
        .cmd()
        .args(["--format", "json", "links", "Reading list"])
        .output()
        .unwrap();
    assert_eq!(note_titles(&stdout_json(&output)), vec!["Reading list", "Chosen"]);
}

#[test]
fn test_links_root_path_in_other_case() {
    let vault = TestVault::new();
    vault.write("Root.md", "# Root\n[[A]]\n");
    vault.write("A.md", "# A\nBack to [[Root]].\n");

    let output = vault
        .cmd()
        .args(["--format", "json", "links", "root.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["root"], "Root.md");
    assert_eq!(note_titles(&json), vec!["Root", "A"]);
}
