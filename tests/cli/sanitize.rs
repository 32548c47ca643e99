use crate::cli::support::{notegather, stdout_json};

#[test]
fn test_sanitize_maps_and_cleans_references() {
    notegather()
        .args([
            "sanitize",
            "See [[Q3: Plan|the plan]], ![[Q3: Plan]] and [[Why? Because]]",
            "--map",
            "Q3: Plan=q3-plan",
        ])
        .assert()
        .success()
        .stdout("See [[q3-plan|the plan]], ![[q3-plan]] and [[Why- Because]]\n");
}

#[test]
fn test_sanitize_is_stable_on_its_output() {
    let first = notegather()
        .args(["sanitize", "[[a/b#Heading]] [[c:d]]"])
        .output()
        .unwrap();
    let once = String::from_utf8(first.stdout).unwrap();
    assert_eq!(once, "[[a-b#Heading]] [[c-d]]\n");

    notegather()
        .args(["sanitize", once.trim_end()])
        .assert()
        .success()
        .stdout(once.clone());
}

#[test]
fn test_sanitize_json_output() {
    let output = notegather()
        .args(["--format", "json", "sanitize", "[[A]]", "--map", "A=alpha"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["text"], "[[alpha]]");
    assert_eq!(json["mappings"], 1);
}

#[test]
fn test_sanitize_rejects_malformed_mapping() {
    notegather()
        .args(["sanitize", "[[A]]", "--map", "no-separator"])
        .assert()
        .code(2);
}
