use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Get a Command for notegather
pub fn notegather() -> Command {
    cargo_bin_cmd!("notegather")
}

/// A temporary vault directory
pub struct TestVault {
    dir: TempDir,
}

impl TestVault {
    pub fn new() -> Self {
        TestVault {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a note (or any file) at a vault-relative path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Move a file's modification time `days` into the past
    pub fn backdate(&self, relative: &str, days: u64) {
        let old_time = SystemTime::now() - Duration::from_secs(days * 24 * 60 * 60);
        let file_times = fs::FileTimes::new().set_modified(old_time);
        fs::OpenOptions::new()
            .write(true)
            .open(self.dir.path().join(relative))
            .unwrap()
            .set_times(file_times)
            .unwrap();
    }

    /// Command pointed at this vault, isolated from user-level config and
    /// ambient log settings
    pub fn cmd(&self) -> Command {
        let mut cmd = notegather();
        cmd.arg("--vault")
            .arg(self.dir.path())
            .env("NOTEGATHER_CONFIG_DIR", self.dir.path().join(".user-config"))
            .env_remove("RUST_LOG")
            .env_remove("NOTEGATHER_LOG");
        cmd
    }
}

/// Parse stdout as JSON
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Parse stderr as JSON
pub fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).unwrap()
}

/// Titles listed in a `notes` array of JSON output
pub fn note_titles(json: &serde_json::Value) -> Vec<String> {
    json["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap().to_string())
        .collect()
}

/// A small linked vault: Root -> A -> (B, C), B -> D, plus an unrelated note
pub fn linked_vault() -> TestVault {
    let vault = TestVault::new();
    vault.write("Root.md", "# Root\nStart at [[A]].\n");
    vault.write("A.md", "# A\nSee [[B]] and [[C]].\n");
    vault.write("B.md", "# B\nDeeper: [[D]]\n");
    vault.write("C.md", "# C\nLeaf.\n");
    vault.write("D.md", "# D\nToo far.\n");
    vault.write("Unrelated.md", "# Unrelated\n");
    vault
}
