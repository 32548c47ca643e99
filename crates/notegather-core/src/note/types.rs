use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable note identity: vault-relative path with forward slashes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(path: impl Into<String>) -> Self {
        let path: String = path.into();
        let normalized = path.replace('\\', "/");
        NoteId(normalized.trim_start_matches("./").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display title: the file stem of the path
    pub fn title(&self) -> &str {
        let name = self.0.rsplit('/').next().unwrap_or(&self.0);
        name.strip_suffix(".md").unwrap_or(name)
    }

    /// Folder portion of the path ("" for notes at the vault root)
    pub fn folder(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }

    /// Whether this note lives under `folder`, by path prefix or segment
    ///
    /// `"Archive"` matches `Archive/a.md`, `Projects/Archive/b.md` and
    /// `Archive/2023/c.md`, but not `Archived/d.md`.
    pub fn is_under_folder(&self, folder: &str) -> bool {
        let folder = folder.trim_matches('/');
        if folder.is_empty() {
            return false;
        }
        let parent = self.folder();
        if parent == folder || parent.starts_with(&format!("{folder}/")) {
            return true;
        }
        if folder.contains('/') {
            return parent.contains(&format!("/{folder}/"))
                || parent.ends_with(&format!("/{folder}"));
        }
        parent.split('/').any(|segment| segment == folder)
    }

    /// Whether this note lives under any of `folders`
    pub fn is_excluded(&self, folders: &[String]) -> bool {
        folders.iter().any(|f| self.is_under_folder(f))
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        NoteId::new(s)
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        NoteId::new(s)
    }
}

/// A note as listed by the vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteInfo {
    pub id: NoteId,
    pub title: String,
}

impl NoteInfo {
    pub fn new(id: NoteId) -> Self {
        let title = id.title().to_string();
        NoteInfo { id, title }
    }
}

/// Reference lists a host has already parsed out of a note
///
/// Entries are raw reference strings exactly as written between the
/// brackets (alias and heading suffixes allowed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStructure {
    pub direct_references: Vec<String>,
    pub embedded_references: Vec<String>,
}
