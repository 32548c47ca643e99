//! Reference-to-note resolution over a list of known note paths

use crate::note::{NoteId, NoteInfo};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Index of known notes used to resolve reference strings
#[derive(Debug, Clone, Default)]
pub struct NoteCatalog {
    /// Exact path -> identity
    by_path: BTreeMap<String, NoteId>,
    /// Lowercased path -> identities, for case-insensitive fallback
    by_folded_path: HashMap<String, Vec<NoteId>>,
    /// Lowercased title -> identities sharing it
    by_title: HashMap<String, Vec<NoteId>>,
}

impl NoteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NoteId) {
        if self.by_path.contains_key(id.as_str()) {
            return;
        }
        self.by_title
            .entry(id.title().to_lowercase())
            .or_default()
            .push(id.clone());
        self.by_folded_path
            .entry(id.as_str().to_lowercase())
            .or_default()
            .push(id.clone());
        self.by_path.insert(id.as_str().to_string(), id);
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// All notes, sorted by path
    pub fn notes(&self) -> Vec<NoteInfo> {
        self.by_path.values().cloned().map(NoteInfo::new).collect()
    }

    /// Resolve a reference as written in `from`
    ///
    /// Tries, in order: the exact vault path, the path relative to the
    /// referencing note's folder, then a unique-by-title match. Ambiguous
    /// title matches prefer the referencing note's folder, then the shortest
    /// path, then lexicographic order.
    pub fn resolve(&self, raw: &str, from: &NoteId) -> Option<NoteId> {
        let target = clean_reference(raw)?;
        let with_ext = if target.to_lowercase().ends_with(".md") {
            target.clone()
        } else {
            format!("{target}.md")
        };

        if let Some(id) = self.lookup_path(&with_ext) {
            return Some(id);
        }

        let folder = from.folder();
        if !folder.is_empty() {
            if let Some(joined) = normalize_path(&format!("{folder}/{with_ext}")) {
                if let Some(id) = self.lookup_path(&joined) {
                    return Some(id);
                }
            }
        }

        let stem = NoteId::new(with_ext.as_str()).title().to_lowercase();
        let suffix = format!("/{}", with_ext.to_lowercase());
        let has_folder = with_ext.contains('/');
        let candidates = self.by_title.get(&stem)?;
        candidates
            .iter()
            .filter(|id| !has_folder || id.as_str().to_lowercase().ends_with(&suffix))
            .min_by(|a, b| {
                let a_local = a.folder() == folder;
                let b_local = b.folder() == folder;
                b_local
                    .cmp(&a_local)
                    .then_with(|| a.as_str().len().cmp(&b.as_str().len()))
                    .then_with(|| a.cmp(b))
            })
            .cloned()
    }

    /// The stored identity for a vault path
    ///
    /// An exact match wins; otherwise the path is matched ignoring case,
    /// taking the lexicographically first note when several differ only
    /// in case.
    pub(crate) fn lookup_path(&self, path: &str) -> Option<NoteId> {
        let normalized = normalize_path(path)?;
        if let Some(id) = self.by_path.get(&normalized) {
            return Some(id.clone());
        }
        self.by_folded_path
            .get(&normalized.to_lowercase())?
            .iter()
            .min()
            .cloned()
    }
}

/// Strip alias, heading and block suffixes and decode percent escapes
///
/// Returns `None` for references that cannot name a note (empty targets,
/// pure heading links, external URLs).
pub(crate) fn clean_reference(raw: &str) -> Option<String> {
    let mut target = raw.trim();
    if let Some(idx) = target.find('|') {
        target = &target[..idx];
    }
    if let Some(idx) = target.find('#') {
        target = &target[..idx];
    }
    if let Some(idx) = target.find('^') {
        target = &target[..idx];
    }
    let target = target.trim();
    if target.is_empty() || target.contains("://") || target.starts_with("mailto:") {
        return None;
    }
    let decoded = urlencoding::decode(target).unwrap_or(Cow::Borrowed(target));
    Some(decoded.trim_start_matches("./").to_string())
}

/// Collapse `.` and `..` segments; `None` if the path escapes the vault
fn normalize_path(path: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
