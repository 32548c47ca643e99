use super::{NoteCatalog, NoteRepository};
use crate::error::{GatherError, Result};
use crate::note::{NoteId, NoteInfo, ParsedStructure};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
struct MemoryNote {
    text: String,
    modified: NaiveDateTime,
    parsed: Option<ParsedStructure>,
}

/// In-memory vault for tests and embedding
///
/// Resolution follows the same rules as [`super::FsVault`]. Reads of ids
/// registered with [`MemoryVault::fail_reads`] return an IO error.
#[derive(Debug, Clone, Default)]
pub struct MemoryVault {
    notes: HashMap<NoteId, MemoryNote>,
    catalog: NoteCatalog,
    failing: HashSet<NoteId>,
}

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note with a fixed, old modification time
    pub fn with_note(mut self, path: &str, text: &str) -> Self {
        self.insert(path, text, epoch());
        self
    }

    pub fn insert(&mut self, path: &str, text: &str, modified: NaiveDateTime) {
        let id = NoteId::new(path);
        self.catalog.insert(id.clone());
        self.notes.insert(
            id,
            MemoryNote {
                text: text.to_string(),
                modified,
                parsed: None,
            },
        );
    }

    pub fn set_modified(&mut self, path: &str, modified: NaiveDateTime) {
        if let Some(note) = self.notes.get_mut(&NoteId::new(path)) {
            note.modified = modified;
        }
    }

    pub fn set_parsed(&mut self, path: &str, parsed: ParsedStructure) {
        if let Some(note) = self.notes.get_mut(&NoteId::new(path)) {
            note.parsed = Some(parsed);
        }
    }

    /// Make reads of `path` fail from now on
    pub fn fail_reads(&mut self, path: &str) {
        self.failing.insert(NoteId::new(path));
    }

    fn get(&self, id: &NoteId) -> Result<&MemoryNote> {
        if self.failing.contains(id) {
            return Err(GatherError::io_operation("read", id, "simulated failure"));
        }
        self.notes
            .get(id)
            .ok_or_else(|| GatherError::NoteNotFound { id: id.to_string() })
    }
}

impl NoteRepository for MemoryVault {
    fn read_text(&self, id: &NoteId) -> Result<String> {
        Ok(self.get(id)?.text.clone())
    }

    fn stat_modified(&self, id: &NoteId) -> Result<NaiveDateTime> {
        Ok(self.get(id)?.modified)
    }

    fn resolve_reference(&self, raw: &str, from: &NoteId) -> Option<NoteId> {
        self.catalog.resolve(raw, from)
    }

    fn list_all_notes(&self) -> Result<Vec<NoteInfo>> {
        Ok(self.catalog.notes())
    }

    fn parsed_structure(&self, id: &NoteId) -> Option<ParsedStructure> {
        self.notes.get(id).and_then(|n| n.parsed.clone())
    }
}
