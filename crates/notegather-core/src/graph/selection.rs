//! Caller-side policy applied to a candidate set after discovery

use crate::graph::types::DiscoveredNote;
use crate::note::NoteId;
use serde::Serialize;
use std::collections::HashSet;

/// Manual include/exclude toggles
///
/// An explicit exclude wins over an explicit include for the same note.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub include: HashSet<NoteId>,
    pub exclude: HashSet<NoteId>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

/// Flip `included` flags according to manual toggles
pub fn apply_overrides(notes: &mut [DiscoveredNote], overrides: &Overrides) {
    if overrides.is_empty() {
        return;
    }
    for note in notes.iter_mut() {
        if overrides.exclude.contains(&note.id) {
            note.included = false;
        } else if overrides.include.contains(&note.id) {
            note.included = true;
        }
    }
}

/// Include notes in list order while they fit in `max_chars`
///
/// Notes that would overflow the budget are marked `included = false`;
/// later, smaller notes may still fit. Returns the included total.
pub fn apply_budget(notes: &mut [DiscoveredNote], max_chars: usize) -> usize {
    let mut used = 0;
    for note in notes.iter_mut() {
        if used + note.estimated_size <= max_chars {
            used += note.estimated_size;
            note.included = true;
        } else {
            note.included = false;
        }
    }
    used
}

/// Drop candidates living under any of `folders`
pub fn filter_folders(notes: Vec<DiscoveredNote>, folders: &[String]) -> Vec<DiscoveredNote> {
    if folders.is_empty() {
        return notes;
    }
    notes
        .into_iter()
        .filter(|n| !n.id.is_excluded(folders))
        .collect()
}

/// Counts over a candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub total: usize,
    pub included: usize,
    pub excluded: usize,
    /// Sum of estimated sizes of included notes
    pub included_chars: usize,
}

impl SelectionSummary {
    pub fn of(notes: &[DiscoveredNote]) -> Self {
        let included: Vec<&DiscoveredNote> = notes.iter().filter(|n| n.included).collect();
        SelectionSummary {
            total: notes.len(),
            included: included.len(),
            excluded: notes.len() - included.len(),
            included_chars: included.iter().map(|n| n.estimated_size).sum(),
        }
    }
}
