//! Concatenation of a selected note set into one bounded text blob

use crate::error::Result;
use crate::graph::DiscoveredNote;
use crate::journal::JournalSectionFilter;
use crate::note::NoteId;
use crate::vault::NoteRepository;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Instant;

/// Journal trimming applied while aggregating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalWindow {
    pub days_back: u32,
    pub today: NaiveDate,
}

/// Result of an aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub text: String,
    pub included_titles: Vec<String>,
    /// Char count of `text`, which differs from the discovery estimate
    /// whenever journal filtering or boundary markers apply
    pub total_chars: usize,
}

/// Boundary line written before each note's text
pub fn boundary_marker(title: &str) -> String {
    format!("=== {title} ===")
}

pub struct ContentAggregator<'a> {
    repo: &'a dyn NoteRepository,
    journal: JournalSectionFilter,
}

impl<'a> ContentAggregator<'a> {
    pub fn new(repo: &'a dyn NoteRepository, journal: JournalSectionFilter) -> Self {
        ContentAggregator { repo, journal }
    }

    /// Concatenate the `included` notes of `notes`, in order
    ///
    /// Notes that cannot be read are skipped with a warning. Notes left
    /// empty by journal trimming contribute nothing and are not listed.
    #[tracing::instrument(skip(self, notes), fields(candidates = notes.len()))]
    pub fn aggregate(
        &self,
        notes: &[DiscoveredNote],
        window: Option<JournalWindow>,
    ) -> Result<Aggregate> {
        let start = Instant::now();
        let mut seen: HashSet<&NoteId> = HashSet::new();
        let mut blocks: Vec<String> = Vec::new();
        let mut included_titles = Vec::new();

        for note in notes.iter().filter(|n| n.included) {
            if !seen.insert(&note.id) {
                tracing::trace!(note = %note.id, "duplicate_skipped");
                continue;
            }

            let text = match self.repo.read_text(&note.id) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(note = %note.id, error = %e, "Skipping unreadable note");
                    continue;
                }
            };

            let text = match window {
                Some(w) if self.journal.is_journal_style(&text) => {
                    self.journal.filter_by_window(&text, w.days_back, w.today)
                }
                _ => text,
            };

            let body = text.trim_end();
            if body.trim().is_empty() {
                tracing::trace!(note = %note.id, "empty_after_filter");
                continue;
            }

            blocks.push(format!("{}\n{}", boundary_marker(&note.title), body));
            included_titles.push(note.title.clone());
        }

        let text = blocks.join("\n\n");
        let total_chars = text.chars().count();

        tracing::debug!(
            included = included_titles.len(),
            total_chars,
            elapsed = ?start.elapsed(),
            "aggregate_complete"
        );

        Ok(Aggregate {
            text,
            included_titles,
            total_chars,
        })
    }
}
