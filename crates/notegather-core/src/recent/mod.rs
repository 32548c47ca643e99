//! Recency-based note discovery
//!
//! A note counts as recent when the date at the start of its title, or its
//! modification time, falls inside the requested window. Titles win because
//! meeting and event notes are usually named after the day they happened,
//! which need not be the day the file was last touched.

mod window;

use crate::error::Result;
use crate::graph::{DiscoveredNote, Provenance};
use crate::note::NoteInfo;
use crate::vault::NoteRepository;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::time::Instant;

pub use window::{filename_date, RecencyWindow, WindowBounds};

/// Which rule admitted a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecencyMatch {
    FilenameDate,
    Modified,
}

/// A note admitted by recency discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentNote {
    pub info: NoteInfo,
    pub modified: Option<NaiveDateTime>,
    pub filename_date: Option<chrono::NaiveDate>,
    /// Filename date (at midnight) if present, else modification time
    pub effective_date: NaiveDateTime,
    pub matched_by: RecencyMatch,
}

/// Finds notes active inside a time window
pub struct RecentActivityDiscovery<'a> {
    repo: &'a dyn NoteRepository,
}

impl<'a> RecentActivityDiscovery<'a> {
    pub fn new(repo: &'a dyn NoteRepository) -> Self {
        RecentActivityDiscovery { repo }
    }

    /// Notes inside `window`, most recent first
    ///
    /// Notes under any of `exclude_folders` are never considered. Fails only
    /// if the vault cannot be listed or the window is invalid.
    #[tracing::instrument(skip(self, exclude_folders))]
    pub fn discover(
        &self,
        window: &RecencyWindow,
        exclude_folders: &[String],
        now: NaiveDateTime,
    ) -> Result<Vec<RecentNote>> {
        let start = Instant::now();
        let bounds = window.bounds(now)?;
        let mut found = Vec::new();

        for info in self.repo.list_all_notes()? {
            if info.id.is_excluded(exclude_folders) {
                continue;
            }

            let modified = match self.repo.stat_modified(&info.id) {
                Ok(modified) => Some(modified),
                Err(e) => {
                    tracing::warn!(note = %info.id, error = %e, "cannot read modification time");
                    None
                }
            };
            let from_title = filename_date(&info.title);

            let matched_by = if from_title.is_some_and(|d| bounds.contains_day(d)) {
                RecencyMatch::FilenameDate
            } else if modified.is_some_and(|m| bounds.contains(m)) {
                RecencyMatch::Modified
            } else {
                continue;
            };

            let effective_date = match (from_title.and_then(|d| d.and_hms_opt(0, 0, 0)), modified) {
                (Some(day), _) => day,
                (None, Some(modified)) => modified,
                (None, None) => continue,
            };

            found.push(RecentNote {
                info,
                modified,
                filename_date: from_title,
                effective_date,
                matched_by,
            });
        }

        found.sort_by(|a, b| {
            b.effective_date
                .cmp(&a.effective_date)
                .then_with(|| a.info.title.cmp(&b.info.title))
                .then_with(|| a.info.id.cmp(&b.info.id))
        });

        tracing::debug!(
            found = found.len(),
            start = %bounds.start,
            end = %bounds.end,
            elapsed = ?start.elapsed(),
            "recent_discovery_complete"
        );

        Ok(found)
    }

    /// Turn recent notes into aggregation candidates, keeping their order
    ///
    /// Notes that cannot be read are dropped.
    pub fn into_candidates(&self, notes: Vec<RecentNote>) -> Vec<DiscoveredNote> {
        notes
            .into_iter()
            .filter_map(|note| match self.repo.read_text(&note.info.id) {
                Ok(text) => Some(DiscoveredNote::new(
                    note.info.id,
                    0,
                    Provenance::RecentActivity,
                    text.chars().count(),
                )),
                Err(e) => {
                    tracing::warn!(note = %note.info.id, error = %e, "skipping unreadable note");
                    None
                }
            })
            .collect()
    }
}
