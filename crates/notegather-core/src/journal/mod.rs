//! Journal-style notes: date-stamped sections and recency trimming
//!
//! A journal note is a single file holding many dated entries, each starting
//! with a header line built from a configurable template. Only recent
//! entries are worth passing downstream, so the note is split into sections
//! and older ones are dropped. Text before the first header (an intro, a
//! table of contents) is always kept.

mod template;

use crate::error::Result;
use chrono::{Days, NaiveDate};
use serde::Serialize;

pub use template::HeaderTemplate;

/// Default journal header template
pub const DEFAULT_HEADER_FORMAT: &str = "### YYYY-MM-DD";

/// One section of a journal note
///
/// `date` is `None` only for the preamble before the first header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSection {
    pub date: Option<NaiveDate>,
    pub content: String,
}

/// Splits and trims journal-style notes
#[derive(Debug, Clone)]
pub struct JournalSectionFilter {
    template: HeaderTemplate,
}

impl JournalSectionFilter {
    /// Build a filter for `format`; an empty format disables journal handling
    pub fn new(format: &str) -> Result<Self> {
        Ok(JournalSectionFilter {
            template: HeaderTemplate::compile(format)?,
        })
    }

    pub fn disabled() -> Self {
        JournalSectionFilter {
            template: HeaderTemplate::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.template.is_enabled()
    }

    /// The header template this filter recognises
    pub fn header_format(&self) -> &str {
        self.template.format()
    }

    /// Whether `text` contains at least one valid date header
    pub fn is_journal_style(&self, text: &str) -> bool {
        self.template.is_enabled() && text.lines().any(|l| self.template.parse_header(l).is_some())
    }

    /// Split `text` into an optional undated preamble plus dated sections
    ///
    /// Each dated section starts with its header line. Blank lines around
    /// sections are dropped; a preamble holding only blank lines is omitted.
    pub fn split_sections(&self, text: &str) -> Vec<DateSection> {
        let mut sections = Vec::new();
        let mut date: Option<NaiveDate> = None;
        let mut lines: Vec<&str> = Vec::new();

        for line in text.lines() {
            if let Some(header_date) = self.template.parse_header(line) {
                push_section(&mut sections, date, &lines);
                date = Some(header_date);
                lines.clear();
            }
            lines.push(line);
        }
        push_section(&mut sections, date, &lines);

        sections
    }

    /// Keep the preamble and sections dated on or after `today - days_back`
    ///
    /// Text without any valid header, or with journal handling disabled,
    /// is returned unchanged.
    pub fn filter_by_window(&self, text: &str, days_back: u32, today: NaiveDate) -> String {
        if !self.is_journal_style(text) {
            return text.to_string();
        }

        let cutoff = today
            .checked_sub_days(Days::new(u64::from(days_back)))
            .unwrap_or(NaiveDate::MIN);

        let sections = self.split_sections(text);
        let total = sections.len();
        let kept: Vec<String> = sections
            .into_iter()
            .filter(|s| s.date.is_none_or(|d| d >= cutoff))
            .map(|s| s.content)
            .collect();

        tracing::trace!(
            sections = total,
            kept = kept.len(),
            cutoff = %cutoff,
            "journal_filtered"
        );

        kept.join("\n\n")
    }
}

fn push_section(sections: &mut Vec<DateSection>, date: Option<NaiveDate>, lines: &[&str]) {
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(start), Some(end)) = (start, end) else {
        return;
    };
    sections.push(DateSection {
        date,
        content: lines[start..=end].join("\n"),
    });
}
