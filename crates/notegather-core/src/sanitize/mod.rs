//! Rewriting note references for output
//!
//! When notes are written back out under new identifiers, wiki references
//! inside them must follow. A [`ReferenceSanitizer`] is filled with the
//! title-to-identifier mapping for one output batch and then rewrites text;
//! references to notes outside the batch fall back to [`sanitize_title`].

use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Replacement for characters that are illegal in file names
pub const SUBSTITUTE: char = '-';

static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();

fn reference_re() -> &'static Regex {
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"(!?)\[\[([^\[\]\n|#]+)([#|][^\[\]\n]*)?\]\]")
            .expect("Invalid reference regex pattern")
    })
}

/// Replace file-name-illegal and control characters with [`SUBSTITUTE`]
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => SUBSTITUTE,
            c if c.is_control() => SUBSTITUTE,
            c => c,
        })
        .collect()
}

/// Per-batch mapping from display title to output identifier
///
/// Identifiers should not contain `[`, `]`, `|` or `#`, which would change
/// how the rewritten reference is read back.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSanitizer {
    by_title: HashMap<String, String>,
    by_sanitized: HashMap<String, String>,
    ids: HashSet<String>,
}

impl ReferenceSanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, title: impl Into<String>, id: impl Into<String>) {
        let title = title.into();
        let id = id.into();
        self.by_sanitized
            .entry(sanitize_title(&title))
            .or_insert_with(|| id.clone());
        self.ids.insert(id.clone());
        self.by_title.insert(title, id);
    }

    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }

    /// Output identifier for a referenced title
    pub fn target_for(&self, title: &str) -> String {
        if self.ids.contains(title) {
            return title.to_string();
        }
        if let Some(id) = self.by_title.get(title) {
            return id.clone();
        }
        let sanitized = sanitize_title(title);
        match self.by_sanitized.get(&sanitized) {
            Some(id) => id.clone(),
            None => sanitized,
        }
    }

    /// Rewrite every `[[title]]`, `[[title|alias]]`, `[[title#heading]]`
    /// and their `![[...]]` embed forms in `text`
    ///
    /// Aliases and heading anchors are carried over untouched.
    pub fn rewrite(&self, text: &str) -> String {
        reference_re()
            .replace_all(text, |caps: &Captures| {
                let bang = &caps[1];
                let target = self.target_for(&caps[2]);
                let suffix = caps.get(3).map_or("", |m| m.as_str());
                format!("{bang}[[{target}{suffix}]]")
            })
            .into_owned()
    }
}
