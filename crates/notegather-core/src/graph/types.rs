use crate::error::Result;
use crate::note::NoteId;
use serde::{Serialize, Serializer};
use std::fmt;

/// Deepest link traversal allowed
pub const MAX_DEPTH_LIMIT: u32 = 3;

/// Default character budget
pub const DEFAULT_MAX_CHARS: usize = 100_000;

/// Validated bounds for one discovery run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryLimits {
    max_depth: u32,
    max_chars: usize,
    exclude_folders: Vec<String>,
}

impl DiscoveryLimits {
    /// Validate limits up front so traversal never fails on configuration
    pub fn new(max_depth: u32, max_chars: usize, exclude_folders: Vec<String>) -> Result<Self> {
        if !(1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
            crate::bail_invalid!("max depth (expected 1, 2 or 3)", max_depth);
        }
        if max_chars == 0 {
            crate::bail_invalid!("max characters (expected a positive number)", max_chars);
        }
        let exclude_folders = exclude_folders
            .into_iter()
            .map(|f| f.trim().trim_matches('/').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        Ok(DiscoveryLimits {
            max_depth,
            max_chars,
            exclude_folders,
        })
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn exclude_folders(&self) -> &[String] {
        &self.exclude_folders
    }
}

/// Why a note ended up in the candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    Root,
    /// Title of the note whose reference led here
    LinkedFrom(String),
    RecentActivity,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Root => f.write_str("root"),
            Provenance::LinkedFrom(title) => write!(f, "linked from {}", title),
            Provenance::RecentActivity => f.write_str("recent activity"),
        }
    }
}

impl Serialize for Provenance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A candidate note produced by discovery
///
/// `depth` and `provenance` are fixed at creation; only `included` may be
/// flipped afterwards by caller policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredNote {
    pub id: NoteId,
    pub title: String,
    /// Hops from the root (0 = root)
    pub depth: u32,
    pub provenance: Provenance,
    /// Character count of the raw text
    pub estimated_size: usize,
    pub included: bool,
}

impl DiscoveredNote {
    pub fn new(id: NoteId, depth: u32, provenance: Provenance, estimated_size: usize) -> Self {
        let title = id.title().to_string();
        DiscoveredNote {
            id,
            title,
            depth,
            provenance,
            estimated_size,
            included: true,
        }
    }
}

/// Presentation order: depth, then title, then path
pub fn sort_discovered(notes: &mut [DiscoveredNote]) {
    notes.sort_by(|a, b| {
        a.depth
            .cmp(&b.depth)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    });
}
