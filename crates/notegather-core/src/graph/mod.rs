//! Link-based note discovery
//!
//! Provides:
//! - Breadth-first traversal from a root note under depth and character limits
//! - Provenance-tagged candidate records
//! - Caller-side overrides and folder filtering of the candidate set

mod discovery;
pub mod selection;
pub mod types;

pub use discovery::{DiscoverySession, LinkDiscoveryEngine};
pub use selection::{apply_budget, apply_overrides, filter_folders, Overrides, SelectionSummary};
pub use types::{
    sort_discovered, DiscoveredNote, DiscoveryLimits, Provenance, DEFAULT_MAX_CHARS,
    MAX_DEPTH_LIMIT,
};
