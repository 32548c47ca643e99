//! Host note store boundary
//!
//! Discovery and aggregation never touch the filesystem directly: every read
//! goes through [`NoteRepository`], so the same engine runs against a real
//! vault directory ([`FsVault`]) or an in-memory fake ([`MemoryVault`]).

mod catalog;
pub mod extension;
mod fs;
mod memory;

use crate::error::Result;
use crate::note::{NoteId, NoteInfo, ParsedStructure};
use chrono::NaiveDateTime;

pub use catalog::NoteCatalog;
pub use extension::{QueryExtension, QueryOutcome, QueryValue, StaticQueryExtension};
pub use fs::FsVault;
pub use memory::MemoryVault;

/// Read access to the host note store
pub trait NoteRepository {
    /// Raw markdown text of a note
    fn read_text(&self, id: &NoteId) -> Result<String>;

    /// Last modification time, in local time
    fn stat_modified(&self, id: &NoteId) -> Result<NaiveDateTime>;

    /// Resolve a raw reference string as written in `from`
    ///
    /// Returns `None` when nothing in the vault matches.
    fn resolve_reference(&self, raw: &str, from: &NoteId) -> Option<NoteId>;

    /// All notes in the vault, sorted by path
    fn list_all_notes(&self) -> Result<Vec<NoteInfo>>;

    /// Pre-parsed reference lists, if the host keeps them
    fn parsed_structure(&self, _id: &NoteId) -> Option<ParsedStructure> {
        None
    }
}
