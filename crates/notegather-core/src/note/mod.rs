//! Note identity and metadata
//!
//! Notes are owned by the host vault; this crate only ever sees their
//! identity (a vault-relative path), a display title derived from that path,
//! and the pre-parsed reference lists a host may provide.

mod types;

pub use types::{NoteId, NoteInfo, ParsedStructure};
