use super::{NoteCatalog, NoteRepository};
use crate::error::{GatherError, Result};
use crate::note::{NoteId, NoteInfo};
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

/// A vault backed by a directory of markdown files
///
/// The directory is scanned once when opened; hidden directories such as
/// `.git` or `.obsidian` are skipped.
#[derive(Debug)]
pub struct FsVault {
    root: PathBuf,
    catalog: NoteCatalog,
}

impl FsVault {
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(GatherError::VaultNotFound {
                path: root.to_path_buf(),
            });
        }

        let start = Instant::now();
        let mut catalog = NoteCatalog::new();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable vault entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            catalog.insert(NoteId::new(relative.to_string_lossy().as_ref()));
        }

        if catalog.is_empty() {
            tracing::warn!(root = %root.display(), "vault contains no markdown notes");
        }
        tracing::debug!(notes = catalog.len(), "vault_opened");
        crate::trace_time!(start, "vault_scan");

        Ok(FsVault {
            root: root.to_path_buf(),
            catalog,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a user-supplied note argument: a vault path or a title
    pub fn find_note(&self, arg: &str) -> Result<NoteId> {
        if let Some(id) = self.catalog.lookup_path(arg) {
            return Ok(id);
        }
        self.catalog
            .resolve(arg, &NoteId::new(""))
            .ok_or_else(|| GatherError::NoteNotFound {
                id: arg.to_string(),
            })
    }

    fn full_path(&self, id: &NoteId) -> PathBuf {
        self.root.join(id.as_str())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

impl NoteRepository for FsVault {
    fn read_text(&self, id: &NoteId) -> Result<String> {
        let path = self.full_path(id);
        fs::read_to_string(&path).map_err(|e| GatherError::io_operation("read", path.display(), e))
    }

    fn stat_modified(&self, id: &NoteId) -> Result<NaiveDateTime> {
        let path = self.full_path(id);
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| GatherError::io_operation("stat", path.display(), e))?;
        Ok(DateTime::<Local>::from(modified).naive_local())
    }

    fn resolve_reference(&self, raw: &str, from: &NoteId) -> Option<NoteId> {
        self.catalog.resolve(raw, from)
    }

    fn list_all_notes(&self) -> Result<Vec<NoteInfo>> {
        Ok(self.catalog.notes())
    }
}
