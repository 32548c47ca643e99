use crate::error::Result;
use crate::graph::types::{sort_discovered, DiscoveredNote, DiscoveryLimits, Provenance};
use crate::links::ReferenceResolver;
use crate::note::NoteId;
use crate::vault::NoteRepository;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// A note waiting to be visited
struct QueueEntry {
    id: NoteId,
    depth: u32,
    via: String,
}

/// State for one discovery run
///
/// Owns the identity -> record arena; dropped when the run returns.
pub struct DiscoverySession<'l> {
    limits: &'l DiscoveryLimits,
    notes: HashMap<NoteId, DiscoveredNote>,
    queue: VecDeque<QueueEntry>,
    running_total: usize,
}

impl<'l> DiscoverySession<'l> {
    fn new(limits: &'l DiscoveryLimits) -> Self {
        Self {
            limits,
            notes: HashMap::new(),
            queue: VecDeque::new(),
            running_total: 0,
        }
    }

    fn contains(&self, id: &NoteId) -> bool {
        self.notes.contains_key(id)
    }

    fn fits(&self, size: usize) -> bool {
        self.running_total + size <= self.limits.max_chars()
    }

    fn record(&mut self, note: DiscoveredNote) {
        if note.included {
            self.running_total += note.estimated_size;
        }
        self.notes.insert(note.id.clone(), note);
    }

    /// Queue unseen, non-excluded children of a visited note
    fn enqueue_children(&mut self, children: Vec<NoteId>, depth: u32, via: &str) {
        for child in children {
            if self.contains(&child) {
                continue;
            }
            if child.is_excluded(self.limits.exclude_folders()) {
                tracing::trace!(note = %child, "skipping note in excluded folder");
                continue;
            }
            self.queue.push_back(QueueEntry {
                id: child,
                depth,
                via: via.to_string(),
            });
        }
    }

    fn into_sorted(self) -> Vec<DiscoveredNote> {
        let mut notes: Vec<DiscoveredNote> = self.notes.into_values().collect();
        sort_discovered(&mut notes);
        notes
    }
}

/// Breadth-first discovery of notes reachable from a root
pub struct LinkDiscoveryEngine<'a> {
    repo: &'a dyn NoteRepository,
    resolver: ReferenceResolver<'a>,
}

impl<'a> LinkDiscoveryEngine<'a> {
    pub fn new(repo: &'a dyn NoteRepository, resolver: ReferenceResolver<'a>) -> Self {
        LinkDiscoveryEngine { repo, resolver }
    }

    /// Discover notes linked from `root`
    ///
    /// The root is always included and always counts against the budget.
    /// Every other note is included only while the running total stays
    /// within `max_chars`; a note that would overflow it is recorded with
    /// `included = false` and its references are not followed. Notes are
    /// expanded only while their depth is below `max_depth`.
    ///
    /// Returns the candidates sorted by depth then title. Fails only if the
    /// root note cannot be read.
    #[tracing::instrument(skip(self, limits), fields(root = %root, max_depth = limits.max_depth(), max_chars = limits.max_chars()))]
    pub fn discover(&self, root: &NoteId, limits: &DiscoveryLimits) -> Result<Vec<DiscoveredNote>> {
        let start = Instant::now();
        let mut session = DiscoverySession::new(limits);

        let root_text = self.repo.read_text(root)?;
        let root_note = DiscoveredNote::new(
            root.clone(),
            0,
            Provenance::Root,
            root_text.chars().count(),
        );
        let root_title = root_note.title.clone();
        session.record(root_note);
        let children = self.resolver.resolve_text(root, &root_text);
        session.enqueue_children(children, 1, &root_title);

        while let Some(entry) = session.queue.pop_front() {
            if session.contains(&entry.id) {
                continue;
            }

            let text = match self.repo.read_text(&entry.id) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(note = %entry.id, error = %e, "skipping unreadable note");
                    continue;
                }
            };
            let size = text.chars().count();
            let mut note = DiscoveredNote::new(
                entry.id.clone(),
                entry.depth,
                Provenance::LinkedFrom(entry.via),
                size,
            );

            if !session.fits(size) {
                tracing::trace!(
                    note = %entry.id,
                    size,
                    running_total = session.running_total,
                    "over budget"
                );
                note.included = false;
                session.record(note);
                continue;
            }

            let title = note.title.clone();
            session.record(note);

            if entry.depth < limits.max_depth() {
                let children = self.resolver.resolve_text(&entry.id, &text);
                session.enqueue_children(children, entry.depth + 1, &title);
            }
        }

        tracing::debug!(
            discovered = session.notes.len(),
            included_chars = session.running_total,
            elapsed = ?start.elapsed(),
            "link_discovery_complete"
        );

        Ok(session.into_sorted())
    }
}
