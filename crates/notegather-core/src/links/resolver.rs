use super::parse::{checklist_items, parse_structure, query_blocks, strip_code_blocks};
use super::query::references_from_outcome;
use super::ResolverOptions;
use crate::error::Result;
use crate::note::NoteId;
use crate::vault::{NoteRepository, QueryExtension};
use std::collections::HashSet;

/// Turns a note's outbound references into note identities
pub struct ReferenceResolver<'a> {
    repo: &'a dyn NoteRepository,
    extension: Option<&'a dyn QueryExtension>,
    options: ResolverOptions,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(repo: &'a dyn NoteRepository, options: ResolverOptions) -> Self {
        ReferenceResolver {
            repo,
            extension: None,
            options,
        }
    }

    pub fn with_extension(mut self, extension: &'a dyn QueryExtension) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Resolve every outbound reference of `id`
    ///
    /// Fails only if the note itself cannot be read.
    #[tracing::instrument(skip(self), fields(note = %id))]
    pub fn resolve(&self, id: &NoteId) -> Result<Vec<NoteId>> {
        let text = self.repo.read_text(id)?;
        Ok(self.resolve_text(id, &text))
    }

    /// Resolve references in already-loaded text of `id`
    ///
    /// Result is deduplicated by identity in first-seen order. References
    /// that match no note, and references back to `id` itself, are dropped.
    pub fn resolve_text(&self, id: &NoteId, text: &str) -> Vec<NoteId> {
        let prose = strip_code_blocks(text);

        let checklist = checklist_items(&prose);
        if !checklist.is_empty() {
            let checked: Vec<String> = checklist
                .into_iter()
                .filter(|item| item.checked)
                .map(|item| item.target)
                .collect();
            tracing::debug!(checked = checked.len(), "collection note");
            return self.resolve_all(id, checked);
        }

        let mut raw = self.query_references(id, text);

        let structure = self
            .repo
            .parsed_structure(id)
            .unwrap_or_else(|| parse_structure(text));
        raw.extend(structure.direct_references);
        raw.extend(structure.embedded_references);

        self.resolve_all(id, raw)
    }

    fn query_references(&self, id: &NoteId, text: &str) -> Vec<String> {
        if !self.options.query_enabled {
            return Vec::new();
        }
        let blocks = query_blocks(text, &self.options.query_language);
        if blocks.is_empty() {
            return Vec::new();
        }
        let Some(extension) = self.extension else {
            tracing::debug!(
                blocks = blocks.len(),
                "query blocks present but no query extension available"
            );
            return Vec::new();
        };

        let mut refs = Vec::new();
        for body in blocks {
            match extension.execute_query(&body, id) {
                Ok(outcome) => refs.extend(references_from_outcome(outcome)),
                Err(e) => {
                    tracing::warn!(error = %e, "query extension failed");
                }
            }
        }
        refs
    }

    fn resolve_all(&self, id: &NoteId, raw: Vec<String>) -> Vec<NoteId> {
        let mut seen: HashSet<NoteId> = HashSet::new();
        let mut resolved = Vec::new();
        for reference in raw {
            let Some(target) = self.repo.resolve_reference(&reference, id) else {
                tracing::trace!(reference = %reference, "unresolved reference");
                continue;
            };
            if &target == id {
                continue;
            }
            if seen.insert(target.clone()) {
                resolved.push(target);
            }
        }
        resolved
    }
}
