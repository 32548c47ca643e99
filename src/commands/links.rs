//! `notegather links` - link-based discovery listing

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use crate::commands::with_overrides;
use notegather_core::error::Result;
use notegather_core::graph::{DiscoveredNote, LinkDiscoveryEngine, SelectionSummary};
use notegather_core::links::ReferenceResolver;
use notegather_core::note::NoteId;

#[derive(Debug, Serialize)]
struct LinksOutput<'a> {
    root: &'a NoteId,
    max_depth: u32,
    max_chars: usize,
    summary: SelectionSummary,
    notes: &'a [DiscoveredNote],
}

pub fn execute(
    ctx: &CommandContext,
    root: &str,
    depth: Option<u32>,
    max_chars: Option<usize>,
    exclude: &[String],
) -> Result<()> {
    let config = with_overrides(ctx.load_config()?, depth, max_chars, exclude);
    let limits = config.limits()?;

    let vault = ctx.open_vault()?;
    let root_id = vault.find_note(root)?;

    let resolver = ReferenceResolver::new(&vault, config.resolver_options());
    let engine = LinkDiscoveryEngine::new(&vault, resolver);
    let notes = engine.discover(&root_id, &limits)?;
    let summary = SelectionSummary::of(&notes);

    tracing::debug!(elapsed = ?ctx.start.elapsed(), notes = notes.len(), "links_discovered");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = LinksOutput {
                root: &root_id,
                max_depth: limits.max_depth(),
                max_chars: limits.max_chars(),
                summary,
                notes: &notes,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for note in &notes {
                println!("{}", human_line(note));
            }
            if !ctx.cli.quiet {
                println!();
                println!(
                    "{} of {} notes included ({} of {} chars)",
                    summary.included,
                    summary.total,
                    summary.included_chars,
                    limits.max_chars()
                );
            }
        }
    }

    Ok(())
}

pub(crate) fn human_line(note: &DiscoveredNote) -> String {
    let mark = if note.included { "x" } else { " " };
    format!(
        "[{}] {} {} ({}, {} chars, {})",
        mark, note.depth, note.title, note.id, note.estimated_size, note.provenance
    )
}
