//! `notegather gather` - discovery, selection and aggregation in one step

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::cli::{GatherArgs, OutputFormat};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::recent::window_from_args;
use crate::commands::with_overrides;
use notegather_core::aggregate::{ContentAggregator, JournalWindow};
use notegather_core::error::Result;
use notegather_core::graph::{
    apply_budget, apply_overrides, DiscoveredNote, DiscoveryLimits, LinkDiscoveryEngine,
    Overrides,
};
use notegather_core::links::ReferenceResolver;
use notegather_core::note::NoteId;
use notegather_core::recent::RecentActivityDiscovery;
use notegather_core::vault::FsVault;

#[derive(Debug, Serialize)]
struct GatherOutput<'a> {
    text: &'a str,
    included_titles: &'a [String],
    total_chars: usize,
    notes: &'a [DiscoveredNote],
}

pub fn execute(ctx: &CommandContext, args: &GatherArgs) -> Result<()> {
    let config = with_overrides(
        ctx.load_config()?,
        args.depth,
        args.max_chars,
        &args.window.exclude,
    );
    let limits = config.limits()?;
    let journal = config.journal_filter()?;

    let vault = ctx.open_vault()?;
    let now = ctx.now();

    let mut notes = match &args.root {
        Some(root) => {
            let root_id = vault.find_note(root)?;
            let resolver = ReferenceResolver::new(&vault, config.resolver_options());
            LinkDiscoveryEngine::new(&vault, resolver).discover(&root_id, &limits)?
        }
        None => recent_candidates(&vault, args, &limits, now)?,
    };

    let overrides = Overrides {
        include: resolve_all(&vault, &args.include, &notes),
        exclude: resolve_all(&vault, &args.skip, &notes),
    };
    apply_overrides(&mut notes, &overrides);

    let window = args
        .journal_days
        .or(config.journal_days_back)
        .map(|days_back| JournalWindow {
            days_back,
            today: now.date(),
        });

    let aggregate = ContentAggregator::new(&vault, journal).aggregate(&notes, window)?;

    tracing::debug!(
        elapsed = ?ctx.start.elapsed(),
        candidates = notes.len(),
        included = aggregate.included_titles.len(),
        total_chars = aggregate.total_chars,
        "gather_complete"
    );

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = GatherOutput {
                text: &aggregate.text,
                included_titles: &aggregate.included_titles,
                total_chars: aggregate.total_chars,
                notes: &notes,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", aggregate.text);
            if !ctx.cli.quiet {
                eprintln!(
                    "Gathered {} notes ({} chars)",
                    aggregate.included_titles.len(),
                    aggregate.total_chars
                );
            }
        }
    }

    Ok(())
}

fn recent_candidates(
    vault: &FsVault,
    args: &GatherArgs,
    limits: &DiscoveryLimits,
    now: NaiveDateTime,
) -> Result<Vec<DiscoveredNote>> {
    let discovery = RecentActivityDiscovery::new(vault);
    let found = discovery.discover(
        &window_from_args(&args.window),
        limits.exclude_folders(),
        now,
    )?;
    let mut candidates = discovery.into_candidates(found);
    apply_budget(&mut candidates, limits.max_chars());
    Ok(candidates)
}

/// Resolve override arguments; ones naming no candidate are reported and ignored
fn resolve_all(
    vault: &FsVault,
    args: &[String],
    candidates: &[DiscoveredNote],
) -> HashSet<NoteId> {
    let mut ids = HashSet::new();
    for arg in args {
        match vault.find_note(arg) {
            Ok(id) if candidates.iter().any(|n| n.id == id) => {
                ids.insert(id);
            }
            Ok(id) => tracing::warn!(note = %id, "override names a note outside the candidate set"),
            Err(e) => tracing::warn!(error = %e, "ignoring override"),
        }
    }
    ids
}
