//! `notegather recent` - recency-based discovery listing

use crate::cli::{OutputFormat, WindowArgs};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::with_overrides;
use notegather_core::error::Result;
use notegather_core::recent::{RecencyMatch, RecencyWindow, RecentActivityDiscovery};

/// Window used when neither `--days` nor a range is given
pub const DEFAULT_RECENT_DAYS: u32 = 7;

pub(crate) fn window_from_args(args: &WindowArgs) -> RecencyWindow {
    match (args.from, args.to) {
        (Some(from), Some(to)) => RecencyWindow::Range { from, to },
        _ => RecencyWindow::DaysBack(args.days.unwrap_or(DEFAULT_RECENT_DAYS)),
    }
}

pub fn execute(ctx: &CommandContext, args: &WindowArgs) -> Result<()> {
    let config = with_overrides(ctx.load_config()?, None, None, &args.exclude);
    let window = window_from_args(args);

    let vault = ctx.open_vault()?;
    let notes = RecentActivityDiscovery::new(&vault).discover(
        &window,
        &config.exclude_folders,
        ctx.now(),
    )?;

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        OutputFormat::Human => {
            for note in &notes {
                let rule = match note.matched_by {
                    RecencyMatch::FilenameDate => "filename date",
                    RecencyMatch::Modified => "modified",
                };
                println!(
                    "{}  {} ({}, {})",
                    note.effective_date.format("%Y-%m-%d %H:%M"),
                    note.info.title,
                    note.info.id,
                    rule
                );
            }
            if !ctx.cli.quiet && notes.is_empty() {
                println!("No recent notes");
            }
        }
    }

    Ok(())
}
