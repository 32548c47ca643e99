//! `notegather journal` - trim a journal-style note to recent sections

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use notegather_core::error::Result;
use notegather_core::note::NoteId;
use notegather_core::vault::NoteRepository;

#[derive(Debug, Serialize)]
struct JournalOutput<'a> {
    note: &'a NoteId,
    journal_style: bool,
    header_format: &'a str,
    text: &'a str,
}

pub fn execute(ctx: &CommandContext, note: &str, days: u32) -> Result<()> {
    let config = ctx.load_config()?;
    let filter = config.journal_filter()?;

    let vault = ctx.open_vault()?;
    let id = vault.find_note(note)?;
    let text = vault.read_text(&id)?;

    let journal_style = filter.is_journal_style(&text);
    let filtered = filter.filter_by_window(&text, days, ctx.now().date());

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = JournalOutput {
                note: &id,
                journal_style,
                header_format: filter.header_format(),
                text: &filtered,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !journal_style && !ctx.cli.quiet {
                eprintln!(
                    "note: {} has no journal date headers matching {:?}; printing it unchanged",
                    id,
                    filter.header_format()
                );
            }
            println!("{}", filtered.trim_end());
        }
    }

    Ok(())
}
