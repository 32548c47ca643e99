//! Subcommand routing

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{gather, journal, links, recent, sanitize};
use notegather_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Links {
                root,
                depth,
                max_chars,
                exclude,
            } => links::execute(ctx, root, *depth, *max_chars, exclude),
            Commands::Recent(args) => recent::execute(ctx, args),
            Commands::Gather(args) => gather::execute(ctx, args),
            Commands::Journal { note, days } => journal::execute(ctx, note, *days),
            Commands::Sanitize { text, mappings } => sanitize::execute(ctx, text, mappings),
        }
    }
}
