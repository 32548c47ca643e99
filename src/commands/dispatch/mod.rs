//! Command dispatch logic for notegather

use std::time::Instant;

use crate::cli::paths::resolve_vault_path;
use crate::cli::Cli;
use notegather_core::error::Result;
use tracing::debug;

pub mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let vault = resolve_vault_path(cli.vault.clone());

    debug!(elapsed = ?start.elapsed(), vault = %vault.display(), "resolve_vault");

    let ctx = CommandContext::new(cli, &vault, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
