//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use notegather_core::config::GatherConfig;
use notegather_core::error::Result;
use notegather_core::vault::FsVault;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub vault: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, vault: &'a Path, start: Instant) -> Self {
        Self { cli, vault, start }
    }

    pub fn open_vault(&self) -> Result<FsVault> {
        let vault = FsVault::open(self.vault)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "open_vault");
        Ok(vault)
    }

    /// Active configuration: `--config`, the vault file, the user file or defaults
    pub fn load_config(&self) -> Result<GatherConfig> {
        let (config, source) = GatherConfig::discover(self.cli.config.as_deref(), Some(self.vault))?;
        tracing::debug!(?source, "load_config");
        Ok(config)
    }

    /// Local wall-clock time used for recency windows
    pub fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("notegather {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Collects related notes from a markdown vault into one text.");
        println!();
        println!("Run `notegather --help` for usage information.");
        Ok(())
    }
}
