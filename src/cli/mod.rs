//! CLI argument parsing for notegather
//!
//! Global flags: --vault, --config, --format, --quiet, --verbose

pub mod output;
pub mod parse;
pub mod paths;

use clap::{ArgGroup, Args, Parser, Subcommand};
use chrono::NaiveDate;
use std::path::PathBuf;

pub use output::OutputFormat;
use parse::{parse_date, parse_mapping};

/// Notegather - collect related notes from a markdown vault into one text
#[derive(Parser, Debug)]
#[command(name = "notegather")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault directory (defaults to the current directory)
    #[arg(long, global = true, env = "NOTEGATHER_VAULT")]
    pub vault: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes reachable by links from a root note
    Links {
        /// Root note (vault path or title)
        root: String,

        /// Link hops to follow (1-3)
        #[arg(long)]
        depth: Option<u32>,

        /// Character budget
        #[arg(long)]
        max_chars: Option<usize>,

        /// Skip notes under this folder (repeatable)
        #[arg(long)]
        exclude: Vec<String>,
    },

    /// List notes active in a time window
    Recent(WindowArgs),

    /// Discover notes and print them as one text blob
    Gather(GatherArgs),

    /// Print the recent sections of a journal-style note
    Journal {
        /// Journal note (vault path or title)
        note: String,

        /// Keep sections from the last N days
        #[arg(long)]
        days: u32,
    },

    /// Rewrite wiki references in text for output
    Sanitize {
        /// Text to rewrite
        text: String,

        /// Map a title to an output identifier (TITLE=ID, repeatable)
        #[arg(long = "map", value_parser = parse_mapping)]
        mappings: Vec<(String, String)>,
    },
}

/// Time window selection for recency discovery
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// Look back N days from now
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub days: Option<u32>,

    /// First day of an explicit range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last day of an explicit range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Skip notes under this folder (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,
}

#[derive(Args, Debug, Clone)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["root", "days", "from"])
))]
pub struct GatherArgs {
    /// Gather by links from this root note
    #[arg(long)]
    pub root: Option<String>,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Link hops to follow (1-3)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Character budget
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Trim journal-style notes to the last N days
    #[arg(long)]
    pub journal_days: Option<u32>,

    /// Force a discovered note into the output (repeatable)
    #[arg(long)]
    pub include: Vec<String>,

    /// Drop a discovered note from the output (repeatable)
    #[arg(long)]
    pub skip: Vec<String>,
}
