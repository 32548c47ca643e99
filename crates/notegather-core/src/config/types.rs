//! Configuration type definitions

use crate::graph::DEFAULT_MAX_CHARS;
use crate::journal::DEFAULT_HEADER_FORMAT;
use crate::links::DEFAULT_QUERY_LANGUAGE;
use serde::{Deserialize, Serialize};

/// Default link-discovery depth
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Discovery and aggregation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatherConfig {
    /// Link hops followed from the root note (1 to 3)
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Character budget for the gathered set
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Folders whose notes are never gathered
    #[serde(default)]
    pub exclude_folders: Vec<String>,

    /// Header template for journal-style notes; empty disables trimming
    #[serde(default = "default_journal_header_format")]
    pub journal_header_format: String,

    /// Keep only journal sections from the last N days when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_days_back: Option<u32>,

    #[serde(default)]
    pub query: QueryConfig,
}

/// Optional query-block extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Fenced code block language treated as a query
    #[serde(default = "default_query_language")]
    pub language: String,
}

impl Default for GatherConfig {
    fn default() -> Self {
        GatherConfig {
            max_depth: default_max_depth(),
            max_chars: default_max_chars(),
            exclude_folders: Vec::new(),
            journal_header_format: default_journal_header_format(),
            journal_days_back: None,
            query: QueryConfig::default(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            enabled: false,
            language: default_query_language(),
        }
    }
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

fn default_journal_header_format() -> String {
    DEFAULT_HEADER_FORMAT.to_string()
}

fn default_query_language() -> String {
    DEFAULT_QUERY_LANGUAGE.to_string()
}
