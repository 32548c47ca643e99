//! Outbound reference resolution
//!
//! A note references other notes through wiki links, embeds, local markdown
//! links, checklist items (collection notes) and, optionally, query blocks
//! evaluated by a host query extension.

pub mod parse;
mod query;
mod resolver;

pub use resolver::ReferenceResolver;

/// Default fenced-block language treated as a query
pub const DEFAULT_QUERY_LANGUAGE: &str = "dataview";

/// Resolver behaviour switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Evaluate query blocks through the query extension
    pub query_enabled: bool,
    /// Fenced-block language tag that marks a query
    pub query_language: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            query_enabled: false,
            query_language: DEFAULT_QUERY_LANGUAGE.to_string(),
        }
    }
}
