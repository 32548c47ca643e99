//! Optional query extension boundary
//!
//! Some vaults embed live queries in fenced code blocks. When a host wires a
//! query engine in, the resolver runs those blocks and treats whatever notes
//! they return as references. Result shapes are resolved once, here, into a
//! [`QueryValue`].

use crate::error::{GatherError, Result};
use crate::note::NoteId;
use std::collections::HashMap;

/// Shape of a query result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A plain list of note references
    FileList(Vec<String>),
    /// Tabular output; the first column names the note
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Rendered text (markdown) that may mention notes
    Text(String),
}

/// Outcome of running one query block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub successful: bool,
    pub value: QueryValue,
}

impl QueryOutcome {
    pub fn success(value: QueryValue) -> Self {
        QueryOutcome {
            successful: true,
            value,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        QueryOutcome {
            successful: false,
            value: QueryValue::Text(message.into()),
        }
    }
}

/// A query engine the resolver can delegate query blocks to
pub trait QueryExtension {
    fn execute_query(&self, body: &str, source: &NoteId) -> Result<QueryOutcome>;
}

/// Query extension answering from a fixed table of query bodies
///
/// Unknown queries fail with [`GatherError::Query`].
#[derive(Debug, Clone, Default)]
pub struct StaticQueryExtension {
    answers: HashMap<String, QueryOutcome>,
}

impl StaticQueryExtension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, body: &str, outcome: QueryOutcome) -> Self {
        self.answers.insert(body.trim().to_string(), outcome);
        self
    }
}

impl QueryExtension for StaticQueryExtension {
    fn execute_query(&self, body: &str, _source: &NoteId) -> Result<QueryOutcome> {
        self.answers
            .get(body.trim())
            .cloned()
            .ok_or_else(|| GatherError::Query(format!("no answer for query: {}", body.trim())))
    }
}
