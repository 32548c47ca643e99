use super::parse::scrape_text_references;
use crate::vault::{QueryOutcome, QueryValue};

/// Raw reference strings named by a query result
///
/// Structured shapes are read directly; free text falls back to the lossy
/// scraper. Unsuccessful outcomes name nothing.
pub(crate) fn references_from_outcome(outcome: QueryOutcome) -> Vec<String> {
    if !outcome.successful {
        if let QueryValue::Text(message) = &outcome.value {
            tracing::warn!(message = %message, "query extension reported failure");
        } else {
            tracing::warn!("query extension reported failure");
        }
        return Vec::new();
    }

    match outcome.value {
        QueryValue::FileList(files) => files
            .into_iter()
            .filter_map(|f| cell_reference(&f))
            .collect(),
        QueryValue::Table { rows, .. } => rows
            .iter()
            .filter_map(|row| row.first())
            .filter_map(|cell| cell_reference(cell))
            .collect(),
        QueryValue::Text(text) => scrape_text_references(&text),
    }
}

/// A single cell or list entry: either a bare path or a bracketed reference
fn cell_reference(cell: &str) -> Option<String> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if cell.contains('[') {
        return scrape_text_references(cell).into_iter().next();
    }
    Some(cell.to_string())
}
