//! Raw-text reference extraction
//!
//! Recognised forms:
//! - `[[Target]]`, `[[Target|alias]]`, `[[Target#Heading]]` (direct)
//! - `![[Target]]` (embedded)
//! - `[label](path/to/Target.md)` and `![label](Target.md)`
//! - checklist items `- [x] [[Target]]` (collection notes)
//!
//! Anything inside fenced code blocks is ignored, except that fenced blocks
//! tagged with the query language are handed to the query extension.

use crate::note::ParsedStructure;
use regex::Regex;
use std::sync::OnceLock;

static WIKI_LINK_RE: OnceLock<Regex> = OnceLock::new();
static MD_LINK_RE: OnceLock<Regex> = OnceLock::new();
static CHECKLIST_RE: OnceLock<Regex> = OnceLock::new();
static LIST_PATH_RE: OnceLock<Regex> = OnceLock::new();

fn wiki_link_re() -> &'static Regex {
    WIKI_LINK_RE.get_or_init(|| {
        Regex::new(r"(!?)\[\[([^\[\]\n]+)\]\]").expect("Invalid wiki link regex pattern")
    })
}

fn md_link_re() -> &'static Regex {
    MD_LINK_RE.get_or_init(|| {
        Regex::new(r#"(!?)\[[^\]\n]*\]\(<?([^()<>\s]+(?:\s[^()<>"]+)*?)>?(?:\s+"[^"]*")?\)"#)
            .expect("Invalid markdown link regex pattern")
    })
}

fn checklist_re() -> &'static Regex {
    CHECKLIST_RE.get_or_init(|| {
        Regex::new(r"^\s*[-*+]\s+\[([ xX])\]\s+(!?\[\[[^\[\]\n]+\]\]|!?\[[^\]\n]*\]\([^)\n]+\))")
            .expect("Invalid checklist regex pattern")
    })
}

fn list_path_re() -> &'static Regex {
    LIST_PATH_RE.get_or_init(|| {
        Regex::new(r"^\s*(?:[-*+]|\d+\.)\s+([^\s\[\]()][^\[\]()\n]*?\.md)\s*$")
            .expect("Invalid list path regex pattern")
    })
}

/// One checklist line that points at a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub checked: bool,
    pub target: String,
}

/// Whether a markdown link target points at a local note
fn is_note_target(target: &str) -> bool {
    if target.contains("://") || target.starts_with('#') || target.starts_with("mailto:") {
        return false;
    }
    let path = target.split('#').next().unwrap_or(target);
    path.to_lowercase().ends_with(".md")
}

/// Replace the contents of fenced code blocks with empty lines
///
/// Line count is preserved so line-based scans stay aligned.
pub fn strip_code_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut fence: Option<&str> = None;
    for line in text.lines() {
        let trimmed = line.trim_start();
        match fence {
            Some(marker) => {
                if trimmed.starts_with(marker) {
                    fence = None;
                }
            }
            None => {
                if let Some(marker) = fence_marker(trimmed) {
                    fence = Some(marker);
                } else {
                    out.push_str(line);
                }
            }
        }
        out.push('\n');
    }
    out
}

fn fence_marker(trimmed: &str) -> Option<&'static str> {
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

/// Bodies of fenced code blocks tagged with `language`
pub fn query_blocks(text: &str, language: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<(&str, bool, Vec<&str>)> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();
        match current.take() {
            Some((marker, wanted, body)) => {
                if trimmed.starts_with(marker) {
                    if wanted {
                        blocks.push(body.join("\n"));
                    }
                } else {
                    let mut body = body;
                    body.push(line);
                    current = Some((marker, wanted, body));
                }
            }
            None => {
                if let Some(marker) = fence_marker(trimmed) {
                    let info = trimmed[marker.len()..].trim();
                    let wanted = info.eq_ignore_ascii_case(language);
                    current = Some((marker, wanted, Vec::new()));
                }
            }
        }
    }

    blocks
}

/// Checklist items whose text starts with a note reference
pub fn checklist_items(prose: &str) -> Vec<ChecklistItem> {
    let mut items = Vec::new();
    for line in prose.lines() {
        let Some(cap) = checklist_re().captures(line) else {
            continue;
        };
        let checked = &cap[1] != " ";
        let reference = &cap[2];
        let target = if let Some(wiki) = wiki_link_re().captures(reference) {
            wiki[2].to_string()
        } else if let Some(md) = md_link_re().captures(reference) {
            if !is_note_target(&md[2]) {
                continue;
            }
            md[2].to_string()
        } else {
            continue;
        };
        items.push(ChecklistItem { checked, target });
    }
    items
}

/// Direct and embedded references in raw note text, in order of appearance
pub fn parse_structure(text: &str) -> ParsedStructure {
    let prose = strip_code_blocks(text);
    let mut found: Vec<(usize, bool, String)> = Vec::new();

    for cap in wiki_link_re().captures_iter(&prose) {
        let start = cap.get(0).map(|m| m.start()).unwrap_or(0);
        let embedded = !cap[1].is_empty();
        found.push((start, embedded, cap[2].trim().to_string()));
    }

    for cap in md_link_re().captures_iter(&prose) {
        let target = cap[2].trim();
        if !is_note_target(target) {
            continue;
        }
        let start = cap.get(0).map(|m| m.start()).unwrap_or(0);
        let embedded = !cap[1].is_empty();
        found.push((start, embedded, target.to_string()));
    }

    found.sort_by_key(|(start, _, _)| *start);

    let mut structure = ParsedStructure::default();
    for (_, embedded, target) in found {
        if embedded {
            structure.embedded_references.push(target);
        } else {
            structure.direct_references.push(target);
        }
    }
    structure
}

/// Best-effort note mentions in free text (lossy)
///
/// Used only for rendered query output, where nothing better is available.
/// Passes run in order: bracketed references, parenthesised `.md` links,
/// then bare list items naming a `.md` path.
pub fn scrape_text_references(text: &str) -> Vec<String> {
    let mut refs = Vec::new();

    for cap in wiki_link_re().captures_iter(text) {
        refs.push(cap[2].trim().to_string());
    }

    for cap in md_link_re().captures_iter(text) {
        let target = cap[2].trim();
        if is_note_target(target) {
            refs.push(target.to_string());
        }
    }

    for line in text.lines() {
        if let Some(cap) = list_path_re().captures(line) {
            refs.push(cap[1].trim().to_string());
        }
    }

    refs
}
