//! Key/value extraction from free-form text documents.

use std::sync::LazyLock;

use portal_model::FieldRow;
use regex::Regex;
use tracing::debug;

/// Line grammars in priority order: `key: value`, `key = value`, `- key: value`.
static LINE_GRAMMARS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"^([^:]+):\s*(.+)$").expect("Invalid colon pair regex"),
        Regex::new(r"^([^=]+)=\s*(.+)$").expect("Invalid equals pair regex"),
        Regex::new(r"^-\s*([^:]+):\s*(.+)$").expect("Invalid dash pair regex"),
    ]
});

fn text_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    LINE_GRAMMARS.iter().find_map(|grammar| {
        let captures = grammar.captures(line)?;
        let key = text_key(captures.get(1)?.as_str());
        let value = captures.get(2)?.as_str().trim().to_string();
        Some((key, value))
    })
}

/// Merges every recognised pair into a single row. Later lines overwrite
/// earlier ones with the same key; unrecognised lines are ignored. Yields
/// `None` when no line matched.
pub fn parse_text(text: &str) -> Option<FieldRow> {
    let mut row = FieldRow::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some((key, value)) if !key.is_empty() => row.insert(key, value),
            _ => {}
        }
    }
    debug!(fields = row.len(), "parsed text document");
    (!row.is_empty()).then_some(row)
}
