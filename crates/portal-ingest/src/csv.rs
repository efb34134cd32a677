//! Header-first CSV parsing.
//!
//! Values are split on every comma; quoted fields are not interpreted beyond
//! dropping one leading and one trailing double quote.

use csv::{ReaderBuilder, StringRecord, Trim};
use portal_model::FieldRow;
use tracing::{debug, warn};

fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

/// Lower-cased header with all whitespace removed.
fn header_key(header: &str) -> String {
    strip_quotes(header)
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

fn is_blank_line(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty) && record.len() <= 1
}

/// Parses `text` into rows keyed by the normalised first-line headers.
///
/// Missing trailing values become empty strings; surplus values are dropped.
/// Empty input yields no rows.
pub fn parse_csv(text: &str) -> Vec<FieldRow> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                warn!(line, %error, "skipping unreadable CSV line");
                continue;
            }
        };
        if is_blank_line(&record) {
            continue;
        }
        let Some(keys) = headers.as_ref() else {
            headers = Some(record.iter().map(header_key).collect());
            continue;
        };
        let row: FieldRow = keys
            .iter()
            .enumerate()
            .map(|(idx, key)| {
                let value = record.get(idx).map(strip_quotes).unwrap_or_default();
                (key.clone(), value.to_string())
            })
            .collect();
        rows.push(row);
    }
    debug!(rows = rows.len(), "parsed CSV document");
    rows
}
