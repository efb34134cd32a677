//! CSV export of record tables.
//!
//! Text containing a comma is wrapped in double quotes; embedded quotes are
//! written as-is. Numbers are never quoted.

use portal_model::{ScalarValue, TableRecords, TabularRecord};

fn cell(value: &ScalarValue) -> String {
    match value {
        ScalarValue::Text(text) if text.contains(',') => format!("\"{text}\""),
        other => other.to_string(),
    }
}

/// Header line of canonical field names, then one line per record, joined
/// with `\n` and no trailing newline. Empty input yields an empty string.
pub fn to_csv<R: TabularRecord>(records: &[R]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(R::FIELDS.join(","));
    for record in records {
        let cells: Vec<String> = record.values().iter().map(cell).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// [`to_csv`] over any table kind.
pub fn table_to_csv(records: &TableRecords) -> String {
    match records {
        TableRecords::Faculty(rows) => to_csv(rows),
        TableRecords::Student(rows) => to_csv(rows),
        TableRecords::Placement(rows) => to_csv(rows),
    }
}
