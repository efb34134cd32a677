//! Plain-text report of one table section.

use chrono::NaiveDateTime;
use portal_model::{TableRecords, TabularRecord};

use crate::common::{SECTION_RULE, format_timestamp, rule, truthy_text};

/// Title, tab-separated header and numbered rows, the record count, then the
/// generation stamp. Falsy values (empty text, zero) print as empty cells.
pub fn section_report_text<R: TabularRecord>(
    title: &str,
    records: &[R],
    year: &str,
    generated_at: &NaiveDateTime,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} - ACADEMIC YEAR {year}\n", title.to_uppercase()));
    out.push_str(&format!("{}\n\n", rule('=', SECTION_RULE)));

    if records.is_empty() {
        out.push_str("No data available for this section.\n");
    } else {
        out.push_str(&format!("{}\n", R::FIELDS.join("\t")));
        out.push_str(&format!("{}\n", rule('-', SECTION_RULE)));
        for (idx, record) in records.iter().enumerate() {
            let cells: Vec<String> = record
                .values()
                .iter()
                .map(|value| truthy_text(Some(value)).unwrap_or_default())
                .collect();
            out.push_str(&format!("{}.\t{}\n", idx + 1, cells.join("\t")));
        }
        out.push_str(&format!("\nTotal Records: {}\n", records.len()));
    }

    out.push_str(&format!("\nGenerated on: {}\n", format_timestamp(generated_at)));
    out.push_str(&format!("Academic Year: {year}\n"));
    out
}

/// [`section_report_text`] titled after the table kind.
pub fn table_report_text(
    records: &TableRecords,
    year: &str,
    generated_at: &NaiveDateTime,
) -> String {
    let title = records.kind().export_title();
    match records {
        TableRecords::Faculty(rows) => section_report_text(title, rows, year, generated_at),
        TableRecords::Student(rows) => section_report_text(title, rows, year, generated_at),
        TableRecords::Placement(rows) => section_report_text(title, rows, year, generated_at),
    }
}
