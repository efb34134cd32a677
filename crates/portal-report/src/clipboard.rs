//! Short plain-text summary of a table section for pasting elsewhere.

use portal_core::InstitutionConfig;
use portal_model::{Section, TableRecords};

pub fn clipboard_text(records: &TableRecords, institution: &InstitutionConfig) -> String {
    let title = Section::get(records.kind().section()).title;
    let lines: Vec<String> = match records {
        TableRecords::Faculty(rows) => rows
            .iter()
            .enumerate()
            .map(|(idx, r)| {
                format!(
                    "{}. {}: {} faculty ({} with Ph.D)",
                    idx + 1,
                    r.designation,
                    r.count,
                    r.phd
                )
            })
            .collect(),
        TableRecords::Student(rows) => rows
            .iter()
            .enumerate()
            .map(|(idx, r)| {
                format!(
                    "{}. {} {}: {}/{} students",
                    idx + 1,
                    r.program,
                    r.year,
                    r.students,
                    r.intake
                )
            })
            .collect(),
        TableRecords::Placement(rows) => rows
            .iter()
            .enumerate()
            .map(|(idx, r)| {
                format!(
                    "{}. {}: {} students @ {}",
                    idx + 1,
                    r.company,
                    r.students_placed,
                    r.package
                )
            })
            .collect(),
    };
    format!(
        "{} Annual Report - {title}\n{}",
        institution.short_name,
        lines.join("\n")
    )
}
