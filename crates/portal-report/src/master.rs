//! Whole-portal export across every academic year.

use chrono::NaiveDateTime;
use portal_core::{InstitutionConfig, YearSnapshot};
use portal_model::{
    FacultyRecord, PlacementRecord, SECTION_COUNT, SectionId, StudentRecord, section_catalogue,
};
use tracing::info_span;

use crate::common::{
    BLOCK_RULE, WIDE_RULE, YEAR_RULE, format_date, format_timestamp, rule,
};
use crate::summary::{FacultySummary, PlacementSummary, StudentSummary, occupancy};

/// Sections flagged as filled in the export, whatever the store holds.
pub const FLAGGED_SECTIONS: [SectionId; 3] =
    [SectionId::FACULTY, SectionId::STUDENTS, SectionId::PLACEMENTS];

fn block_heading(out: &mut String, title: &str) {
    out.push_str(&format!("{title}\n"));
    out.push_str(&format!("{}\n", rule('-', BLOCK_RULE)));
}

fn faculty_block(out: &mut String, rows: &[FacultyRecord]) {
    const TITLE: &str = "Section 5: Number of Faculty";
    if rows.is_empty() {
        out.push_str(&format!("{TITLE} - No data available\n\n"));
        return;
    }
    block_heading(out, TITLE);
    for row in rows {
        out.push_str(&format!(
            "\u{2022} {}: {} faculty ({} with Ph.D.)\n",
            row.designation, row.count, row.phd
        ));
        out.push_str(&format!("  Experience: {}\n", row.experience));
    }
    let summary = FacultySummary::of(rows);
    out.push_str(&format!("\nTotal Faculty: {}\n", summary.total));
    out.push_str(&format!("Total with PhD: {}\n\n", summary.phd));
}

fn student_block(out: &mut String, rows: &[StudentRecord]) {
    const TITLE: &str = "Section 7: Program-wise Student Strength";
    if rows.is_empty() {
        out.push_str(&format!("{TITLE} - No data available\n\n"));
        return;
    }
    block_heading(out, TITLE);
    for row in rows {
        out.push_str(&format!(
            "\u{2022} {} {}: {}/{} students ({}%)\n",
            row.program,
            row.year,
            row.students,
            row.intake,
            occupancy(row)
        ));
    }
    let summary = StudentSummary::of(rows);
    out.push_str(&format!("\nTotal Students: {}\n", summary.students));
    out.push_str(&format!("Total Intake: {}\n\n", summary.intake));
}

fn placement_block(out: &mut String, rows: &[PlacementRecord]) {
    const TITLE: &str = "Section 20: Placements";
    if rows.is_empty() {
        out.push_str(&format!("{TITLE} - No data available\n\n"));
        return;
    }
    block_heading(out, TITLE);
    for row in rows {
        out.push_str(&format!(
            "\u{2022} {}: {} students @ {} ({})\n",
            row.company, row.students_placed, row.package, row.placement_type
        ));
    }
    let summary = PlacementSummary::of(rows);
    out.push_str(&format!("\nTotal Students Placed: {}\n", summary.placed));
    out.push_str(&format!("Highest Package: {}\n", summary.highest_label()));
    out.push_str(&format!("Average Package: {}\n\n", summary.average_label()));
}

/// Export of every year in `snapshots` (in the given order), followed by the
/// full section list.
pub fn master_export_text(
    snapshots: &[YearSnapshot<'_>],
    institution: &InstitutionConfig,
    generated_at: &NaiveDateTime,
) -> String {
    let _span = info_span!("master_export", years = snapshots.len()).entered();
    let mut out = String::new();

    out.push_str(&format!("{} - Annual Report System\n", institution.university));
    out.push_str("Complete Data Export - All Sections & Academic Years\n");
    out.push_str(&format!("Generated on: {}\n", format_timestamp(generated_at)));
    out.push_str(&format!("Department: {}\n\n", institution.department));
    out.push_str(&format!("{}\n\n", rule('=', WIDE_RULE)));

    let first = snapshots.first().map(|s| s.year.as_str()).unwrap_or_default();
    let last = snapshots.last().map(|s| s.year.as_str()).unwrap_or_default();
    out.push_str("EXECUTIVE SUMMARY:\n");
    out.push_str(&format!("- Total Report Sections: {SECTION_COUNT}\n"));
    out.push_str(&format!("- Sections with Data: {}\n", FLAGGED_SECTIONS.len()));
    out.push_str(&format!(
        "- Academic Years Covered: {} ({first} to {last})\n",
        snapshots.len()
    ));
    out.push_str(&format!("- Data Export Date: {}\n\n", format_date(generated_at)));
    out.push_str(&format!("{}\n\n", rule('=', WIDE_RULE)));

    for snapshot in snapshots {
        out.push_str(&format!("ACADEMIC YEAR: {}\n", snapshot.year));
        out.push_str(&format!("{}\n\n", rule('-', YEAR_RULE)));
        faculty_block(&mut out, snapshot.faculty);
        student_block(&mut out, snapshot.students);
        placement_block(&mut out, snapshot.placements);
        out.push_str(&format!("{}\n\n", rule('-', YEAR_RULE)));
    }

    out.push_str("COMPLETE SECTIONS LIST:\n");
    out.push_str(&format!("{}\n", rule('-', YEAR_RULE)));
    for section in section_catalogue() {
        let mark = if FLAGGED_SECTIONS.contains(&section.id) {
            " \u{2713} HAS DATA"
        } else {
            " (Template Ready)"
        };
        out.push_str(&format!("{:02}. {}{mark}\n", section.id.get(), section.title));
    }

    out.push_str(&format!("\n{}\n", rule('=', WIDE_RULE)));
    out.push_str(&format!(
        "End of Report - Generated by {} Annual Report System\n",
        institution.short_name
    ));
    out.push_str(&format!("For support, contact: {}\n", institution.support_email));
    out
}
