//! Annual report for one academic year.

use chrono::NaiveDateTime;
use portal_core::{InstitutionConfig, YearSnapshot};
use portal_model::{SECTION_COUNT, Section, SectionId, SectionTextData};
use tracing::debug;

use crate::common::{WIDE_RULE, format_date, format_time, rule, truthy_text};
use crate::programs::{PROGRAM_GROUPS, curriculum_revision};
use crate::summary::{FacultySummary, PlacementSummary, StudentSummary, occupancy};

const PLACEHOLDER: &str = "  [Data to be filled]\n\n";

fn field(data: Option<&SectionTextData>, key: &str) -> Option<String> {
    truthy_text(data.and_then(|data| data.get(key)))
}

fn header(out: &mut String, snapshot: &YearSnapshot<'_>, institution: &InstitutionConfig) {
    out.push_str(&format!("{}\n", institution.university.to_uppercase()));
    out.push_str(&format!("DEPARTMENT OF {}\n", institution.department.to_uppercase()));
    out.push_str(&format!("ANNUAL REPORT {}\n\n", snapshot.year));
    out.push_str(&format!("{}\n\n", rule('=', WIDE_RULE)));
}

fn executive_summary(
    out: &mut String,
    snapshot: &YearSnapshot<'_>,
    institution: &InstitutionConfig,
    generated_at: &NaiveDateTime,
) {
    out.push_str("EXECUTIVE SUMMARY\n");
    out.push_str(&format!("{}\n\n", rule('-', WIDE_RULE)));
    out.push_str(&format!("Academic Year: {}\n", snapshot.year));
    out.push_str(&format!("Department: {}\n", institution.department));
    out.push_str(&format!("Report Generated: {}\n", format_date(generated_at)));
    out.push_str(&format!("Total Report Sections: {SECTION_COUNT}\n\n"));

    if !snapshot.faculty.is_empty() {
        let faculty = FacultySummary::of(snapshot.faculty);
        out.push_str(&format!("Faculty Strength: {} members\n", faculty.total));
        out.push_str(&format!(
            "Faculty with Ph.D.: {} ({}%)\n",
            faculty.phd,
            faculty.phd_percent()
        ));
    }
    if !snapshot.students.is_empty() {
        let students = StudentSummary::of(snapshot.students);
        out.push_str(&format!("Student Strength: {} students\n", students.students));
        out.push_str(&format!("Intake Capacity: {} seats\n", students.intake));
        out.push_str(&format!("Occupancy Rate: {}%\n", students.occupancy_percent()));
    }
    if !snapshot.placements.is_empty() {
        let placements = PlacementSummary::of(snapshot.placements);
        out.push_str(&format!("Students Placed: {}\n", placements.placed));
        out.push_str(&format!("Average Package: {}\n", placements.average_label()));
        out.push_str(&format!("Highest Package: {}\n", placements.highest_label()));
    }

    out.push_str(&format!("\n{}\n\n", rule('=', WIDE_RULE)));
    out.push_str(&format!(
        "Sections with Data: {}\n\n",
        snapshot.sections_with_data.len()
    ));
}

fn programs_block(out: &mut String, year: &str) {
    out.push_str(&format!(
        "Programs Offered (Curriculum Revision: {}):\n\n",
        curriculum_revision(year)
    ));
    for group in &PROGRAM_GROUPS {
        out.push_str(&format!("{}:\n", group.heading));
        for (idx, program) in group.programs.iter().enumerate() {
            out.push_str(&format!("  {}. {program} - {}\n", idx + 1, group.duration));
        }
        out.push('\n');
    }
}

fn hod_block(out: &mut String, hod: &SectionTextData) {
    out.push_str("Head of Department Details:\n\n");
    let lines = [
        ("Name:         ", "hodName"),
        ("Email:        ", "email"),
        ("Phone:        ", "phone"),
        ("Qualification:", "qualification"),
    ];
    for (label, key) in lines {
        if let Some(value) = field(Some(hod), key) {
            out.push_str(&format!("  {label} {value}\n"));
        }
    }
    out.push('\n');
}

fn section_body(out: &mut String, section: SectionId, snapshot: &YearSnapshot<'_>) {
    match section {
        SectionId::SCHOOL => match field(snapshot.school, "schoolName") {
            Some(name) => out.push_str(&format!("School Name: {name}\n\n")),
            None => out.push_str(PLACEHOLDER),
        },
        // Reads `year`, not the seeded `yearOfEstablishment`.
        SectionId::ESTABLISHMENT => match field(snapshot.establishment, "year") {
            Some(year) => out.push_str(&format!("Year of Establishment: {year}\n\n")),
            None => out.push_str(PLACEHOLDER),
        },
        SectionId::HOD => match snapshot.hod {
            Some(hod) => hod_block(out, hod),
            None => out.push_str(PLACEHOLDER),
        },
        SectionId::PROGRAMS => programs_block(out, snapshot.year.as_str()),
        SectionId::FACULTY if !snapshot.faculty.is_empty() => {
            out.push_str("Faculty Details:\n\n");
            for (idx, row) in snapshot.faculty.iter().enumerate() {
                out.push_str(&format!(
                    "  {}. {}: {} faculty members ({} with Ph.D.)\n",
                    idx + 1,
                    row.designation,
                    row.count,
                    row.phd
                ));
                out.push_str(&format!("     Experience: {}\n\n", row.experience));
            }
        }
        SectionId::STUDENTS if !snapshot.students.is_empty() => {
            out.push_str("Student Enrollment:\n\n");
            for (idx, row) in snapshot.students.iter().enumerate() {
                out.push_str(&format!(
                    "  {}. {} {}: {}/{} students ({}% occupancy)\n\n",
                    idx + 1,
                    row.program,
                    row.year,
                    row.students,
                    row.intake,
                    occupancy(row)
                ));
            }
        }
        SectionId::PLACEMENTS if !snapshot.placements.is_empty() => {
            out.push_str("Placement Statistics:\n\n");
            for (idx, row) in snapshot.placements.iter().enumerate() {
                out.push_str(&format!(
                    "  {}. {}: {} students placed @ {}\n",
                    idx + 1,
                    row.company,
                    row.students_placed,
                    row.package
                ));
                out.push_str(&format!("     Type: {}\n\n", row.placement_type));
            }
        }
        _ => out.push_str(PLACEHOLDER),
    }
}

fn footer(out: &mut String, institution: &InstitutionConfig, generated_at: &NaiveDateTime) {
    out.push_str(&format!("{}\n\n", rule('=', WIDE_RULE)));
    out.push_str(&format!(
        "This report was generated on {} at {}\n",
        format_date(generated_at),
        format_time(generated_at)
    ));
    out.push_str(&format!(
        "{} - Department of {}\n",
        institution.university, institution.department
    ));
    out.push_str(&format!(
        "For queries, contact: {} | {}\n",
        institution.contact_email, institution.contact_phone
    ));
}

/// Full annual report for `snapshot.year`: executive summary, then one block
/// per section with data, then the footer.
pub fn annual_report_text(
    snapshot: &YearSnapshot<'_>,
    institution: &InstitutionConfig,
    generated_at: &NaiveDateTime,
) -> String {
    let mut out = String::new();
    header(&mut out, snapshot, institution);
    executive_summary(&mut out, snapshot, institution, generated_at);

    for (idx, section) in snapshot.sections_with_data.iter().enumerate() {
        let title = Section::get(*section).title;
        out.push_str(&format!("{:02}. {}\n", idx + 1, title.to_uppercase()));
        out.push_str(&format!("{}\n\n", rule('-', WIDE_RULE)));
        section_body(&mut out, *section, snapshot);
        out.push_str(&format!("{}\n\n", rule('-', WIDE_RULE)));
    }

    footer(&mut out, institution, generated_at);
    debug!(
        year = %snapshot.year,
        sections = snapshot.sections_with_data.len(),
        bytes = out.len(),
        "rendered annual report"
    );
    out
}
