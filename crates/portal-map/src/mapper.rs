//! Row-to-record mapping for the table sections.
//!
//! Each canonical field is resolved independently: synonyms through the
//! field matcher first, then exact fallback keys, then a fixed default. Every
//! input row yields exactly one record, in input order.

use std::fmt;

use portal_model::{
    FacultyRecord, GenericRow, PlacementRecord, PlacementType, ScalarValue, StudentRecord,
    TableKind, TableRecords,
};
use tracing::debug;

use crate::matcher::match_field;
use crate::patterns::{FACULTY_FIELDS, FieldSpec, PLACEMENT_FIELDS, STUDENT_FIELDS};

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFrom {
    /// The field matcher paired `synonym` with the row key `key`.
    Synonym { synonym: &'static str, key: String },
    /// An exact fallback key.
    Fallback(&'static str),
    /// Nothing usable; the field default applies.
    Default,
}

impl fmt::Display for ResolvedFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synonym { synonym, key } => write!(f, "'{key}' via synonym '{synonym}'"),
            Self::Fallback(key) => write!(f, "fallback key '{key}'"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// Outcome of resolving one canonical field against one row.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResolution {
    pub field: &'static str,
    pub value: Option<ScalarValue>,
    pub from: ResolvedFrom,
}

/// Resolves `spec` against `row`. Only truthy values are accepted; an empty
/// string or zero moves on to the next candidate.
pub fn resolve_field<R: GenericRow + ?Sized>(row: &R, spec: &FieldSpec) -> FieldResolution {
    let keys = row.keys();
    for &synonym in spec.synonyms {
        let Some(key) = match_field(synonym, keys.as_slice()) else {
            continue;
        };
        if let Some(value) = row.value(key).filter(ScalarValue::is_truthy) {
            return FieldResolution {
                field: spec.name,
                value: Some(value),
                from: ResolvedFrom::Synonym {
                    synonym,
                    key: key.to_string(),
                },
            };
        }
    }
    for &key in spec.fallback_keys {
        if let Some(value) = row.value(key).filter(ScalarValue::is_truthy) {
            return FieldResolution {
                field: spec.name,
                value: Some(value),
                from: ResolvedFrom::Fallback(key),
            };
        }
    }
    FieldResolution {
        field: spec.name,
        value: None,
        from: ResolvedFrom::Default,
    }
}

/// Permissive count parser: the leading integer of the text ("15 years" is
/// 15), zero when there is none. Negatives clamp to zero, overflow saturates.
pub fn parse_count(value: Option<&ScalarValue>) -> u32 {
    match value {
        None => 0,
        Some(ScalarValue::Number(n)) => {
            if n.is_nan() || *n <= 0.0 {
                0
            } else if *n >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                n.trunc() as u32
            }
        }
        Some(ScalarValue::Text(text)) => parse_leading_integer(text),
    }
}

fn parse_leading_integer(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if negative || digits.is_empty() {
        return 0;
    }
    digits.chars().fold(0u32, |acc, ch| {
        let digit = ch.to_digit(10).unwrap_or(0);
        acc.saturating_mul(10).saturating_add(digit)
    })
}

fn text_or_empty(resolution: &FieldResolution) -> String {
    resolution
        .value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn count_of(resolution: &FieldResolution) -> u32 {
    parse_count(resolution.value.as_ref())
}

fn resolve_all<R: GenericRow + ?Sized, const N: usize>(
    row: &R,
    specs: &[FieldSpec; N],
) -> [FieldResolution; N] {
    let resolved = specs.each_ref().map(|spec| resolve_field(row, spec));
    for resolution in &resolved {
        debug!(field = resolution.field, source = %resolution.from, "resolved field");
    }
    resolved
}

pub fn map_faculty_row<R: GenericRow + ?Sized>(row: &R) -> FacultyRecord {
    let [designation, count, phd, experience] = resolve_all(row, &FACULTY_FIELDS);
    FacultyRecord {
        designation: text_or_empty(&designation),
        count: count_of(&count),
        phd: count_of(&phd),
        experience: text_or_empty(&experience),
    }
}

pub fn map_student_row<R: GenericRow + ?Sized>(row: &R) -> StudentRecord {
    let [program, year, students, intake] = resolve_all(row, &STUDENT_FIELDS);
    StudentRecord {
        program: text_or_empty(&program),
        year: text_or_empty(&year),
        students: count_of(&students),
        intake: count_of(&intake),
    }
}

pub fn map_placement_row<R: GenericRow + ?Sized>(row: &R) -> PlacementRecord {
    let [company, package, placed, placement_type] = resolve_all(row, &PLACEMENT_FIELDS);
    PlacementRecord {
        company: text_or_empty(&company),
        package: text_or_empty(&package),
        students_placed: count_of(&placed),
        placement_type: placement_type
            .value
            .as_ref()
            .map(|value| PlacementType::parse_lenient(&value.to_string()))
            .unwrap_or_default(),
    }
}

pub fn map_faculty<R: GenericRow>(rows: &[R]) -> Vec<FacultyRecord> {
    rows.iter().map(map_faculty_row::<R>).collect()
}

pub fn map_students<R: GenericRow>(rows: &[R]) -> Vec<StudentRecord> {
    rows.iter().map(map_student_row::<R>).collect()
}

pub fn map_placements<R: GenericRow>(rows: &[R]) -> Vec<PlacementRecord> {
    rows.iter().map(map_placement_row::<R>).collect()
}

/// Maps rows into the typed table for `kind`.
pub fn map_table<R: GenericRow>(kind: TableKind, rows: &[R]) -> TableRecords {
    let records = match kind {
        TableKind::Faculty => TableRecords::Faculty(map_faculty(rows)),
        TableKind::Student => TableRecords::Student(map_students(rows)),
        TableKind::Placement => TableRecords::Placement(map_placements(rows)),
    };
    debug!(kind = %kind, rows = rows.len(), "mapped table rows");
    records
}

/// Field specs consulted for `kind`.
pub fn field_specs(kind: TableKind) -> &'static [FieldSpec] {
    match kind {
        TableKind::Faculty => &FACULTY_FIELDS,
        TableKind::Student => &STUDENT_FIELDS,
        TableKind::Placement => &PLACEMENT_FIELDS,
    }
}

/// Per-field resolution trace for one row, for previews and diagnostics.
pub fn explain_row<R: GenericRow + ?Sized>(kind: TableKind, row: &R) -> Vec<FieldResolution> {
    field_specs(kind)
        .iter()
        .map(|spec| resolve_field(row, spec))
        .collect()
}

#[cfg(test)]
mod tests {
    use portal_model::FieldRow;

    use super::*;

    fn row(pairs: &[(&str, &str)]) -> FieldRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn parse_count_takes_leading_integer() {
        let parse = |s: &str| parse_count(Some(&ScalarValue::text(s)));
        assert_eq!(parse("15 years"), 15);
        assert_eq!(parse("  42"), 42);
        assert_eq!(parse("+7"), 7);
        assert_eq!(parse("abc"), 0);
        assert_eq!(parse("-3"), 0);
        assert_eq!(parse("99999999999"), u32::MAX);
        assert_eq!(parse_count(Some(&ScalarValue::Number(12.9))), 12);
        assert_eq!(parse_count(Some(&ScalarValue::Number(-4.0))), 0);
        assert_eq!(parse_count(None), 0);
    }

    #[test]
    fn synonyms_resolve_through_matcher() {
        let faculty = map_faculty_row(&row(&[
            ("title", "Professor"),
            ("total", "10"),
            ("doctorate", "8"),
            ("exp", "15+ years"),
        ]));
        assert_eq!(
            faculty,
            FacultyRecord {
                designation: "Professor".to_string(),
                count: 10,
                phd: 8,
                experience: "15+ years".to_string(),
            }
        );
    }

    #[test]
    fn falsy_synonym_values_fall_through_to_defaults() {
        let record = map_student_row(&row(&[("program", ""), ("intake", "0")]));
        assert_eq!(record.program, "");
        assert_eq!(record.intake, 0);
        assert_eq!(record.year, "");
    }

    #[test]
    fn placement_type_defaults_to_on_campus() {
        let record = map_placement_row(&row(&[("company", "Acme"), ("ctc", "12 LPA")]));
        assert_eq!(record.placement_type, PlacementType::OnCampus);
        assert_eq!(record.package, "12 LPA");
        let off = map_placement_row(&row(&[("mode", "Off Campus")]));
        assert_eq!(off.placement_type, PlacementType::OffCampus);
    }

    #[test]
    fn explain_row_reports_sources() {
        let trace = explain_row(TableKind::Faculty, &row(&[("Designation Name", "HoD")]));
        assert_eq!(trace.len(), 4);
        assert_eq!(
            trace[0].from,
            ResolvedFrom::Synonym {
                synonym: "designation",
                key: "Designation Name".to_string(),
            }
        );
        assert_eq!(trace[1].from, ResolvedFrom::Default);
    }
}
