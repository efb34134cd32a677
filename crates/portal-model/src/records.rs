//! Strongly-typed records for the table-backed sections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::section::SectionId;
use crate::value::ScalarValue;

/// Which typed table a section holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableKind {
    Faculty,
    Student,
    Placement,
}

impl TableKind {
    pub fn section(self) -> SectionId {
        match self {
            Self::Faculty => SectionId::FACULTY,
            Self::Student => SectionId::STUDENTS,
            Self::Placement => SectionId::PLACEMENTS,
        }
    }

    /// Title used for exported section documents.
    pub fn export_title(self) -> &'static str {
        match self {
            Self::Faculty => "Faculty Data",
            Self::Student => "Student Data",
            Self::Placement => "Placement Data",
        }
    }

    /// File stem of a per-section export, e.g. `Faculty_Data_2024-25`.
    pub fn export_stem(self, year: &str) -> String {
        format!("{}_{year}", self.export_title().replace(' ', "_"))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Faculty => "faculty",
            Self::Student => "student",
            Self::Placement => "placement",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared view over the three record types.
pub trait TabularRecord: Clone {
    const KIND: TableKind;
    /// Canonical field names in storage order.
    const FIELDS: &'static [&'static str];

    /// Field values in the same order as [`Self::FIELDS`].
    fn values(&self) -> Vec<ScalarValue>;

    /// Row appended by a manual "add row".
    fn template() -> Self;

    fn fields(&self) -> Vec<(&'static str, ScalarValue)> {
        Self::FIELDS.iter().copied().zip(self.values()).collect()
    }

    fn field(&self, name: &str) -> Option<ScalarValue> {
        Self::FIELDS
            .iter()
            .position(|field| *field == name)
            .and_then(|idx| self.values().into_iter().nth(idx))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyRecord {
    pub designation: String,
    pub count: u32,
    /// Expected to stay at or below `count`; not enforced.
    pub phd: u32,
    pub experience: String,
}

impl TabularRecord for FacultyRecord {
    const KIND: TableKind = TableKind::Faculty;
    const FIELDS: &'static [&'static str] = &["designation", "count", "phd", "experience"];

    fn values(&self) -> Vec<ScalarValue> {
        vec![
            ScalarValue::text(&self.designation),
            self.count.into(),
            self.phd.into(),
            ScalarValue::text(&self.experience),
        ]
    }

    fn template() -> Self {
        Self {
            designation: "New Position".to_string(),
            count: 0,
            phd: 0,
            experience: "0-5 years".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub program: String,
    /// Programme year label ("I Year"), unrelated to the academic year.
    pub year: String,
    pub students: u32,
    pub intake: u32,
}

impl TabularRecord for StudentRecord {
    const KIND: TableKind = TableKind::Student;
    const FIELDS: &'static [&'static str] = &["program", "year", "students", "intake"];

    fn values(&self) -> Vec<ScalarValue> {
        vec![
            ScalarValue::text(&self.program),
            ScalarValue::text(&self.year),
            self.students.into(),
            self.intake.into(),
        ]
    }

    fn template() -> Self {
        Self {
            program: "New Program".to_string(),
            year: "I Year".to_string(),
            students: 0,
            intake: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementType {
    #[default]
    #[serde(rename = "On-Campus")]
    OnCampus,
    #[serde(rename = "Off-Campus")]
    OffCampus,
}

impl PlacementType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnCampus => "On-Campus",
            Self::OffCampus => "Off-Campus",
        }
    }

    /// Lenient parse of an imported label: anything mentioning "off"
    /// ("Off Campus", "off_campus", "OFF") is off-campus.
    pub fn parse_lenient(raw: &str) -> Self {
        let compact: String = raw
            .to_lowercase()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect();
        if compact.contains("off") {
            Self::OffCampus
        } else {
            Self::OnCampus
        }
    }
}

impl fmt::Display for PlacementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub company: String,
    /// Free-form, normally "<n> LPA".
    pub package: String,
    #[serde(rename = "studentsPlaced")]
    pub students_placed: u32,
    #[serde(rename = "type", default)]
    pub placement_type: PlacementType,
}

impl TabularRecord for PlacementRecord {
    const KIND: TableKind = TableKind::Placement;
    const FIELDS: &'static [&'static str] = &["company", "package", "studentsPlaced", "type"];

    fn values(&self) -> Vec<ScalarValue> {
        vec![
            ScalarValue::text(&self.company),
            ScalarValue::text(&self.package),
            self.students_placed.into(),
            ScalarValue::text(self.placement_type.as_str()),
        ]
    }

    fn template() -> Self {
        Self {
            company: "New Company".to_string(),
            package: "0 LPA".to_string(),
            students_placed: 0,
            placement_type: PlacementType::OnCampus,
        }
    }
}

/// A full ordered table for one (year, section) cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRecords {
    Faculty(Vec<FacultyRecord>),
    Student(Vec<StudentRecord>),
    Placement(Vec<PlacementRecord>),
}

impl TableRecords {
    pub fn empty(kind: TableKind) -> Self {
        match kind {
            TableKind::Faculty => Self::Faculty(Vec::new()),
            TableKind::Student => Self::Student(Vec::new()),
            TableKind::Placement => Self::Placement(Vec::new()),
        }
    }

    pub fn kind(&self) -> TableKind {
        match self {
            Self::Faculty(_) => TableKind::Faculty,
            Self::Student(_) => TableKind::Student,
            Self::Placement(_) => TableKind::Placement,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Faculty(rows) => rows.len(),
            Self::Student(rows) => rows.len(),
            Self::Placement(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single record of any table kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRecord {
    Faculty(FacultyRecord),
    Student(StudentRecord),
    Placement(PlacementRecord),
}

impl TableRecord {
    pub fn template(kind: TableKind) -> Self {
        match kind {
            TableKind::Faculty => Self::Faculty(FacultyRecord::template()),
            TableKind::Student => Self::Student(StudentRecord::template()),
            TableKind::Placement => Self::Placement(PlacementRecord::template()),
        }
    }

    pub fn kind(&self) -> TableKind {
        match self {
            Self::Faculty(_) => TableKind::Faculty,
            Self::Student(_) => TableKind::Student,
            Self::Placement(_) => TableKind::Placement,
        }
    }
}

impl From<FacultyRecord> for TableRecord {
    fn from(value: FacultyRecord) -> Self {
        Self::Faculty(value)
    }
}

impl From<StudentRecord> for TableRecord {
    fn from(value: StudentRecord) -> Self {
        Self::Student(value)
    }
}

impl From<PlacementRecord> for TableRecord {
    fn from(value: PlacementRecord) -> Self {
        Self::Placement(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_serializes_with_display_names() {
        let record = PlacementRecord {
            company: "Acme".to_string(),
            package: "12 LPA".to_string(),
            students_placed: 4,
            placement_type: PlacementType::OffCampus,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["studentsPlaced"], 4);
        assert_eq!(json["type"], "Off-Campus");
    }

    #[test]
    fn placement_type_parse_is_lenient() {
        assert_eq!(PlacementType::parse_lenient("Off Campus"), PlacementType::OffCampus);
        assert_eq!(PlacementType::parse_lenient("off_campus"), PlacementType::OffCampus);
        assert_eq!(PlacementType::parse_lenient("On-Campus"), PlacementType::OnCampus);
        assert_eq!(PlacementType::parse_lenient("pool drive"), PlacementType::OnCampus);
    }

    #[test]
    fn fields_follow_canonical_order() {
        let fields = FacultyRecord::template().fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["designation", "count", "phd", "experience"]);
        assert_eq!(
            StudentRecord::template().field("year"),
            Some(ScalarValue::text("I Year"))
        );
        assert_eq!(TableKind::Placement.export_stem("2024-25"), "Placement_Data_2024-25");
    }
}
