//! The fixed catalogue of report sections.
//!
//! Sections 5, 7 and 20 hold typed tables; every other section holds a
//! free-form text bag. Sections 1-4 describe the school itself and are stored
//! once in the master partition instead of per academic year.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::records::TableKind;

pub const SECTION_COUNT: u8 = 24;

/// Identifier of one of the 24 report sections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct SectionId(u8);

impl SectionId {
    pub const SCHOOL: Self = Self(1);
    pub const ESTABLISHMENT: Self = Self(2);
    pub const HOD: Self = Self(3);
    pub const PROGRAMS: Self = Self(4);
    pub const FACULTY: Self = Self(5);
    pub const STUDENTS: Self = Self(7);
    pub const PLACEMENTS: Self = Self(20);

    pub fn new(id: u8) -> Result<Self, PortalError> {
        if (1..=SECTION_COUNT).contains(&id) {
            Ok(Self(id))
        } else {
            Err(PortalError::InvalidSectionId(id.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Sections 1-4 live in the master partition.
    pub fn is_master_scoped(self) -> bool {
        self.0 <= 4
    }

    pub fn shape(self) -> SectionShape {
        match self.0 {
            5 => SectionShape::Table(TableKind::Faculty),
            7 => SectionShape::Table(TableKind::Student),
            20 => SectionShape::Table(TableKind::Placement),
            _ => SectionShape::Text,
        }
    }

    pub fn table_kind(self) -> Option<TableKind> {
        match self.shape() {
            SectionShape::Table(kind) => Some(kind),
            SectionShape::Text => None,
        }
    }

    pub fn is_table(self) -> bool {
        self.table_kind().is_some()
    }

    /// All section ids in ascending order.
    pub fn all() -> impl Iterator<Item = SectionId> {
        (1..=SECTION_COUNT).map(Self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for SectionId {
    type Error = PortalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for u8 {
    fn from(value: SectionId) -> Self {
        value.0
    }
}

impl FromStr for SectionId {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u8>()
            .map_err(|_| PortalError::InvalidSectionId(s.to_string()))?;
        Self::new(id)
    }
}

/// Storage shape of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    Table(TableKind),
    Text,
}

/// Presentation-only colour tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionColor {
    Primary,
    Accent,
}

/// One entry of the section catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub description: &'static str,
    pub color: SectionColor,
}

const CATALOGUE: [(&str, &str); SECTION_COUNT as usize] = [
    ("Name of the School", "School information and details"),
    ("Year of Establishment", "Establishment year and history"),
    ("Name of the HoD", "Head of Department information"),
    ("Programs Offered", "UG, PG, and Ph.D programs"),
    ("Number of Faculty", "Faculty strength by designation"),
    ("Number of Non-Teaching Staff", "Non-teaching staff details"),
    ("Program-wise Student Strength", "Student enrollment by program"),
    ("Ph.D Degrees obtained by Faculty", "Faculty Ph.D achievements"),
    (
        "Research (Ph.D degree) Guidance by Faculty",
        "Faculty research supervision",
    ),
    (
        "Recharging Programs Organized by Various Departments",
        "Organized training programs",
    ),
    (
        "Recharging Programs Attended by Faculty",
        "Faculty attended programs",
    ),
    (
        "Ongoing / Completed Funded Research Projects by Faculty",
        "Research projects with funding",
    ),
    (
        "Ongoing / Completed Consultancy Projects by Faculty",
        "Consultancy projects",
    ),
    (
        "Research Profile of the Department",
        "Publications and research output",
    ),
    (
        "Books / Book Chapters / Monograph etc., Published",
        "Faculty publications",
    ),
    ("Patents published by faculty", "Patent details and status"),
    ("MoUs / Collaborations", "Institutional collaborations"),
    (
        "Significant Achievements / Recognitions of Faculty",
        "Faculty awards and recognition",
    ),
    (
        "Significant Achievements / Recognitions of Students",
        "Student awards and achievements",
    ),
    ("Placements", "Placement statistics"),
    ("Outcomes (confirm label)", "Higher studies and outcomes"),
    ("Result analysis", "Semester-wise results"),
    (
        "Steps to improve Academic Performance of Students",
        "Student improvement strategies",
    ),
    (
        "Steps to improve Faculty Engagement / Research Projects / External Funding",
        "Faculty development initiatives",
    ),
];

impl Section {
    pub fn get(id: SectionId) -> Self {
        let (title, description) = CATALOGUE[usize::from(id.0 - 1)];
        let color = if id.0 % 2 == 1 {
            SectionColor::Primary
        } else {
            SectionColor::Accent
        };
        Self {
            id,
            title,
            description,
            color,
        }
    }

    pub fn shape(&self) -> SectionShape {
        self.id.shape()
    }
}

/// Every section in id order.
pub fn section_catalogue() -> Vec<Section> {
    SectionId::all().map(Section::get).collect()
}

/// Sections whose title or description contains `term` (case-insensitive).
/// A blank term returns the whole catalogue.
pub fn search_sections(term: &str) -> Vec<Section> {
    let needle = term.trim().to_lowercase();
    section_catalogue()
        .into_iter()
        .filter(|section| {
            needle.is_empty()
                || section.title.to_lowercase().contains(&needle)
                || section.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_partition_sections() {
        let tables: Vec<u8> = SectionId::all()
            .filter(|id| id.is_table())
            .map(SectionId::get)
            .collect();
        assert_eq!(tables, vec![5, 7, 20]);
        assert_eq!(SectionId::FACULTY.table_kind(), Some(TableKind::Faculty));
        assert_eq!(SectionId::HOD.shape(), SectionShape::Text);
    }

    #[test]
    fn rejects_out_of_range_ids() {
        assert!(SectionId::new(0).is_err());
        assert!(SectionId::new(25).is_err());
        assert!("x".parse::<SectionId>().is_err());
        assert_eq!("20".parse::<SectionId>().unwrap(), SectionId::PLACEMENTS);
    }

    #[test]
    fn catalogue_has_titles_and_alternating_colors() {
        let catalogue = section_catalogue();
        assert_eq!(catalogue.len(), 24);
        assert_eq!(catalogue[19].title, "Placements");
        assert_eq!(catalogue[0].color, SectionColor::Primary);
        assert_eq!(catalogue[1].color, SectionColor::Accent);
    }

    #[test]
    fn search_matches_title_or_description() {
        let hits = search_sections("PATENT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.get(), 16);
        let hits = search_sections("enrollment");
        assert_eq!(hits[0].id, SectionId::STUDENTS);
        assert_eq!(search_sections("").len(), 24);
    }
}
