use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::section::SectionId;

/// Storage key of the year-independent partition.
pub const MASTER_KEY: &str = "master";

/// Academic years known to a fresh portal, in display order.
pub const DEFAULT_ACADEMIC_YEARS: [&str; 7] = [
    "2023-24", "2024-25", "2025-26", "2026-27", "2027-28", "2028-29", "2029-30",
];

/// Year selected when a session starts.
pub const DEFAULT_SELECTED_YEAR: &str = "2024-25";

/// Years for which the programmes catalogue (section 4) counts as filled.
pub const PROGRAMS_DATA_YEARS: [&str; 2] = ["2023-24", "2024-25"];

/// An academic year label such as `2024-25`.
///
/// The label is opaque; only emptiness and the reserved `master` key are rejected.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct AcademicYear(String);

impl AcademicYear {
    pub fn new(value: impl Into<String>) -> Result<Self, PortalError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(MASTER_KEY) {
            return Err(PortalError::InvalidYear(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AcademicYear {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AcademicYear {
    type Error = PortalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AcademicYear> for String {
    fn from(value: AcademicYear) -> Self {
        value.0
    }
}

/// The built-in academic years.
pub fn default_academic_years() -> Vec<AcademicYear> {
    DEFAULT_ACADEMIC_YEARS
        .iter()
        .map(|year| AcademicYear((*year).to_string()))
        .collect()
}

/// Partition key a section's data lives under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YearKey {
    Master,
    Year(AcademicYear),
}

impl YearKey {
    /// Sections 1-4 always resolve to the master partition; everything else
    /// stays in the given year.
    pub fn for_section(section: SectionId, year: &AcademicYear) -> Self {
        if section.is_master_scoped() {
            Self::Master
        } else {
            Self::Year(year.clone())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Master => MASTER_KEY,
            Self::Year(year) => year.as_str(),
        }
    }

    pub fn is_master(&self) -> bool {
        matches!(self, Self::Master)
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_master_and_blank_years() {
        assert!(AcademicYear::new("master").is_err());
        assert!(AcademicYear::new("  ").is_err());
        assert_eq!(AcademicYear::new(" 2024-25 ").unwrap().as_str(), "2024-25");
    }

    #[test]
    fn master_scoped_sections_resolve_to_master() {
        let year = AcademicYear::new("2025-26").unwrap();
        let hod = SectionId::new(3).unwrap();
        let faculty = SectionId::new(5).unwrap();
        assert_eq!(YearKey::for_section(hod, &year), YearKey::Master);
        assert_eq!(YearKey::for_section(faculty, &year), YearKey::Year(year));
    }
}
