//! Aggregates shown in report summaries.

use portal_model::{FacultyRecord, PlacementRecord, StudentRecord};

/// `round(part / whole * 100)`, or 0 for an empty whole.
pub fn percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u64
}

/// Numeric value of a package label: the leading integer once `" LPA"` is
/// removed, 0 when there is none ("12.5 LPA" is 12).
pub fn package_value(package: &str) -> i64 {
    let cleaned = package.replacen(" LPA", "", 1);
    let trimmed = cleaned.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacultySummary {
    pub total: u64,
    pub phd: u64,
}

impl FacultySummary {
    pub fn of(records: &[FacultyRecord]) -> Self {
        Self {
            total: records.iter().map(|r| u64::from(r.count)).sum(),
            phd: records.iter().map(|r| u64::from(r.phd)).sum(),
        }
    }

    pub fn phd_percent(&self) -> u64 {
        percent(self.phd, self.total)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentSummary {
    pub students: u64,
    pub intake: u64,
}

impl StudentSummary {
    pub fn of(records: &[StudentRecord]) -> Self {
        Self {
            students: records.iter().map(|r| u64::from(r.students)).sum(),
            intake: records.iter().map(|r| u64::from(r.intake)).sum(),
        }
    }

    pub fn occupancy_percent(&self) -> u64 {
        percent(self.students, self.intake)
    }
}

/// Occupancy of a single programme row.
pub fn occupancy(record: &StudentRecord) -> u64 {
    percent(u64::from(record.students), u64::from(record.intake))
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlacementSummary {
    pub placed: u64,
    /// Mean package value; 0 without placements.
    pub average_package: f64,
    pub highest_package: i64,
}

impl PlacementSummary {
    pub fn of(records: &[PlacementRecord]) -> Self {
        let packages: Vec<i64> = records.iter().map(|r| package_value(&r.package)).collect();
        let average_package = if packages.is_empty() {
            0.0
        } else {
            packages.iter().sum::<i64>() as f64 / packages.len() as f64
        };
        Self {
            placed: records.iter().map(|r| u64::from(r.students_placed)).sum(),
            average_package,
            highest_package: packages.iter().copied().max().unwrap_or(0),
        }
    }

    /// `"12.50 LPA"`
    pub fn average_label(&self) -> String {
        format!("{:.2} LPA", self.average_package)
    }

    /// `"18 LPA"`
    pub fn highest_label(&self) -> String {
        format!("{} LPA", self.highest_package)
    }
}

#[cfg(test)]
mod tests {
    use portal_model::PlacementType;

    use super::*;

    fn placement(package: &str) -> PlacementRecord {
        PlacementRecord {
            company: "Acme".to_string(),
            package: package.to_string(),
            students_placed: 2,
            placement_type: PlacementType::OnCampus,
        }
    }

    #[test]
    fn package_values_take_leading_integer() {
        assert_eq!(package_value("12 LPA"), 12);
        assert_eq!(package_value("12.5 LPA"), 12);
        assert_eq!(package_value("7LPA"), 7);
        assert_eq!(package_value("TBD"), 0);
        assert_eq!(package_value(""), 0);
    }

    #[test]
    fn percent_guards_zero_denominator() {
        assert_eq!(percent(5, 0), 0);
        assert_eq!(percent(8, 10), 80);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
    }

    #[test]
    fn placement_summary_averages_packages() {
        let summary = PlacementSummary::of(&[placement("10 LPA"), placement("15 LPA")]);
        assert_eq!(summary.placed, 4);
        assert_eq!(summary.average_label(), "12.50 LPA");
        assert_eq!(summary.highest_label(), "15 LPA");
        assert_eq!(PlacementSummary::of(&[]).highest_package, 0);
    }
}
