//! Shared formatting for generated documents.

use chrono::NaiveDateTime;
use portal_model::ScalarValue;

/// Width of the rules in the annual report and master export.
pub const WIDE_RULE: usize = 80;

/// Width of the rules in a section report.
pub const SECTION_RULE: usize = 60;

/// Width of the per-year rules in the master export.
pub const YEAR_RULE: usize = 50;

/// Width of the per-section rules in the master export.
pub const BLOCK_RULE: usize = 30;

pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// `1/5/2025`
pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// `3:04:05 PM`
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%-I:%M:%S %p").to_string()
}

/// `1/5/2025, 3:04:05 PM`
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    format!("{}, {}", format_date(at), format_time(at))
}

/// Empty for missing and falsy values (empty text, zero).
pub fn truthy_text(value: Option<&ScalarValue>) -> Option<String> {
    value
        .filter(|value| value.is_truthy())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn timestamps_use_locale_style() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 5)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        assert_eq!(format_timestamp(&at), "1/5/2025, 3:04:05 PM");
        let midnight = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(0, 0, 9)
            .unwrap();
        assert_eq!(format_time(&midnight), "12:00:09 AM");
    }
}
