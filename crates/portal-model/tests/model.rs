//! Tests for portal-model types.

use portal_model::{
    AcademicYear, FacultyRecord, SectionId, SectionShape, SectionTextData, TableKind,
    TableRecords, TabularRecord, YearKey, default_academic_years,
};
use proptest::prelude::*;

#[test]
fn default_years_are_ordered_and_valid() {
    let years = default_academic_years();
    assert_eq!(years.len(), 7);
    assert_eq!(years[0].as_str(), "2023-24");
    assert_eq!(years[6].as_str(), "2029-30");
}

#[test]
fn table_records_report_kind_and_len() {
    let records = TableRecords::Faculty(vec![FacultyRecord::template()]);
    assert_eq!(records.kind(), TableKind::Faculty);
    assert_eq!(records.len(), 1);
    assert!(TableRecords::empty(TableKind::Placement).is_empty());
}

#[test]
fn text_data_round_trips_through_json() {
    let data = SectionTextData::new()
        .with("hodName", "Dr. Rao")
        .with("staff", 12u32);
    let json = serde_json::to_string(&data).expect("serialize");
    let back: SectionTextData = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, data);
}

#[test]
fn section_ids_serialize_as_numbers() {
    let json = serde_json::to_string(&SectionId::PLACEMENTS).expect("serialize");
    assert_eq!(json, "20");
    assert!(serde_json::from_str::<SectionId>("42").is_err());
}

proptest! {
    #[test]
    fn every_section_resolves_to_one_partition(id in 1u8..=24, year_idx in 0usize..7) {
        let section = SectionId::new(id).unwrap();
        let year = default_academic_years()[year_idx].clone();
        let key = YearKey::for_section(section, &year);
        prop_assert_eq!(key.is_master(), id <= 4);
        if let SectionShape::Table(kind) = section.shape() {
            prop_assert_eq!(kind.section(), section);
        }
    }

    #[test]
    fn year_labels_trim(label in "[0-9]{4}-[0-9]{2}") {
        let padded = format!("  {label} ");
        let year = AcademicYear::new(padded).unwrap();
        prop_assert_eq!(year.as_str(), label.as_str());
    }
}
