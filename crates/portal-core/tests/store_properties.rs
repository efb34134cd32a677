//! Property tests for year isolation and master redirection.

use portal_core::PortalStore;
use portal_model::{
    AcademicYear, FacultyRecord, SectionId, TableRecord, default_academic_years,
};
use proptest::prelude::*;

fn store() -> PortalStore {
    let years = default_academic_years();
    let selected = years[0].clone();
    PortalStore::new(years, selected, Vec::new()).expect("store")
}

fn faculty(count: u32) -> TableRecord {
    FacultyRecord {
        designation: format!("Rank {count}"),
        count,
        phd: 0,
        experience: String::new(),
    }
    .into()
}

proptest! {
    #[test]
    fn appends_touch_only_their_year(
        ops in proptest::collection::vec((0usize..7, 0u32..50), 0..30)
    ) {
        let years: Vec<AcademicYear> = default_academic_years();
        let mut store = store();
        let mut expected = [0usize; 7];
        for (idx, count) in &ops {
            store.append_record(&years[*idx], SectionId::FACULTY, faculty(*count)).unwrap();
            expected[*idx] += 1;
        }
        for (idx, year) in years.iter().enumerate() {
            prop_assert_eq!(store.record_count(year, SectionId::FACULTY).unwrap(), expected[idx]);
        }
    }

    #[test]
    fn master_sections_read_the_same_in_every_year(
        section in 1u8..=4,
        value in "[A-Za-z][A-Za-z ]{0,15}",
        year_idx in 0usize..7,
    ) {
        let section = SectionId::new(section).unwrap();
        let mut store = store();
        store.set_text(section, "field", value.as_str()).unwrap();
        let years = default_academic_years();
        store.select_year(&years[year_idx]).unwrap();
        prop_assert_eq!(
            store.get_text(section, "field", "").unwrap().to_string(),
            value
        );
    }

    #[test]
    fn delete_preserves_relative_order(len in 1usize..12, pick in 0usize..12) {
        let years = default_academic_years();
        let mut store = store();
        for count in 0..len {
            store.append_record(&years[0], SectionId::FACULTY, faculty(count as u32)).unwrap();
        }
        let index = pick % len;
        store.delete_record(&years[0], SectionId::FACULTY, index).unwrap();
        let counts: Vec<u32> = store
            .tables(&years[0])
            .unwrap()
            .faculty
            .iter()
            .map(|r| r.count)
            .collect();
        let expected: Vec<u32> = (0..len as u32).filter(|c| *c as usize != index).collect();
        prop_assert_eq!(counts, expected);
    }
}
