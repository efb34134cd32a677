//! Exported CSV reads back through the import pipeline unchanged.

use portal_ingest::parse_csv;
use portal_map::map_table;
use portal_model::{
    FacultyRecord, PlacementRecord, PlacementType, StudentRecord, TableKind, TableRecords,
};
use portal_report::table_to_csv;
use proptest::prelude::*;

// The importer splits on every comma and trims cells, so exported text stays
// comma-free and untrimmed here.
const TEXT: &str = "[A-Za-z][A-Za-z0-9 .]{0,10}[A-Za-z0-9]";

fn faculty() -> impl Strategy<Value = FacultyRecord> {
    (TEXT, 0u32..500, 0u32..500, TEXT).prop_map(|(designation, count, phd, experience)| {
        FacultyRecord {
            designation,
            count,
            phd,
            experience,
        }
    })
}

fn student() -> impl Strategy<Value = StudentRecord> {
    (TEXT, TEXT, 0u32..5000, 0u32..5000).prop_map(|(program, year, students, intake)| {
        StudentRecord {
            program,
            year,
            students,
            intake,
        }
    })
}

fn placement() -> impl Strategy<Value = PlacementRecord> {
    (TEXT, TEXT, 0u32..1000, any::<bool>()).prop_map(
        |(company, package, students_placed, off_campus)| PlacementRecord {
            company,
            package,
            students_placed,
            placement_type: if off_campus {
                PlacementType::OffCampus
            } else {
                PlacementType::OnCampus
            },
        },
    )
}

fn reimport(kind: TableKind, records: &TableRecords) -> TableRecords {
    let rows = parse_csv(&table_to_csv(records));
    map_table(kind, &rows)
}

proptest! {
    #[test]
    fn faculty_survives_export_and_import(rows in proptest::collection::vec(faculty(), 1..8)) {
        let records = TableRecords::Faculty(rows);
        prop_assert_eq!(reimport(TableKind::Faculty, &records), records);
    }

    #[test]
    fn students_survive_export_and_import(rows in proptest::collection::vec(student(), 1..8)) {
        let records = TableRecords::Student(rows);
        prop_assert_eq!(reimport(TableKind::Student, &records), records);
    }

    #[test]
    fn placements_survive_export_and_import(
        rows in proptest::collection::vec(placement(), 1..8)
    ) {
        let records = TableRecords::Placement(rows);
        prop_assert_eq!(reimport(TableKind::Placement, &records), records);
    }
}
