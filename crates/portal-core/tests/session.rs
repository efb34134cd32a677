//! End-to-end import and store scenarios.

use chrono::Utc;
use portal_core::{ImportApplied, PortalConfig, PortalStore, Session};
use portal_ingest::parse_named;
use portal_model::{
    AcademicYear, FacultyRecord, ImportedFile, PortalError, ScalarValue, SectionId,
    TableRecords, YearKey,
};

fn session() -> Session {
    Session::new(PortalStore::from_config(&PortalConfig::default()).expect("store"))
}

fn import(
    session: &mut Session,
    section: SectionId,
    name: &str,
    content: &str,
) -> Result<ImportApplied, PortalError> {
    let file = ImportedFile::new(name, "", Utc::now(), content);
    let document = parse_named(name, content);
    session.import(section, file, document).map(|outcome| outcome.applied)
}

fn year(label: &str) -> AcademicYear {
    AcademicYear::new(label).expect("year")
}

#[test]
fn faculty_csv_import_replaces_selected_year_only() {
    let mut session = session();
    let csv = "designation,count,phd,experience\n\
               Professor,10,8,15+ years\n\
               Assistant Professor,abc,,\n";
    let applied = import(&mut session, SectionId::FACULTY, "faculty.csv", csv).expect("import");
    assert_eq!(applied, ImportApplied::Records(2));

    let store = session.store();
    let TableRecords::Faculty(rows) = store
        .records(&year("2024-25"), SectionId::FACULTY)
        .expect("records")
    else {
        panic!("faculty table expected");
    };
    assert_eq!(
        rows[0],
        FacultyRecord {
            designation: "Professor".to_string(),
            count: 10,
            phd: 8,
            experience: "15+ years".to_string(),
        }
    );
    assert_eq!(rows[1].count, 0);
    assert_eq!(store.record_count(&year("2023-24"), SectionId::FACULTY).unwrap(), 0);
    assert_eq!(store.files(SectionId::FACULTY).len(), 1);
}

#[test]
fn reimport_replaces_rather_than_appends() {
    let mut session = session();
    let csv = "company,package\nAcme,10 LPA\nGlobex,8 LPA\n";
    import(&mut session, SectionId::PLACEMENTS, "p.csv", csv).expect("first");
    import(&mut session, SectionId::PLACEMENTS, "p.csv", "company\nInitech\n").expect("second");
    let store = session.store();
    assert_eq!(
        store.record_count(&year("2024-25"), SectionId::PLACEMENTS).unwrap(),
        1
    );
    assert_eq!(store.files(SectionId::PLACEMENTS).len(), 2);
}

#[test]
fn hod_text_import_merges_into_master() {
    let mut session = session();
    let text = "HOD Name: Dr. Rao\nEmail: rao@x.edu\n";
    let applied = import(&mut session, SectionId::HOD, "hod.txt", text).expect("import");
    assert_eq!(applied, ImportApplied::Fields(2));

    session
        .store_mut()
        .select_year(&year("2026-27"))
        .expect("select");
    let store = session.store();
    assert_eq!(
        store.get_text(SectionId::HOD, "hodName", "").unwrap(),
        ScalarValue::text("Dr. Rao")
    );
    assert_eq!(
        store.get_text(SectionId::HOD, "email", "").unwrap(),
        ScalarValue::text("rao@x.edu")
    );
    // blank imported keys overwrite seeded values, so the default applies
    assert_eq!(
        store.get_text(SectionId::HOD, "phone", "n/a").unwrap(),
        ScalarValue::text("n/a")
    );
    assert!(store.text_in(&YearKey::Master, SectionId::HOD).is_some());
}

#[test]
fn empty_import_keeps_file_but_changes_nothing() {
    let mut session = session();
    let err = import(&mut session, SectionId::STUDENTS, "s.json", "{not json").unwrap_err();
    assert_eq!(
        err,
        PortalError::EmptyImport {
            file: "s.json".to_string()
        }
    );
    let store = session.store();
    assert_eq!(store.files(SectionId::STUDENTS).len(), 1);
    assert!(!store.has_data(SectionId::STUDENTS));
    assert!(!session.is_importing(SectionId::STUDENTS));
}

#[test]
fn year_specific_text_sections_stay_in_their_year() {
    let mut session = session();
    let section = SectionId::new(6).unwrap();
    import(&mut session, section, "staff.txt", "Lab Assistants: 4").expect("import");
    assert!(session.store().has_data(section));
    session
        .store_mut()
        .select_year(&year("2025-26"))
        .expect("select");
    assert!(!session.store().has_data(section));
}

#[test]
fn year_totals_sum_tables() {
    let mut session = session();
    import(
        &mut session,
        SectionId::FACULTY,
        "f.csv",
        "designation,count,phd\nProfessor,10,8\nAssociate,6,2\n",
    )
    .expect("faculty");
    import(
        &mut session,
        SectionId::PLACEMENTS,
        "p.json",
        r#"[{"company": "Acme", "placed": 5}, {"company": "Globex", "placed": "7"}]"#,
    )
    .expect("placements");
    let totals = session.store().year_totals(&year("2024-25")).unwrap();
    assert_eq!(totals.faculty, 16);
    assert_eq!(totals.students, 0);
    assert_eq!(totals.placed, 12);
}
