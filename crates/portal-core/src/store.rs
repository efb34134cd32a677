//! Year-scoped storage of tables, text bags and imported files.
//!
//! Table sections (5, 7, 20) hold one ordered record sequence per academic
//! year. Text sections hold a field bag per partition: sections 1-4 always
//! resolve to the master partition, everything else to the selected year.

use std::collections::BTreeMap;

use portal_model::{
    AcademicYear, FacultyRecord, ImportedFile, PlacementRecord, PortalError, Result,
    ScalarValue, SectionId, SectionShape, SectionTextData, StudentRecord, TableKind, TableRecord,
    TableRecords, YearKey,
};
use tracing::{debug, info, warn};

use crate::config::PortalConfig;
use crate::error::{CommitRejected, ConfigError, SaveError};

/// The three typed tables of one academic year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearTables {
    pub faculty: Vec<FacultyRecord>,
    pub students: Vec<StudentRecord>,
    pub placements: Vec<PlacementRecord>,
}

impl YearTables {
    pub fn len(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::Faculty => self.faculty.len(),
            TableKind::Student => self.students.len(),
            TableKind::Placement => self.placements.len(),
        }
    }

    pub fn records(&self, kind: TableKind) -> TableRecords {
        match kind {
            TableKind::Faculty => TableRecords::Faculty(self.faculty.clone()),
            TableKind::Student => TableRecords::Student(self.students.clone()),
            TableKind::Placement => TableRecords::Placement(self.placements.clone()),
        }
    }

    fn replace(&mut self, records: TableRecords) {
        match records {
            TableRecords::Faculty(rows) => self.faculty = rows,
            TableRecords::Student(rows) => self.students = rows,
            TableRecords::Placement(rows) => self.placements = rows,
        }
    }

    fn push(&mut self, record: TableRecord) {
        match record {
            TableRecord::Faculty(row) => self.faculty.push(row),
            TableRecord::Student(row) => self.students.push(row),
            TableRecord::Placement(row) => self.placements.push(row),
        }
    }

    /// Returns `false` when `index` is out of bounds.
    fn replace_at(&mut self, index: usize, record: TableRecord) -> bool {
        fn put<T>(rows: &mut [T], index: usize, row: T) -> bool {
            match rows.get_mut(index) {
                Some(slot) => {
                    *slot = row;
                    true
                }
                None => false,
            }
        }
        match record {
            TableRecord::Faculty(row) => put(&mut self.faculty, index, row),
            TableRecord::Student(row) => put(&mut self.students, index, row),
            TableRecord::Placement(row) => put(&mut self.placements, index, row),
        }
    }

    fn remove(&mut self, kind: TableKind, index: usize) -> Option<TableRecord> {
        if index >= self.len(kind) {
            return None;
        }
        Some(match kind {
            TableKind::Faculty => self.faculty.remove(index).into(),
            TableKind::Student => self.students.remove(index).into(),
            TableKind::Placement => self.placements.remove(index).into(),
        })
    }
}

/// Outcome of a successful text commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveKind {
    /// No bag existed before.
    Created,
    /// An existing bag was replaced; `changes` keys differ from it.
    Updated { changes: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub section: SectionId,
    pub key: YearKey,
    pub kind: SaveKind,
}

impl SaveReport {
    /// User-facing confirmation line.
    pub fn message(&self) -> String {
        let scope = match &self.key {
            YearKey::Master => "(Fixed for all years)".to_string(),
            YearKey::Year(year) => format!("for {year}"),
        };
        match self.kind {
            SaveKind::Created => {
                format!("Section {} data saved successfully {scope}!", self.section)
            }
            SaveKind::Updated { changes } => {
                format!("Section {} updated with {changes} changes {scope}!", self.section)
            }
        }
    }
}

/// Totals shown when switching years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearTotals {
    pub faculty: u64,
    pub students: u64,
    pub placed: u64,
}

/// Read-only view of everything a report needs for one year.
#[derive(Debug, Clone)]
pub struct YearSnapshot<'a> {
    pub year: &'a AcademicYear,
    pub faculty: &'a [FacultyRecord],
    pub students: &'a [StudentRecord],
    pub placements: &'a [PlacementRecord],
    pub school: Option<&'a SectionTextData>,
    pub establishment: Option<&'a SectionTextData>,
    pub hod: Option<&'a SectionTextData>,
    /// Sections passing `has_data` for this year, ascending.
    pub sections_with_data: Vec<SectionId>,
}

/// In-memory portal state for a single user session.
#[derive(Debug, Clone)]
pub struct PortalStore {
    years: Vec<AcademicYear>,
    selected: AcademicYear,
    programs_years: Vec<AcademicYear>,
    tables: BTreeMap<AcademicYear, YearTables>,
    text: BTreeMap<YearKey, BTreeMap<SectionId, SectionTextData>>,
    files: BTreeMap<SectionId, Vec<ImportedFile>>,
}

/// Default master content: school, establishment and head of department.
pub fn master_seed() -> [(SectionId, SectionTextData); 3] {
    [
        (
            SectionId::SCHOOL,
            SectionTextData::new()
                .with("schoolName", "School of Technology")
                .with("location", "GITAM Deemed to be University"),
        ),
        (
            SectionId::ESTABLISHMENT,
            SectionTextData::new()
                .with("yearOfEstablishment", "1981")
                .with("history", "Established in 1981"),
        ),
        (
            SectionId::HOD,
            SectionTextData::new()
                .with("hodName", "Gondi Lakshmeeswari")
                .with("email", "hod_cse@gitam.edu")
                .with("phone", "089128402870")
                .with("qualification", "PhD"),
        ),
    ]
}

impl PortalStore {
    /// Empty store over `years`. `selected` must be one of them.
    pub fn new(
        years: Vec<AcademicYear>,
        selected: AcademicYear,
        programs_years: Vec<AcademicYear>,
    ) -> Result<Self> {
        if !years.contains(&selected) {
            return Err(PortalError::UnknownYear(selected.to_string()));
        }
        let tables = years
            .iter()
            .map(|year| (year.clone(), YearTables::default()))
            .collect();
        Ok(Self {
            years,
            selected,
            programs_years,
            tables,
            text: BTreeMap::new(),
            files: BTreeMap::new(),
        })
    }

    /// Store configured from `config`, seeded when enabled.
    pub fn from_config(config: &PortalConfig) -> std::result::Result<Self, ConfigError> {
        let mut store = Self::new(
            config.years.academic_years()?,
            config.years.default_year()?,
            config.years.programs_years()?,
        )?;
        if config.seed_master {
            store.seed_master();
        }
        Ok(store)
    }

    /// Writes the default master bags, replacing existing ones.
    pub fn seed_master(&mut self) {
        let master = self.text.entry(YearKey::Master).or_default();
        for (section, data) in master_seed() {
            master.insert(section, data);
        }
    }

    pub fn years(&self) -> &[AcademicYear] {
        &self.years
    }

    pub fn selected_year(&self) -> &AcademicYear {
        &self.selected
    }

    pub fn programs_years(&self) -> &[AcademicYear] {
        &self.programs_years
    }

    pub fn select_year(&mut self, year: &AcademicYear) -> Result<()> {
        self.ensure_year(year)?;
        if *year != self.selected {
            info!(year = %year, "selected academic year");
            self.selected = year.clone();
        }
        Ok(())
    }

    fn ensure_year(&self, year: &AcademicYear) -> Result<()> {
        if self.years.contains(year) {
            Ok(())
        } else {
            Err(PortalError::UnknownYear(year.to_string()))
        }
    }

    fn table_kind(section: SectionId) -> Result<TableKind> {
        section
            .table_kind()
            .ok_or(PortalError::SectionShapeMismatch {
                section,
                expected: "table",
            })
    }

    fn text_section(section: SectionId) -> Result<()> {
        match section.shape() {
            SectionShape::Text => Ok(()),
            SectionShape::Table(_) => Err(PortalError::SectionShapeMismatch {
                section,
                expected: "text",
            }),
        }
    }

    fn ensure_kind(section: SectionId, kind: TableKind) -> Result<()> {
        if Self::table_kind(section)? == kind {
            Ok(())
        } else {
            Err(PortalError::SectionShapeMismatch {
                section,
                expected: kind.as_str(),
            })
        }
    }

    fn year_tables(&self, year: &AcademicYear) -> Result<&YearTables> {
        self.tables
            .get(year)
            .ok_or_else(|| PortalError::UnknownYear(year.to_string()))
    }

    fn year_tables_mut(&mut self, year: &AcademicYear) -> Result<&mut YearTables> {
        self.tables
            .get_mut(year)
            .ok_or_else(|| PortalError::UnknownYear(year.to_string()))
    }

    /// Tables of `year`.
    pub fn tables(&self, year: &AcademicYear) -> Result<&YearTables> {
        self.year_tables(year)
    }

    /// Copy of the table held by `section` for `year`.
    pub fn records(&self, year: &AcademicYear, section: SectionId) -> Result<TableRecords> {
        let kind = Self::table_kind(section)?;
        Ok(self.year_tables(year)?.records(kind))
    }

    pub fn record_count(&self, year: &AcademicYear, section: SectionId) -> Result<usize> {
        let kind = Self::table_kind(section)?;
        Ok(self.year_tables(year)?.len(kind))
    }

    /// Replaces the whole sequence for (`year`, `section`).
    pub fn set_records(
        &mut self,
        year: &AcademicYear,
        section: SectionId,
        records: TableRecords,
    ) -> Result<()> {
        Self::ensure_kind(section, records.kind())?;
        let count = records.len();
        self.year_tables_mut(year)?.replace(records);
        debug!(year = %year, section = %section, count, "replaced records");
        Ok(())
    }

    /// Appends one record; returns its index.
    pub fn append_record(
        &mut self,
        year: &AcademicYear,
        section: SectionId,
        record: TableRecord,
    ) -> Result<usize> {
        let kind = record.kind();
        Self::ensure_kind(section, kind)?;
        let tables = self.year_tables_mut(year)?;
        tables.push(record);
        Ok(tables.len(kind) - 1)
    }

    /// Appends the "add row" template for `section`.
    pub fn append_template(&mut self, year: &AcademicYear, section: SectionId) -> Result<usize> {
        let kind = Self::table_kind(section)?;
        self.append_record(year, section, TableRecord::template(kind))
    }

    /// Replaces the record at `index`.
    pub fn update_record(
        &mut self,
        year: &AcademicYear,
        section: SectionId,
        index: usize,
        record: TableRecord,
    ) -> Result<()> {
        let kind = record.kind();
        Self::ensure_kind(section, kind)?;
        let tables = self.year_tables_mut(year)?;
        let len = tables.len(kind);
        if tables.replace_at(index, record) {
            Ok(())
        } else {
            warn!(year = %year, section = %section, index, len, "update out of range");
            Err(PortalError::RecordNotFound {
                section,
                year: year.to_string(),
                index,
                len,
            })
        }
    }

    /// Removes and returns the record at `index`; later records shift down.
    pub fn delete_record(
        &mut self,
        year: &AcademicYear,
        section: SectionId,
        index: usize,
    ) -> Result<TableRecord> {
        let kind = Self::table_kind(section)?;
        let tables = self.year_tables_mut(year)?;
        let len = tables.len(kind);
        tables
            .remove(kind, index)
            .ok_or_else(|| PortalError::RecordNotFound {
                section,
                year: year.to_string(),
                index,
                len,
            })
    }

    /// Partition key for `section` under the selected year.
    pub fn key_for(&self, section: SectionId) -> YearKey {
        YearKey::for_section(section, &self.selected)
    }

    /// Bag of `section` in an explicit partition.
    pub fn text_in(&self, key: &YearKey, section: SectionId) -> Option<&SectionTextData> {
        self.text.get(key).and_then(|bags| bags.get(&section))
    }

    /// Bag of `section` for the selected year (or master).
    pub fn text(&self, section: SectionId) -> Result<Option<&SectionTextData>> {
        Self::text_section(section)?;
        Ok(self.text_in(&self.key_for(section), section))
    }

    /// Writes one field.
    pub fn set_text(
        &mut self,
        section: SectionId,
        field: impl Into<String>,
        value: impl Into<ScalarValue>,
    ) -> Result<()> {
        Self::text_section(section)?;
        let key = self.key_for(section);
        self.text
            .entry(key)
            .or_default()
            .entry(section)
            .or_default()
            .insert(field, value);
        Ok(())
    }

    /// Field value, or `default` when missing or falsy. Whitespace-only text
    /// is returned as stored.
    pub fn get_text(
        &self,
        section: SectionId,
        field: &str,
        default: impl Into<ScalarValue>,
    ) -> Result<ScalarValue> {
        let value = self
            .text(section)?
            .and_then(|bag| bag.get(field))
            .filter(|value| value.is_truthy())
            .cloned();
        Ok(value.unwrap_or_else(|| default.into()))
    }

    /// Commits a whole bag with change detection.
    pub fn save_text(
        &mut self,
        section: SectionId,
        data: SectionTextData,
    ) -> std::result::Result<SaveReport, SaveError> {
        Self::text_section(section)?;
        let key = self.key_for(section);
        let previous = self.text_in(&key, section).cloned().unwrap_or_default();

        if previous == data && !previous.is_empty() {
            info!(section = %section, key = %key, "commit skipped: no changes");
            return Err(CommitRejected::NoChanges { section }.into());
        }
        if !data.has_content() {
            warn!(section = %section, key = %key, "commit skipped: nothing to save");
            return Err(CommitRejected::NothingToSave { section }.into());
        }

        let kind = if previous.is_empty() {
            SaveKind::Created
        } else {
            SaveKind::Updated {
                changes: data.changed_fields(&previous),
            }
        };
        self.text
            .entry(key.clone())
            .or_default()
            .insert(section, data);
        info!(section = %section, key = %key, ?kind, "saved section text");
        Ok(SaveReport { section, key, kind })
    }

    /// Overlays `data` onto the existing bag; imported keys win.
    pub fn merge_text(&mut self, section: SectionId, data: &SectionTextData) -> Result<YearKey> {
        Self::text_section(section)?;
        let key = self.key_for(section);
        self.text
            .entry(key.clone())
            .or_default()
            .entry(section)
            .or_default()
            .merge_from(data);
        Ok(key)
    }

    /// `has_data` for the selected year.
    pub fn has_data(&self, section: SectionId) -> bool {
        self.has_data_in(section, &self.selected)
    }

    /// Whether `section` counts as filled for `year`.
    pub fn has_data_in(&self, section: SectionId, year: &AcademicYear) -> bool {
        match section.shape() {
            SectionShape::Table(kind) => self
                .tables
                .get(year)
                .is_some_and(|tables| tables.len(kind) > 0),
            SectionShape::Text if section == SectionId::PROGRAMS => {
                self.programs_years.contains(year)
            }
            SectionShape::Text => self
                .text_in(&YearKey::for_section(section, year), section)
                .is_some_and(SectionTextData::has_content),
        }
    }

    /// Sections filled for `year`, ascending.
    pub fn sections_with_data(&self, year: &AcademicYear) -> Vec<SectionId> {
        SectionId::all()
            .filter(|section| self.has_data_in(*section, year))
            .collect()
    }

    pub fn year_totals(&self, year: &AcademicYear) -> Result<YearTotals> {
        let tables = self.year_tables(year)?;
        Ok(YearTotals {
            faculty: tables.faculty.iter().map(|r| u64::from(r.count)).sum(),
            students: tables.students.iter().map(|r| u64::from(r.students)).sum(),
            placed: tables
                .placements
                .iter()
                .map(|r| u64::from(r.students_placed))
                .sum(),
        })
    }

    pub fn snapshot<'a>(&'a self, year: &'a AcademicYear) -> Result<YearSnapshot<'a>> {
        let tables = self.year_tables(year)?;
        Ok(YearSnapshot {
            year,
            faculty: &tables.faculty,
            students: &tables.students,
            placements: &tables.placements,
            school: self.text_in(&YearKey::Master, SectionId::SCHOOL),
            establishment: self.text_in(&YearKey::Master, SectionId::ESTABLISHMENT),
            hod: self.text_in(&YearKey::Master, SectionId::HOD),
            sections_with_data: self.sections_with_data(year),
        })
    }

    /// Snapshots of every known year in display order.
    pub fn snapshots(&self) -> Vec<YearSnapshot<'_>> {
        self.years
            .iter()
            .filter_map(|year| self.snapshot(year).ok())
            .collect()
    }

    /// Keeps an imported file for later preview.
    pub fn record_file(&mut self, section: SectionId, file: ImportedFile) {
        debug!(section = %section, file = %file.name, size = file.size, "kept imported file");
        self.files.entry(section).or_default().push(file);
    }

    pub fn files(&self, section: SectionId) -> &[ImportedFile] {
        self.files.get(&section).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use portal_model::{PlacementType, TabularRecord, default_academic_years};

    use super::*;

    fn year(label: &str) -> AcademicYear {
        AcademicYear::new(label).unwrap()
    }

    fn store() -> PortalStore {
        PortalStore::new(
            default_academic_years(),
            year("2024-25"),
            vec![year("2023-24"), year("2024-25")],
        )
        .unwrap()
    }

    #[test]
    fn unknown_selected_year_is_rejected() {
        let err = PortalStore::new(default_academic_years(), year("2040-41"), vec![]);
        assert!(matches!(err, Err(PortalError::UnknownYear(_))));
    }

    #[test]
    fn append_update_delete_preserve_order() {
        let mut store = store();
        let y = year("2024-25");
        store.append_template(&y, SectionId::PLACEMENTS).unwrap();
        let second = PlacementRecord {
            company: "Acme".to_string(),
            package: "12 LPA".to_string(),
            students_placed: 4,
            placement_type: PlacementType::OffCampus,
        };
        assert_eq!(
            store
                .append_record(&y, SectionId::PLACEMENTS, second.clone().into())
                .unwrap(),
            1
        );
        store.append_template(&y, SectionId::PLACEMENTS).unwrap();

        let removed = store.delete_record(&y, SectionId::PLACEMENTS, 0).unwrap();
        assert_eq!(removed, TableRecord::Placement(PlacementRecord::template()));
        assert_eq!(store.tables(&y).unwrap().placements[0], second);
        assert_eq!(store.record_count(&y, SectionId::PLACEMENTS).unwrap(), 2);
    }

    #[test]
    fn out_of_range_edits_report_record_not_found() {
        let mut store = store();
        let y = year("2024-25");
        let err = store
            .update_record(&y, SectionId::FACULTY, 3, FacultyRecord::template().into())
            .unwrap_err();
        assert_eq!(
            err,
            PortalError::RecordNotFound {
                section: SectionId::FACULTY,
                year: "2024-25".to_string(),
                index: 3,
                len: 0,
            }
        );
        assert!(store.delete_record(&y, SectionId::FACULTY, 0).is_err());
    }

    #[test]
    fn shape_mismatches_are_errors() {
        let mut store = store();
        let y = year("2024-25");
        assert!(matches!(
            store.append_template(&y, SectionId::HOD),
            Err(PortalError::SectionShapeMismatch { .. })
        ));
        assert!(matches!(
            store.append_record(&y, SectionId::FACULTY, StudentRecord::template().into()),
            Err(PortalError::SectionShapeMismatch { .. })
        ));
        assert!(store.set_text(SectionId::STUDENTS, "x", "y").is_err());
    }

    #[test]
    fn master_sections_ignore_the_selected_year() {
        let mut store = store();
        store.set_text(SectionId::HOD, "hodName", "Dr. Rao").unwrap();
        store.select_year(&year("2027-28")).unwrap();
        assert_eq!(
            store.get_text(SectionId::HOD, "hodName", "").unwrap(),
            ScalarValue::text("Dr. Rao")
        );
        store.set_text(SectionId::new(6).unwrap(), "staff", "12").unwrap();
        store.select_year(&year("2024-25")).unwrap();
        assert_eq!(
            store
                .get_text(SectionId::new(6).unwrap(), "staff", "none")
                .unwrap(),
            ScalarValue::text("none")
        );
    }

    #[test]
    fn save_text_reports_created_then_updated() {
        let mut store = store();
        let section = SectionId::new(8).unwrap();
        let data = SectionTextData::new().with("phds", "3");
        let report = store.save_text(section, data.clone()).unwrap();
        assert_eq!(report.kind, SaveKind::Created);
        assert_eq!(
            report.message(),
            "Section 8 data saved successfully for 2024-25!"
        );

        let rejected = store.save_text(section, data.clone()).unwrap_err();
        assert_eq!(
            rejected,
            SaveError::Rejected(CommitRejected::NoChanges { section })
        );

        let report = store
            .save_text(section, data.with("phds", "4").with("names", "A, B"))
            .unwrap();
        assert_eq!(report.kind, SaveKind::Updated { changes: 2 });
    }

    #[test]
    fn save_text_rejects_blank_bags() {
        let mut store = store();
        let err = store
            .save_text(SectionId::new(9).unwrap(), SectionTextData::new().with("a", "  "))
            .unwrap_err();
        assert!(matches!(
            err,
            SaveError::Rejected(CommitRejected::NothingToSave { .. })
        ));
    }

    #[test]
    fn empty_hod_bag_is_not_committed_to_master() {
        let mut store = store();
        let err = store
            .save_text(SectionId::HOD, SectionTextData::new())
            .unwrap_err();
        assert_eq!(
            err,
            SaveError::Rejected(CommitRejected::NothingToSave {
                section: SectionId::HOD
            })
        );
        assert_eq!(
            err.to_string(),
            "No data to save - please enter some information first"
        );
        assert_eq!(store.text(SectionId::HOD).unwrap(), None);
        assert_eq!(store.text_in(&YearKey::Master, SectionId::HOD), None);
        assert_eq!(
            store.get_text(SectionId::HOD, "hodName", "none").unwrap(),
            ScalarValue::text("none")
        );
    }

    #[test]
    fn get_text_returns_whitespace_values_as_stored() {
        let mut store = store();
        let section = SectionId::new(6).unwrap();
        store.set_text(section, "staff", "  ").unwrap();
        store.set_text(section, "labs", "").unwrap();
        assert_eq!(
            store.get_text(section, "staff", "none").unwrap(),
            ScalarValue::text("  ")
        );
        assert_eq!(
            store.get_text(section, "labs", "none").unwrap(),
            ScalarValue::text("none")
        );
        assert!(!store.has_data(section));
    }

    #[test]
    fn programs_section_follows_configured_years() {
        let mut store = store();
        assert!(store.has_data(SectionId::PROGRAMS));
        store.select_year(&year("2025-26")).unwrap();
        assert!(!store.has_data(SectionId::PROGRAMS));
    }

    #[test]
    fn seed_fills_master_sections() {
        let mut store = store();
        assert!(!store.has_data(SectionId::SCHOOL));
        store.seed_master();
        for section in [SectionId::SCHOOL, SectionId::ESTABLISHMENT, SectionId::HOD] {
            assert!(store.has_data(section));
        }
        let totals = store.year_totals(&year("2024-25")).unwrap();
        assert_eq!(totals, YearTotals::default());
    }
}
