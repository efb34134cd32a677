#![deny(unsafe_code)]

pub mod error;
pub mod file;
pub mod records;
pub mod row;
pub mod section;
pub mod text;
pub mod value;
pub mod year;

pub use error::{PortalError, Result};
pub use file::ImportedFile;
pub use records::{
    FacultyRecord, PlacementRecord, PlacementType, StudentRecord, TableKind, TableRecord,
    TableRecords, TabularRecord,
};
pub use row::{FieldRow, GenericRow, JsonRow, ParsedRow, RowSource};
pub use section::{
    SECTION_COUNT, Section, SectionColor, SectionId, SectionShape, search_sections,
    section_catalogue,
};
pub use text::SectionTextData;
pub use value::{ScalarValue, format_number};
pub use year::{
    AcademicYear, DEFAULT_ACADEMIC_YEARS, DEFAULT_SELECTED_YEAR, MASTER_KEY,
    PROGRAMS_DATA_YEARS, YearKey, default_academic_years,
};
