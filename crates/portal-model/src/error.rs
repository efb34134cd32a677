use thiserror::Error;

use crate::section::SectionId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    #[error("invalid section id: {0} (expected 1-24)")]
    InvalidSectionId(String),
    #[error("invalid academic year: '{0}'")]
    InvalidYear(String),
    #[error("unknown academic year: {0}")]
    UnknownYear(String),
    /// Edit or delete addressed a row that does not exist.
    #[error("record {index} not found in section {section} for {year} ({len} records)")]
    RecordNotFound {
        section: SectionId,
        year: String,
        index: usize,
        len: usize,
    },
    #[error("section {section} is not a {expected} section")]
    SectionShapeMismatch {
        section: SectionId,
        expected: &'static str,
    },
    #[error("an import into section {0} is already in progress")]
    ImportInProgress(SectionId),
    #[error("no data found in {file}; check the file format")]
    EmptyImport { file: String },
}

pub type Result<T> = std::result::Result<T, PortalError>;
