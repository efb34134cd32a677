//! Error types for store commits and configuration.

use std::path::PathBuf;

use portal_model::{PortalError, SectionId};
use thiserror::Error;

/// How loudly a rejected commit should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A text-section commit that was refused without touching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitRejected {
    #[error("No changes detected - data is already up to date")]
    NoChanges { section: SectionId },
    #[error("No data to save - please enter some information first")]
    NothingToSave { section: SectionId },
}

impl CommitRejected {
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoChanges { .. } => Severity::Info,
            Self::NothingToSave { .. } => Severity::Warning,
        }
    }

    pub fn section(&self) -> SectionId {
        match self {
            Self::NoChanges { section } | Self::NothingToSave { section } => *section,
        }
    }
}

/// Failure of [`PortalStore::save_text`](crate::PortalStore::save_text).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error(transparent)]
    Portal(#[from] PortalError),
    #[error(transparent)]
    Rejected(#[from] CommitRejected),
}

/// Errors loading or saving the portal configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid academic year in config: {0}")]
    Year(#[from] PortalError),

    #[error("duplicate academic year in config: {0}")]
    DuplicateYear(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_carry_severity_and_message() {
        let no_changes = CommitRejected::NoChanges {
            section: SectionId::HOD,
        };
        assert_eq!(no_changes.severity(), Severity::Info);
        assert_eq!(
            no_changes.to_string(),
            "No changes detected - data is already up to date"
        );
        let empty = CommitRejected::NothingToSave {
            section: SectionId::SCHOOL,
        };
        assert_eq!(empty.severity(), Severity::Warning);
        assert_eq!(empty.section(), SectionId::SCHOOL);
    }
}
