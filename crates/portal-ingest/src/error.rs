//! Error types for document ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading an import from disk.
///
/// Parsing itself never fails; an unusable document yields no rows.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path has no file name: {path}")]
    NoFileName { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/faculty.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /data/faculty.csv");
    }
}
