//! Reading import files from disk.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use portal_model::ImportedFile;
use tracing::{debug, info};

use crate::detect::{ParsedDocument, parse_imported};
use crate::error::{IngestError, Result};

/// Media type reported for a file name, empty when unknown.
pub fn media_type_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => "application/json",
        "csv" => "text/csv",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "",
    }
}

/// Reads `path` into an [`ImportedFile`]. Invalid UTF-8 is replaced rather
/// than rejected; `size` stays the on-disk byte count.
pub fn load_file(path: &Path) -> Result<ImportedFile> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| IngestError::NoFileName {
            path: path.to_path_buf(),
        })?
        .to_string();

    let bytes = fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&bytes).into_owned();

    let last_modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|error| {
            debug!(%error, "modification time unavailable, using now");
            Utc::now()
        });

    let media_type = media_type_for(&name);
    info!(file = %name, bytes = bytes.len(), "loaded import file");
    let size = bytes.len() as u64;
    Ok(ImportedFile::new(name, media_type, last_modified, content).with_size(size))
}

/// A file read from disk together with its parsed rows.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub file: ImportedFile,
    pub document: ParsedDocument,
}

/// Reads and parses `path`.
pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    let file = load_file(path)?;
    let document = parse_imported(&file);
    Ok(LoadedDocument { file, document })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_types_follow_extension() {
        assert_eq!(media_type_for("a.CSV"), "text/csv");
        assert_eq!(media_type_for("notes.txt"), "text/plain");
        assert_eq!(media_type_for("blob"), "");
    }
}
