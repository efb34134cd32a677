//! Loading and parsing import files from disk.

use std::fs;

use portal_ingest::{Detection, DocumentFormat, IngestError, load_document, load_file};
use portal_model::GenericRow;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write import file");
    path
}

#[test]
fn loads_metadata_and_content() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "Faculty.csv", b"designation,count\nProfessor,10\n");
    let file = load_file(&path).expect("load");
    assert_eq!(file.name, "Faculty.csv");
    assert_eq!(file.media_type, "text/csv");
    assert_eq!(file.size, 31);
    assert!(file.content.starts_with("designation"));
}

#[test]
fn missing_files_are_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn unknown_extension_runs_the_cascade() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "export.dat", b"company,package\nAcme,12 LPA\nGlobex,9 LPA\n");
    let loaded = load_document(&path).expect("load");
    assert_eq!(loaded.document.format, DocumentFormat::Csv);
    assert_eq!(loaded.document.detection, Detection::Content);
    assert_eq!(loaded.document.len(), 2);
    assert_eq!(loaded.document.rows[1].keys(), vec!["company", "package"]);
}

#[test]
fn invalid_utf8_is_replaced() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "hod.txt", b"name: Dr. R\xffao\n");
    let loaded = load_document(&path).expect("load");
    assert_eq!(loaded.document.format, DocumentFormat::Text);
    let value = loaded.document.rows[0].value("name").expect("name");
    assert!(value.to_string().starts_with("Dr. R"));
    assert_eq!(loaded.file.size, 15);
    assert_eq!(loaded.file.content.len(), 17);
}
