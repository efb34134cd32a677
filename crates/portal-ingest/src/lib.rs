#![deny(unsafe_code)]

pub mod csv;
pub mod detect;
pub mod error;
pub mod json;
pub mod loader;
pub mod text;

pub use crate::csv::parse_csv;
pub use detect::{
    Detection, DocumentFormat, ParsedDocument, detect_content, parse_imported, parse_named,
};
pub use error::{IngestError, Result};
pub use json::{parse_json, try_parse_json};
pub use loader::{LoadedDocument, load_document, load_file, media_type_for};
pub use text::parse_text;
