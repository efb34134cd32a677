//! Document format selection.
//!
//! Known extensions pick a parser directly. Anything else runs the content
//! cascade: JSON when the text parses to an array or object, then CSV when it
//! yields at least one row, then the text grammar.

use std::fmt;

use portal_model::{ImportedFile, ParsedRow};
use tracing::{debug, info_span};

use crate::csv::parse_csv;
use crate::json::try_parse_json;
use crate::text::parse_text;

/// Parser family applied to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Csv,
    Text,
}

impl DocumentFormat {
    /// Format implied by a file extension (without the dot, any case).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "txt" | "doc" | "docx" => Some(Self::Text),
            _ => None,
        }
    }

    /// Format implied by a file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Self::from_extension(ext)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
            Self::Text => "text",
        }
    }

    /// Parses `text` with this format's parser.
    pub fn parse(self, text: &str) -> Vec<ParsedRow> {
        match self {
            Self::Json => try_parse_json(text)
                .unwrap_or_default()
                .into_iter()
                .map(ParsedRow::Json)
                .collect(),
            Self::Csv => parse_csv(text).into_iter().map(ParsedRow::Csv).collect(),
            Self::Text => parse_text(text).map(ParsedRow::Text).into_iter().collect(),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the format of a document was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Extension,
    Content,
}

/// Rows of one document plus the format they were read with.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub format: DocumentFormat,
    pub detection: Detection,
    pub rows: Vec<ParsedRow>,
}

impl ParsedDocument {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

type Attempt = fn(&str) -> Option<Vec<ParsedRow>>;

fn attempt_json(text: &str) -> Option<Vec<ParsedRow>> {
    try_parse_json(text).map(|rows| rows.into_iter().map(ParsedRow::Json).collect())
}

fn attempt_csv(text: &str) -> Option<Vec<ParsedRow>> {
    let rows = parse_csv(text);
    (!rows.is_empty()).then(|| rows.into_iter().map(ParsedRow::Csv).collect())
}

fn attempt_text(text: &str) -> Option<Vec<ParsedRow>> {
    Some(DocumentFormat::Text.parse(text))
}

/// Content cascade for unrecognised extensions, tried in order.
const CASCADE: [(DocumentFormat, Attempt); 3] = [
    (DocumentFormat::Json, attempt_json),
    (DocumentFormat::Csv, attempt_csv),
    (DocumentFormat::Text, attempt_text),
];

/// Sniffs the format from content alone.
pub fn detect_content(text: &str) -> ParsedDocument {
    for (format, attempt) in CASCADE {
        if let Some(rows) = attempt(text) {
            debug!(format = %format, rows = rows.len(), "auto-detected format");
            return ParsedDocument {
                format,
                detection: Detection::Content,
                rows,
            };
        }
    }
    ParsedDocument {
        format: DocumentFormat::Text,
        detection: Detection::Content,
        rows: Vec::new(),
    }
}

/// Parses a named document, choosing the parser by extension first.
pub fn parse_named(name: &str, text: &str) -> ParsedDocument {
    let _span = info_span!("parse_document", file = name).entered();
    match DocumentFormat::from_file_name(name) {
        Some(format) => {
            let rows = format.parse(text);
            debug!(format = %format, rows = rows.len(), "parsed by extension");
            ParsedDocument {
                format,
                detection: Detection::Extension,
                rows,
            }
        }
        None => detect_content(text),
    }
}

/// Parses the content of an imported file.
pub fn parse_imported(file: &ImportedFile) -> ParsedDocument {
    parse_named(&file.name, &file.content)
}
