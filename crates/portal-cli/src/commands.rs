//! Command implementations, separated from printing.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use portal_core::{PortalStore, Session, YearTotals, load_config};
use portal_ingest::{Detection, DocumentFormat, load_document};
use portal_map::{map_table, map_text_section, merge_rows};
use portal_model::{
    AcademicYear, ImportedFile, Section, SectionId, SectionShape, SectionTextData, TableRecords,
    search_sections, section_catalogue,
};
use portal_report::{
    DocumentRenderer, PlainTextRenderer, annual_report_stem, annual_report_text, clipboard_text,
    master_export_stem, master_export_text, table_report_text, table_to_csv,
};
use tracing::{info, info_span, trace, warn};

use crate::logging::redact_value;

/// `N=FILE` pair from `--import`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub section: SectionId,
    pub path: PathBuf,
}

impl FromStr for ImportSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (section, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected N=FILE, got '{s}'"))?;
        let section = section.parse::<SectionId>().map_err(|e| e.to_string())?;
        if path.trim().is_empty() {
            return Err(format!("missing file for section {section}"));
        }
        Ok(Self {
            section,
            path: PathBuf::from(path.trim()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Annual,
    Master,
    Section,
    Clipboard,
}

pub fn run_sections(search: Option<&str>) -> Vec<Section> {
    match search {
        Some(term) => search_sections(term),
        None => section_catalogue(),
    }
}

/// What a document would write into its section.
#[derive(Debug)]
pub enum PreviewContent {
    Records(TableRecords),
    Fields(SectionTextData),
}

#[derive(Debug)]
pub struct PreviewResult {
    pub section: SectionId,
    pub file: ImportedFile,
    pub format: DocumentFormat,
    pub detection: Detection,
    pub rows: usize,
    pub content: PreviewContent,
}

/// Parses and maps `path` for `section` without touching a store.
pub fn run_preview(section: SectionId, path: &Path) -> Result<PreviewResult> {
    let _span = info_span!("preview", section = %section).entered();
    let loaded = load_document(path).with_context(|| format!("load {}", path.display()))?;
    let document = loaded.document;
    let content = match section.shape() {
        SectionShape::Table(kind) => PreviewContent::Records(map_table(kind, &document.rows)),
        SectionShape::Text => {
            let data = map_text_section(section, merge_rows(&document.rows));
            for (key, value) in data.iter() {
                trace!(field = key, value = redact_value(&value.to_string()), "mapped field");
            }
            PreviewContent::Fields(data)
        }
    };
    Ok(PreviewResult {
        section,
        file: loaded.file,
        format: document.format,
        detection: document.detection,
        rows: document.len(),
        content,
    })
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub year: Option<String>,
    pub imports: Vec<ImportSpec>,
    pub section: Option<SectionId>,
    pub kind: ExportKind,
    pub output_dir: PathBuf,
    pub config: Option<PathBuf>,
}

/// One `--import` as applied.
#[derive(Debug, Clone)]
pub struct ImportRow {
    pub section: SectionId,
    pub file: String,
    pub format: Option<DocumentFormat>,
    /// `Ok(summary)` or the reason nothing was applied.
    pub status: std::result::Result<String, String>,
}

#[derive(Debug)]
pub struct ExportResult {
    pub year: AcademicYear,
    pub imports: Vec<ImportRow>,
    pub totals: YearTotals,
    pub written: Vec<PathBuf>,
    /// Text for `ExportKind::Clipboard`.
    pub printed: Option<String>,
}

fn apply_import(session: &mut Session, spec: &ImportSpec) -> ImportRow {
    let file = spec.path.display().to_string();
    let loaded = match load_document(&spec.path) {
        Ok(loaded) => loaded,
        Err(error) => {
            warn!(%error, "import skipped");
            return ImportRow {
                section: spec.section,
                file,
                format: None,
                status: Err(error.to_string()),
            };
        }
    };
    let format = loaded.document.format;
    let status = session
        .import(spec.section, loaded.file, loaded.document)
        .map(|outcome| outcome.to_string())
        .map_err(|error| {
            warn!(%error, "import not applied");
            error.to_string()
        });
    ImportRow {
        section: spec.section,
        file,
        format: Some(format),
        status,
    }
}

fn table_section(
    store: &PortalStore,
    year: &AcademicYear,
    section: Option<SectionId>,
) -> Result<TableRecords> {
    let Some(section) = section else {
        bail!("--section is required for this export kind");
    };
    store
        .records(year, section)
        .with_context(|| format!("section {section} has no table export"))
}

/// Builds a session from config, applies imports in order, then writes or
/// prints the requested document.
pub fn run_export(options: &ExportOptions, generated_at: &NaiveDateTime) -> Result<ExportResult> {
    let config = load_config(options.config.as_deref()).context("load config")?;
    let mut store = PortalStore::from_config(&config).context("build store")?;
    if let Some(label) = &options.year {
        let year = AcademicYear::new(label.as_str())?;
        store.select_year(&year)?;
    }
    let year = store.selected_year().clone();
    let _span = info_span!("export", year = %year).entered();

    let mut session = Session::new(store);
    let imports: Vec<ImportRow> = options
        .imports
        .iter()
        .map(|spec| apply_import(&mut session, spec))
        .collect();
    let store = session.into_store();

    let renderer = PlainTextRenderer::new(&options.output_dir);
    let institution = &config.institution;
    let mut written = Vec::new();
    let mut printed = None;

    match options.kind {
        ExportKind::Annual => {
            let snapshot = store.snapshot(&year)?;
            let text = annual_report_text(&snapshot, institution, generated_at);
            written.push(renderer.render(&text, &annual_report_stem(year.as_str()))?);
        }
        ExportKind::Master => {
            let snapshots = store.snapshots();
            let text = master_export_text(&snapshots, institution, generated_at);
            written.push(renderer.render(&text, &master_export_stem(institution, generated_at))?);
        }
        ExportKind::Section => {
            let records = table_section(&store, &year, options.section)?;
            let stem = records.kind().export_stem(year.as_str());
            written.push(renderer.write_file(&format!("{stem}.csv"), &table_to_csv(&records))?);
            let text = table_report_text(&records, year.as_str(), generated_at);
            written.push(renderer.render(&text, &stem)?);
        }
        ExportKind::Clipboard => {
            let records = table_section(&store, &year, options.section)?;
            printed = Some(clipboard_text(&records, institution));
        }
    }

    let totals = store.year_totals(&year)?;
    info!(documents = written.len(), "export finished");
    Ok(ExportResult {
        year,
        imports,
        totals,
        written,
        printed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_spec_parses_section_and_path() {
        let spec: ImportSpec = "5=data/faculty.csv".parse().unwrap();
        assert_eq!(spec.section, SectionId::FACULTY);
        assert_eq!(spec.path, PathBuf::from("data/faculty.csv"));
    }

    #[test]
    fn import_spec_rejects_bad_input() {
        assert!("faculty.csv".parse::<ImportSpec>().is_err());
        assert!("25=x.csv".parse::<ImportSpec>().is_err());
        assert!("5=".parse::<ImportSpec>().is_err());
    }

    #[test]
    fn sections_search_filters_catalogue() {
        assert_eq!(run_sections(None).len(), 24);
        let found = run_sections(Some("placement"));
        assert!(found.iter().any(|s| s.id == SectionId::PLACEMENTS));
        assert!(found.len() < 24);
    }
}
