//! Hand-off of assembled text to an output document.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use portal_core::InstitutionConfig;
use tracing::info;

/// Turns formatted report text into a document on disk.
pub trait DocumentRenderer {
    /// Writes `content` as a document named after `file_stem` and returns
    /// its path.
    fn render(&self, content: &str, file_stem: &str) -> Result<PathBuf>;
}

/// Writes reports as `<dir>/<stem>.txt`.
#[derive(Debug, Clone)]
pub struct PlainTextRenderer {
    dir: PathBuf,
}

impl PlainTextRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `content` under `file_name` unchanged, e.g. a CSV export.
    pub fn write_file(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output directory {}", self.dir.display()))?;
        let path = self.dir.join(file_name);
        fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), bytes = content.len(), "wrote document");
        Ok(path)
    }
}

impl DocumentRenderer for PlainTextRenderer {
    fn render(&self, content: &str, file_stem: &str) -> Result<PathBuf> {
        self.write_file(&format!("{file_stem}.txt"), content)
    }
}

/// `Annual_Report_2024-25`
pub fn annual_report_stem(year: &str) -> String {
    format!("Annual_Report_{year}")
}

/// `GITAM_Complete_Annual_Report_2025-01-05`
pub fn master_export_stem(institution: &InstitutionConfig, generated_at: &NaiveDateTime) -> String {
    format!(
        "{}_Complete_Annual_Report_{}",
        institution.short_name,
        generated_at.format("%Y-%m-%d")
    )
}
