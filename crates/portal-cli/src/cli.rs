//! CLI argument definitions for the annual report portal.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use portal_cli::commands::{ExportKind, ImportSpec};
use portal_model::SectionId;

#[derive(Parser)]
#[command(
    name = "portal",
    version,
    about = "Annual report portal - import departmental data and export reports",
    long_about = "Import CSV, JSON or plain-text documents into the 24 annual report \n\
                  sections and export per-section CSV, annual reports and the \n\
                  complete multi-year export."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include imported field values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the report sections.
    Sections(SectionsArgs),

    /// Parse one document and show what it would import.
    Preview(PreviewArgs),

    /// Import documents into a fresh session and write reports.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct SectionsArgs {
    /// Only show sections whose title or description contains TERM.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Target section (1-24).
    #[arg(long = "section", value_name = "N")]
    pub section: SectionId,

    /// Document to parse.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Academic year to report on (default: configured year).
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<String>,

    /// Import FILE into section N before exporting. Repeatable; applied in order.
    #[arg(long = "import", value_name = "N=FILE")]
    pub imports: Vec<ImportSpec>,

    /// Section to export with `--kind section` or `--kind clipboard`.
    #[arg(long = "section", value_name = "N")]
    pub section: Option<SectionId>,

    /// Document to produce.
    #[arg(long = "kind", value_enum, default_value = "annual")]
    pub kind: ExportKindArg,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Configuration file (default: platform config folder).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportKindArg {
    Annual,
    Master,
    Section,
    /// Print the section summary to stdout.
    Clipboard,
}

impl From<ExportKindArg> for ExportKind {
    fn from(value: ExportKindArg) -> Self {
        match value {
            ExportKindArg::Annual => Self::Annual,
            ExportKindArg::Master => Self::Master,
            ExportKindArg::Section => Self::Section,
            ExportKindArg::Clipboard => Self::Clipboard,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
