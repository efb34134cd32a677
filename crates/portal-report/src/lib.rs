#![deny(unsafe_code)]

//! CSV export and plain-text reports assembled from portal state.

pub mod annual;
pub mod clipboard;
pub mod common;
pub mod csv;
pub mod master;
pub mod programs;
pub mod render;
pub mod section;
pub mod summary;

pub use annual::annual_report_text;
pub use clipboard::clipboard_text;
pub use crate::csv::{table_to_csv, to_csv};
pub use master::{FLAGGED_SECTIONS, master_export_text};
pub use render::{DocumentRenderer, PlainTextRenderer, annual_report_stem, master_export_stem};
pub use section::{section_report_text, table_report_text};
pub use summary::{FacultySummary, PlacementSummary, StudentSummary, package_value, percent};
