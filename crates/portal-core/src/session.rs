//! Import sessions over a [`PortalStore`].
//!
//! Imports are serialised per section: a section holds at most one
//! outstanding [`ImportTicket`], so a slow read cannot be overwritten by a
//! newer one for the same section while it is still in flight.

use std::collections::BTreeMap;
use std::fmt;

use portal_ingest::{DocumentFormat, ParsedDocument};
use portal_map::{map_table, map_text_section, merge_rows};
use portal_model::{ImportedFile, PortalError, Result, SectionId, SectionShape, YearKey};
use tracing::{info, info_span, warn};

use crate::store::PortalStore;

/// Permission to complete one import into `section`.
///
/// Consumed by [`Session::finish_import`] or [`Session::cancel_import`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an import ticket blocks its section until finished or cancelled"]
pub struct ImportTicket {
    section: SectionId,
    id: u64,
}

impl ImportTicket {
    pub fn section(&self) -> SectionId {
        self.section
    }
}

/// What an import wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportApplied {
    /// Table sections: the year's records were replaced by this many.
    Records(usize),
    /// Text sections: this many non-blank fields were merged in.
    Fields(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub section: SectionId,
    pub file_name: String,
    pub format: DocumentFormat,
    pub target: YearKey,
    pub applied: ImportApplied,
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.applied {
            ImportApplied::Records(count) => write!(
                f,
                "{count} record(s) imported into section {} from {}",
                self.section, self.file_name
            ),
            ImportApplied::Fields(count) => write!(
                f,
                "Section {}: {count} field(s) auto-filled from {}",
                self.section, self.file_name
            ),
        }
    }
}

/// A store plus the bookkeeping for in-flight imports.
#[derive(Debug, Clone)]
pub struct Session {
    store: PortalStore,
    pending: BTreeMap<SectionId, u64>,
    next_ticket: u64,
}

impl Session {
    pub fn new(store: PortalStore) -> Self {
        Self {
            store,
            pending: BTreeMap::new(),
            next_ticket: 0,
        }
    }

    pub fn store(&self) -> &PortalStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PortalStore {
        &mut self.store
    }

    pub fn into_store(self) -> PortalStore {
        self.store
    }

    pub fn is_importing(&self, section: SectionId) -> bool {
        self.pending.contains_key(&section)
    }

    /// Reserves `section` for one import.
    pub fn begin_import(&mut self, section: SectionId) -> Result<ImportTicket> {
        if self.pending.contains_key(&section) {
            return Err(PortalError::ImportInProgress(section));
        }
        self.next_ticket += 1;
        let id = self.next_ticket;
        self.pending.insert(section, id);
        Ok(ImportTicket { section, id })
    }

    /// Releases `ticket` without touching the store.
    pub fn cancel_import(&mut self, ticket: ImportTicket) {
        self.release(&ticket);
    }

    fn release(&mut self, ticket: &ImportTicket) {
        if self.pending.get(&ticket.section) == Some(&ticket.id) {
            self.pending.remove(&ticket.section);
        }
    }

    /// Applies a read document to the ticket's section.
    ///
    /// The file is kept for preview even when it yields no rows. Table
    /// sections replace the selected year's records; text sections merge
    /// into the existing bag.
    pub fn finish_import(
        &mut self,
        ticket: ImportTicket,
        file: ImportedFile,
        document: ParsedDocument,
    ) -> Result<ImportOutcome> {
        self.release(&ticket);
        let section = ticket.section;
        let _span = info_span!("import", section = %section, file = %file.name).entered();

        let file_name = file.name.clone();
        self.store.record_file(section, file);

        if document.is_empty() {
            warn!(format = %document.format, "import produced no rows");
            return Err(PortalError::EmptyImport { file: file_name });
        }

        let (target, applied) = match section.shape() {
            SectionShape::Table(kind) => {
                let records = map_table(kind, &document.rows);
                let count = records.len();
                let year = self.store.selected_year().clone();
                self.store.set_records(&year, section, records)?;
                (YearKey::Year(year), ImportApplied::Records(count))
            }
            SectionShape::Text => {
                let data = map_text_section(section, merge_rows(&document.rows));
                let count = data.non_blank_count();
                let key = self.store.merge_text(section, &data)?;
                (key, ImportApplied::Fields(count))
            }
        };

        let outcome = ImportOutcome {
            section,
            file_name,
            format: document.format,
            target,
            applied,
        };
        info!(target_key = %outcome.target, ?applied, "{outcome}");
        Ok(outcome)
    }

    /// Begins and finishes an import in one step.
    pub fn import(
        &mut self,
        section: SectionId,
        file: ImportedFile,
        document: ParsedDocument,
    ) -> Result<ImportOutcome> {
        let ticket = self.begin_import(section)?;
        self.finish_import(ticket, file, document)
    }
}
