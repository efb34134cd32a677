#![deny(unsafe_code)]

//! Year-scoped store, import sessions, table views and configuration.

pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod view;

pub use config::{
    InstitutionConfig, PortalConfig, YearsConfig, config_path, load_config, read_config,
    save_config,
};
pub use error::{CommitRejected, ConfigError, SaveError, Severity};
pub use session::{ImportApplied, ImportOutcome, ImportTicket, Session};
pub use store::{
    PortalStore, SaveKind, SaveReport, YearSnapshot, YearTables, YearTotals, master_seed,
};
pub use view::{SortDirection, SortSpec, TableView};
