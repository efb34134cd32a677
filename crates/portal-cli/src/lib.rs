//! CLI library components for the annual report portal.

pub mod commands;
pub mod logging;
