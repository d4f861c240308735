// Rust guideline compliant 2026-10-19

//! Command implementations for the Ticketflow CLI.

pub mod create;
pub mod finalize;
pub mod init;
pub mod list;
pub mod seed;
pub mod serve;
pub mod show;
pub mod update;

use anyhow::Result;
use std::path::Path;
use ticketflow_app::{DataDir, TicketService};

/// Opens the ticket service for the data directory under `root`.
///
/// # Errors
///
/// Returns an error if the data directory is missing, the config is
/// invalid or the store cannot be opened.
pub fn open_service(root: Option<&Path>) -> Result<TicketService> {
    let data_dir = DataDir::discover(root)?;
    let config = data_dir.load_config()?;
    Ok(data_dir.open_service(&config)?)
}
