// Rust guideline compliant 2026-10-19

//! Implementation of the `tflow show` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use ticketflow_core::TicketId;

/// Shows a single ticket.
///
/// # Errors
///
/// Returns an error if the data directory does not exist or the ticket is
/// not found.
pub fn execute(root: Option<&Path>, id: TicketId, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = super::open_service(root)?;
    let ticket = service.get(id)?;
    println!("{}", formatter.format_ticket(&ticket));
    Ok(())
}
