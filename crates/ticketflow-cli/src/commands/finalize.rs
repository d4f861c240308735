// Rust guideline compliant 2026-10-19

//! Implementation of the `tflow finalize` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use ticketflow_core::TicketId;

/// Completes an `in_progress` ticket.
///
/// # Errors
///
/// Returns an error if the ticket is missing, not `in_progress`, or the
/// service is read-only.
pub fn execute(root: Option<&Path>, id: TicketId, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = super::open_service(root)?;
    let ticket = service.finalize(id)?;
    println!("{}", formatter.format_ticket(&ticket));
    Ok(())
}
