// Rust guideline compliant 2026-10-19

//! Implementation of the `tflow update` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use ticketflow_app::parse_status;
use ticketflow_core::{TicketId, TicketPatch, UserId};

/// Builds a patch from command-line flags.
///
/// `--unassign` wins over `--assignee`; clap keeps them mutually exclusive.
///
/// # Errors
///
/// Returns an error if the status name is unknown.
pub fn build_patch(
    status: Option<&str>,
    assignee: Option<UserId>,
    unassign: bool,
) -> Result<TicketPatch> {
    let mut patch = TicketPatch::default();
    if let Some(status) = status {
        patch.status = Some(parse_status(status)?);
    }
    if unassign {
        patch = patch.with_assignee(None);
    } else if let Some(assignee) = assignee {
        patch = patch.with_assignee(Some(assignee));
    }
    Ok(patch)
}

/// Changes a ticket's status and/or assignee.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory does not exist
/// - The ticket is not found
/// - The change is rejected by the state machine
/// - The service is read-only
pub fn execute(
    root: Option<&Path>,
    id: TicketId,
    patch: TicketPatch,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let service = super::open_service(root)?;
    let ticket = service.update(id, patch)?;
    println!("{}", formatter.format_ticket(&ticket));
    Ok(())
}
