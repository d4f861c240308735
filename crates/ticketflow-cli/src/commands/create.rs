// Rust guideline compliant 2026-10-19

//! Implementation of the `tflow create` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use ticketflow_app::{parse_priority, parse_topic};
use ticketflow_core::{NewTicket, UserId};

/// Arguments for a new ticket as typed on the command line.
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Requesting user.
    pub requester: UserId,
    /// Topic name.
    pub topic: String,
    /// Priority name.
    pub priority: String,
    /// Ticket description.
    pub description: String,
    /// Optional pre-assigned solver.
    pub assignee: Option<UserId>,
}

/// Opens a new ticket and prints it.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory does not exist
/// - Topic or priority are unknown
/// - The description is blank or too large
/// - The service is read-only
pub fn execute(
    root: Option<&Path>,
    args: CreateArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let input = NewTicket {
        requester_id: args.requester,
        assignee_id: args.assignee,
        topic: parse_topic(&args.topic)?,
        priority: parse_priority(&args.priority)?,
        description: args.description,
    };

    let service = super::open_service(root)?;
    let ticket = service.create(input)?;
    println!("{}", formatter.format_ticket(&ticket));

    Ok(())
}
