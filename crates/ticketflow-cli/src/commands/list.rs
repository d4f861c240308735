// Rust guideline compliant 2026-10-19

//! Implementation of the `tflow list` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use ticketflow_app::ListOptions;

/// Lists tickets matching the given filters in ascending id order.
///
/// # Errors
///
/// Returns an error if the data directory does not exist, a filter value is
/// invalid or the store cannot be read.
pub fn execute(
    root: Option<&Path>,
    options: ListOptions,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let filter = options.into_filter()?;
    let service = super::open_service(root)?;
    let tickets = service.list(&filter)?;
    println!("{}", formatter.format_list(&tickets));
    Ok(())
}
