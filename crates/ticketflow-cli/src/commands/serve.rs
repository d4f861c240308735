// Rust guideline compliant 2026-10-19

//! Implementation of the `tflow serve` command.

use anyhow::Result;
use std::path::PathBuf;
use ticketflow_http::{run, ServeArgs, ServerOptions};

/// Runs the REST server in the foreground until Ctrl-C.
///
/// Flags override `config.toml` and `TICKETFLOW_*` environment settings.
///
/// # Errors
///
/// Returns an error if the data directory is missing, the effective config
/// is invalid or the server cannot bind.
pub fn execute(root: Option<PathBuf>, args: ServeArgs) -> Result<()> {
    let mut options = ServerOptions::load(root)?;
    args.apply(&mut options);
    run(options)?;
    Ok(())
}
