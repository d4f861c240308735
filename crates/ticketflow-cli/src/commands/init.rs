// Rust guideline compliant 2026-10-19

//! Implementation of the `tflow init` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use ticketflow_app::DataDir;

/// Creates `.ticketflow/` with an empty ticket file and a default config.
///
/// Existing files are kept.
///
/// # Errors
///
/// Returns an error if the directory or its files cannot be created.
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let data_dir = DataDir::init(root)?;

    let message = format!(
        "✓ Ticketflow initialized at {}\n  - {}\n  - {}",
        data_dir.dir().display(),
        data_dir.tickets_path().display(),
        data_dir.config_path().display()
    );
    let data = serde_json::json!({
        "path": data_dir.dir(),
        "tickets": data_dir.tickets_path(),
        "config": data_dir.config_path(),
    });
    println!("{}", formatter.format_summary(&message, data));

    Ok(())
}
