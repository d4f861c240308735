// Rust guideline compliant 2026-10-19

//! Implementation of the `tflow seed` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use ticketflow_app::{seed_store, AppError, DataDir, SeedOptions};

/// Replaces all tickets with generated demo data.
///
/// `count` defaults to the configured `seed_count`.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory does not exist
/// - The configuration is read-only
/// - `count` is zero
/// - The store cannot be written
pub fn execute(
    root: Option<&Path>,
    count: Option<usize>,
    rng_seed: Option<u64>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let data_dir = DataDir::discover(root)?;
    let config = data_dir.load_config()?;
    if config.read_only {
        return Err(AppError::ReadOnly.into());
    }

    let count = count.unwrap_or(config.seed_count);
    if count == 0 {
        return Err(AppError::InvalidInput("count must be greater than 0".to_string()).into());
    }

    let store = data_dir.open_store(&config)?;
    let tickets = seed_store(store.as_ref(), SeedOptions { count, rng_seed })?;

    let message = format!("✓ Seeded {} tickets", tickets.len());
    let data = serde_json::json!({ "seeded": tickets.len(), "rng_seed": rng_seed });
    println!("{}", formatter.format_summary(&message, data));
    Ok(())
}
