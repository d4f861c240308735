// Rust guideline compliant 2026-10-19

//! Standalone Ticketflow HTTP server.

use clap::Parser;
use std::path::PathBuf;
use ticketflow_http::{run, ServeArgs, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "ticketflow-server",
    version,
    about = "Serve the Ticketflow REST API"
)]
struct Cli {
    /// Workspace root containing `.ticketflow` (defaults to the current directory)
    #[arg(long, env = "TICKETFLOW_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(flatten)]
    serve: ServeArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut options = ServerOptions::load(cli.data_dir)?;
    cli.serve.apply(&mut options);
    run(options)?;
    Ok(())
}
