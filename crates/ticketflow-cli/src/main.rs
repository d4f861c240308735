// Rust guideline compliant 2026-10-19

//! Ticketflow CLI Application
//!
//! Command-line interface for the Ticketflow support-ticket tracker.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use ticketflow_app::ListOptions;
use ticketflow_cli::commands::{self, create::CreateArgs};
use ticketflow_cli::{create_formatter, should_use_color, OutputFormatter};
use ticketflow_core::{TicketId, UserId};
use ticketflow_http::ServeArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tflow",
    version,
    about = "Ticketflow: support tickets with an enforced lifecycle",
    long_about = "Ticketflow tracks support tickets through created, in_progress and completed. Tickets live in .ticketflow/tickets.jsonl and can be served over a REST API.",
    after_help = "Examples:\n  tflow init\n  tflow create --requester 10 --topic bug --priority high --description \"App crashes\"\n  tflow update 1 --status in_progress --assignee 7\n  tflow finalize 1\n  tflow list --status completed\n  tflow serve --port 3000\n"
)]
struct Cli {
    /// Workspace root containing `.ticketflow` (defaults to the current directory)
    #[arg(long, global = true, env = "TICKETFLOW_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a Ticketflow data directory
    Init,

    /// Run the REST API server
    Serve(ServeArgs),

    /// Open a new ticket
    Create {
        /// Requesting user id
        #[arg(long)]
        requester: UserId,

        /// Topic (billing, bug, feature, other)
        #[arg(long)]
        topic: String,

        /// Priority (low, medium, high)
        #[arg(long)]
        priority: String,

        /// Ticket description
        #[arg(long)]
        description: String,

        /// Pre-assign a solver
        #[arg(long)]
        assignee: Option<UserId>,
    },

    /// List tickets
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by requester id
        #[arg(long)]
        requester: Option<String>,

        /// Filter by assignee id
        #[arg(long)]
        assignee: Option<String>,

        /// Filter by topic
        #[arg(long)]
        topic: Option<String>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<String>,
    },

    /// Show a ticket
    Show {
        /// Ticket id
        id: TicketId,
    },

    /// Change a ticket's status and/or assignee
    Update {
        /// Ticket id
        id: TicketId,

        /// New status (created, in_progress, completed)
        #[arg(long)]
        status: Option<String>,

        /// New assignee
        #[arg(long, conflicts_with = "unassign")]
        assignee: Option<UserId>,

        /// Remove the current assignee
        #[arg(long)]
        unassign: bool,
    },

    /// Complete an in_progress ticket
    Finalize {
        /// Ticket id
        id: TicketId,
    },

    /// Replace all tickets with generated demo data
    Seed {
        /// Number of tickets (defaults to seed_count from config)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        rng_seed: Option<u64>,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("TICKETFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let root = cli.data_dir.as_deref();

    match cli.command {
        Some(Commands::Init) => {
            commands::init::execute(root, formatter)?;
        }
        Some(Commands::Serve(args)) => {
            commands::serve::execute(cli.data_dir.clone(), args)?;
        }
        Some(Commands::Create {
            requester,
            topic,
            priority,
            description,
            assignee,
        }) => {
            let args = CreateArgs {
                requester,
                topic,
                priority,
                description,
                assignee,
            };
            commands::create::execute(root, args, formatter)?;
        }
        Some(Commands::List {
            status,
            requester,
            assignee,
            topic,
            priority,
        }) => {
            let options = ListOptions {
                status,
                requester_id: requester,
                assignee_id: assignee,
                topic,
                priority,
            };
            commands::list::execute(root, options, formatter)?;
        }
        Some(Commands::Show { id }) => {
            commands::show::execute(root, id, formatter)?;
        }
        Some(Commands::Update {
            id,
            status,
            assignee,
            unassign,
        }) => {
            let patch = commands::update::build_patch(status.as_deref(), assignee, unassign)?;
            commands::update::execute(root, id, patch, formatter)?;
        }
        Some(Commands::Finalize { id }) => {
            commands::finalize::execute(root, id, formatter)?;
        }
        Some(Commands::Seed { count, rng_seed }) => {
            commands::seed::execute(root, count, rng_seed, formatter)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    // The server installs its own JSON subscriber.
    if !matches!(cli.command, Some(Commands::Serve(_))) {
        init_logging();
    }

    match run(cli, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", formatter.format_error(&err));
            ExitCode::FAILURE
        }
    }
}
