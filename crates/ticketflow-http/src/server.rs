// Rust guideline compliant 2026-10-19

//! HTTP server runtime for Ticketflow.

use crate::routes::router;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;
use ticketflow_app::{AppError, DataDir};
use ticketflow_core::Config;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

/// Runtime options for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Optional workspace root holding `.ticketflow`.
    pub data_dir: Option<PathBuf>,
    /// Effective configuration after file, environment and flag overrides.
    pub config: Config,
    /// Optional log file path.
    pub log_file: Option<PathBuf>,
}

impl ServerOptions {
    /// Loads options from the data directory's configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is missing or its config is
    /// invalid.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self, ServerError> {
        let config = DataDir::discover(data_dir.as_deref())?.load_config()?;
        Ok(Self {
            data_dir,
            config,
            log_file: None,
        })
    }
}

/// Command-line overrides for a server run.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Refuse create, update and finalize requests
    #[arg(long)]
    pub read_only: bool,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Serve a built front-end bundle from this directory
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Disable the permissive CORS layer
    #[arg(long)]
    pub no_cors: bool,
}

impl ServeArgs {
    /// Applies the flags on top of loaded options.
    pub fn apply(self, options: &mut ServerOptions) {
        let config = &mut options.config;
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.read_only {
            config.read_only = true;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = Some(dir);
        }
        if self.no_cors {
            config.cors = false;
        }
        if self.log_file.is_some() {
            options.log_file = self.log_file;
        }
    }
}

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// IO errors during runtime setup or while serving.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    /// Data directory or configuration problems.
    #[error(transparent)]
    App(#[from] AppError),
}

/// Runs the HTTP server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration or log level is invalid
/// - The data directory is missing
/// - The address cannot be bound
pub fn run(options: ServerOptions) -> Result<(), ServerError> {
    options.config.validate().map_err(AppError::from)?;
    let _guard = init_tracing(&options.config.log_level, options.log_file.as_deref())?;

    let data_dir = DataDir::discover(options.data_dir.as_deref())?;
    let service = data_dir.open_service(&options.config)?;
    let app = router(service, &options.config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let config = &options.config;
        let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
        tracing::info!(
            addr = %listener.local_addr()?,
            data_dir = %data_dir.dir().display(),
            read_only = config.read_only,
            "ticketflow server listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("server stopped");
        Ok::<(), ServerError>(())
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl-C");
    }
}

fn init_tracing(
    log_level: &str,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>, ServerError> {
    let level = parse_log_level(log_level)?;
    let filter = EnvFilter::new(level.as_str().to_lowercase());

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns [`ServerError::InvalidLogLevel`] for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level, ServerError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(ServerError::InvalidLogLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert!(matches!(
            parse_log_level("verbose"),
            Err(ServerError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_load_requires_data_dir() {
        let temp = TempDir::new().unwrap();
        let err = ServerOptions::load(Some(temp.path().to_path_buf())).unwrap_err();
        assert!(matches!(
            err,
            ServerError::App(AppError::NotInitialized { .. })
        ));
    }

    #[test]
    fn test_flags_override_config() {
        let mut options = ServerOptions {
            data_dir: None,
            config: Config::default(),
            log_file: None,
        };
        let args = ServeArgs {
            port: Some(8080),
            read_only: true,
            no_cors: true,
            log_file: Some(PathBuf::from("server.log")),
            ..ServeArgs::default()
        };
        args.apply(&mut options);

        assert_eq!(options.config.port, 8080);
        assert!(options.config.read_only);
        assert!(!options.config.cors);
        assert_eq!(options.config.host, "127.0.0.1");
        assert_eq!(options.log_file, Some(PathBuf::from("server.log")));
    }
}
