// Rust guideline compliant 2026-10-19

//! Data directory discovery and path management utilities.

use crate::error::{AppError, Result};
use crate::service::TicketService;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use ticketflow_core::{Config, JsonlStore, MemoryStore, StorageBackend, TicketStore};

/// Name of the data directory created under the workspace root.
pub const DATA_DIR_NAME: &str = ".ticketflow";

/// Resolved paths for a Ticketflow data directory.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
    dir: PathBuf,
    tickets_path: PathBuf,
    config_path: PathBuf,
}

impl DataDir {
    fn at(root: PathBuf) -> Self {
        let dir = root.join(DATA_DIR_NAME);
        Self {
            root,
            tickets_path: dir.join("tickets.jsonl"),
            config_path: dir.join("config.toml"),
            dir,
        }
    }

    fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
        Ok(match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        })
    }

    /// Discovers an existing data directory under `root` or the current
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.ticketflow` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let data_dir = Self::at(Self::resolve_root(root)?);
        if !data_dir.dir.exists() {
            return Err(AppError::NotInitialized {
                path: data_dir.dir.clone(),
            });
        }
        Ok(data_dir)
    }

    /// Creates the data directory, an empty ticket file and a default config.
    ///
    /// Existing files are left untouched, so running it twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the files cannot be created.
    pub fn init(root: Option<&Path>) -> Result<Self> {
        let data_dir = Self::at(Self::resolve_root(root)?);

        if !data_dir.dir.exists() {
            fs::create_dir_all(&data_dir.dir)?;
        }
        if !data_dir.tickets_path.exists() {
            fs::File::create(&data_dir.tickets_path)?;
        }
        if !data_dir.config_path.exists() {
            Config::default().save(&data_dir.dir)?;
        }

        tracing::info!(path = %data_dir.dir.display(), "data directory initialized");
        Ok(data_dir)
    }

    /// Returns the workspace root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.ticketflow` directory path.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    /// Returns the tickets JSONL path.
    #[must_use]
    pub fn tickets_path(&self) -> &Path {
        self.tickets_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Loads configuration for this data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.dir())?)
    }

    /// Opens the store selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSONL store cannot be initialized.
    pub fn open_store(&self, config: &Config) -> Result<Arc<dyn TicketStore>> {
        Ok(match config.storage {
            StorageBackend::Jsonl => Arc::new(JsonlStore::new(self.tickets_path.clone())?),
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
        })
    }

    /// Builds a service over the configured store, honouring `read_only`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub fn open_service(&self, config: &Config) -> Result<TicketService> {
        let store = self.open_store(config)?;
        Ok(TicketService::new(store).with_read_only(config.read_only))
    }
}
