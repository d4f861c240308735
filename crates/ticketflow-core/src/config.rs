// Rust guideline compliant 2026-10-19

//! Configuration management for Ticketflow.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Backing store used by the server and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// One ticket per line in `tickets.jsonl`.
    #[default]
    Jsonl,
    /// Process-local map, lost on exit.
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "jsonl" => Some(StorageBackend::Jsonl),
            "memory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }
}

/// Configuration for Ticketflow behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Backing store.
    #[serde(default)]
    pub storage: StorageBackend,

    /// Whether mutating operations are refused.
    #[serde(default)]
    pub read_only: bool,

    /// Whether cross-origin requests are allowed.
    #[serde(default = "default_cors")]
    pub cors: bool,

    /// Directory holding a built front-end bundle to serve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,

    /// Number of tickets generated by `seed`.
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cors() -> bool {
    true
}

fn default_seed_count() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            storage: StorageBackend::default(),
            read_only: false,
            cors: default_cors(),
            static_dir: None,
            seed_count: default_seed_count(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.ticketflow/config.toml`
    /// 3. Environment variables with `TICKETFLOW_` prefix
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the `.ticketflow` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = data_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TICKETFLOW_HOST`
    /// - `TICKETFLOW_PORT`
    /// - `TICKETFLOW_LOG_LEVEL`
    /// - `TICKETFLOW_STORAGE` (jsonl/memory)
    /// - `TICKETFLOW_READ_ONLY` (true/false)
    /// - `TICKETFLOW_CORS` (true/false)
    /// - `TICKETFLOW_STATIC_DIR`
    /// - `TICKETFLOW_SEED_COUNT`
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TICKETFLOW_HOST") {
            self.host = val;
        }

        if let Ok(val) = std::env::var("TICKETFLOW_PORT") {
            self.port = val.parse().map_err(|_| {
                Error::Config("TICKETFLOW_PORT must be a number 1-65535".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TICKETFLOW_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("TICKETFLOW_STORAGE") {
            self.storage = StorageBackend::parse(&val).ok_or_else(|| {
                Error::Config("TICKETFLOW_STORAGE must be jsonl or memory".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TICKETFLOW_READ_ONLY") {
            self.read_only = val.parse().map_err(|_| {
                Error::Config("TICKETFLOW_READ_ONLY must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TICKETFLOW_CORS") {
            self.cors = val
                .parse()
                .map_err(|_| Error::Config("TICKETFLOW_CORS must be true or false".to_string()))?;
        }

        if let Ok(val) = std::env::var("TICKETFLOW_STATIC_DIR") {
            self.static_dir = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }

        if let Ok(val) = std::env::var("TICKETFLOW_SEED_COUNT") {
            self.seed_count = val.parse().map_err(|_| {
                Error::Config("TICKETFLOW_SEED_COUNT must be a positive number".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - port is zero
    /// - log_level is not a known level
    /// - seed_count is zero
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::Config("port must be greater than 0".to_string()));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        if self.seed_count == 0 {
            return Err(Error::Config(
                "seed_count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `config.toml` in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    const ENV_VARS: [&str; 8] = [
        "TICKETFLOW_HOST",
        "TICKETFLOW_PORT",
        "TICKETFLOW_LOG_LEVEL",
        "TICKETFLOW_STORAGE",
        "TICKETFLOW_READ_ONLY",
        "TICKETFLOW_CORS",
        "TICKETFLOW_STATIC_DIR",
        "TICKETFLOW_SEED_COUNT",
    ];

    fn clear_all_env_vars() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.storage, StorageBackend::Jsonl);
        assert!(!config.read_only);
        assert!(config.cors);
        assert_eq!(config.static_dir, None);
        assert_eq!(config.seed_count, 100);
    }

    #[test]
    #[serial]
    fn test_config_load_missing_file() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_load_from_file() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
host = "0.0.0.0"
port = 8080
log_level = "debug"
storage = "memory"
read_only = true
cors = false
static_dir = "dist"
seed_count = 25
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.read_only);
        assert!(!config.cors);
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.seed_count, 25);
    }

    #[test]
    #[serial]
    fn test_config_validation_zero_port() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "port = 0").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    #[serial]
    fn test_config_validation_unknown_log_level() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "log_level = \"loud\"").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    #[serial]
    fn test_config_invalid_toml() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "port = [").unwrap();
        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    #[serial]
    fn test_config_env_override_port() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("TICKETFLOW_PORT", "4100");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.port, 4100);

        clear_all_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_env_override_storage() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("TICKETFLOW_STORAGE", "memory");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);

        clear_all_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_env_invalid_read_only() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("TICKETFLOW_READ_ONLY", "sometimes");
        assert!(Config::load(temp_dir.path()).is_err());

        clear_all_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_file_overridden_by_env() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "port = 8080").unwrap();

        std::env::set_var("TICKETFLOW_PORT", "9090");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.port, 9090);

        clear_all_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_save_and_load() {
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            host: "0.0.0.0".to_string(),
            port: 4000,
            log_level: "warn".to_string(),
            storage: StorageBackend::Memory,
            read_only: true,
            cors: false,
            static_dir: Some(PathBuf::from("public")),
            seed_count: 10,
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
