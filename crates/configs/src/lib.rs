//! # configs
//!
//! Layered configuration for AcademicHub. Sources, lowest priority first:
//! - built-in defaults
//! - `config/academic-hub.{toml,yaml,json}` (optional)
//! - environment variables prefixed `AH__`, e.g. `AH__STORAGE__BACKEND=local`
//!
//! A `.env` file in the working directory is loaded into the environment first.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config/academic-hub";
pub const ENV_PREFIX: &str = "AH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map, gone on exit
    Memory,
    /// One JSON file per key under `storage.root`
    #[default]
    Local,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub root: PathBuf,
    /// Prepended to every storage key
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Local,
            root: PathBuf::from("./data/store"),
            key_prefix: "ah_".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Populate demonstration data on first start
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` wins when set
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env`, the optional config file, and `AH__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"));
        Self::from_config(builder.build()?)
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_empty_sources_give_defaults() {
        let cfg = AppConfig::from_config(Config::builder().build().unwrap()).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.storage.key_prefix, "ah_");
        assert!(cfg.seed.enabled);
    }

    #[test]
    fn test_file_source_overrides_defaults() {
        let toml = r#"
            [storage]
            backend = "memory"
            key_prefix = "test_"

            [logging]
            json = true
        "#;
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();
        let cfg = AppConfig::from_config(config).unwrap();

        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.storage.key_prefix, "test_");
        assert_eq!(cfg.storage.root, PathBuf::from("./data/store"));
        assert!(cfg.logging.json);
        assert_eq!(cfg.logging.filter, "info");
    }

    #[test]
    fn test_override_disables_seeding() {
        let config = Config::builder()
            .set_override("seed.enabled", false)
            .unwrap()
            .build()
            .unwrap();
        assert!(!AppConfig::from_config(config).unwrap().seed.enabled);
    }

    #[test]
    fn test_unknown_backend_is_an_error() {
        let config = Config::builder()
            .set_override("storage.backend", "cassandra")
            .unwrap()
            .build()
            .unwrap();
        assert!(AppConfig::from_config(config).is_err());
    }
}
