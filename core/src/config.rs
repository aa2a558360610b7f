//! Configuration management for scan and monitor defaults.
//!
//! Stores configuration in JSON format at `~/.portreaper/config.json`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{Error, Result};

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default port spec for `scan` when no --ports flag is given.
    #[serde(default = "default_ports")]
    pub default_ports: String,

    /// Monitor refresh interval in seconds.
    #[serde(default = "default_monitor_interval")]
    pub monitor_interval_secs: u64,

    /// Per-port connect timeout for the remote probe, in milliseconds.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_ms: u64,

    /// Number of in-flight connection attempts during a probe.
    #[serde(default = "default_probe_concurrency")]
    pub probe_concurrency: usize,
}

fn default_ports() -> String {
    "1-1024".to_string()
}

fn default_monitor_interval() -> u64 {
    2
}

fn default_probe_timeout() -> u64 {
    250
}

fn default_probe_concurrency() -> usize {
    128
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ports: default_ports(),
            monitor_interval_secs: default_monitor_interval(),
            probe_timeout_ms: default_probe_timeout(),
            probe_concurrency: default_probe_concurrency(),
        }
    }
}

/// Configuration store for managing tool settings.
///
/// Handles reading and writing configuration to `~/.portreaper/config.json`.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.portreaper/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        Ok(Self {
            config_path: home.join(".portreaper").join("config.json"),
        })
    }

    /// Create a config store with a custom path (for testing).
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        match fs::read_to_string(&self.config_path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| Error::Config(format!("invalid config file: {}", e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save configuration to disk, creating the directory if needed.
    pub async fn save(&self, config: &Config) -> Result<()> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, json).await?;
        Ok(())
    }

    /// Whether a config file already exists on disk.
    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.config_path).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_path(dir.path().join("config.json"));

        let config = store.load().await.unwrap();
        assert_eq!(config, Config::default());
        assert!(!store.exists().await);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_path(dir.path().join("nested").join("config.json"));

        let config = Config {
            default_ports: "8000-9000".to_string(),
            monitor_interval_secs: 5,
            probe_timeout_ms: 100,
            probe_concurrency: 32,
        };
        store.save(&config).await.unwrap();

        assert!(store.exists().await);
        assert_eq!(store.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn test_partial_file_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"monitor_interval_secs": 10}"#).unwrap();

        let store = ConfigStore::with_path(path);
        let config = store.load().await.unwrap();
        assert_eq!(config.monitor_interval_secs, 10);
        assert_eq!(config.default_ports, "1-1024");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let store = ConfigStore::with_path(path);
        assert!(matches!(store.load().await, Err(Error::Config(_))));
    }
}
