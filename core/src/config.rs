//! User configuration for probe tools and report limits.
//!
//! Stored in JSON format at `~/.whoport/config.json`. Every field has a
//! default, so a missing or partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Program used for open-file/socket listings.
    #[serde(default = "default_lsof_path")]
    pub lsof_path: String,

    /// Program used for process listings.
    #[serde(default = "default_ps_path")]
    pub ps_path: String,

    /// Connection lines shown in the human `process` report.
    #[serde(default = "default_connection_limit")]
    pub connection_limit: usize,
}

fn default_lsof_path() -> String {
    "lsof".to_string()
}

fn default_ps_path() -> String {
    "ps".to_string()
}

fn default_connection_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lsof_path: default_lsof_path(),
            ps_path: default_ps_path(),
            connection_limit: default_connection_limit(),
        }
    }
}

/// Configuration store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a config store at the default location (`~/.whoport/config.json`).
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        Ok(Self {
            config_path: home.join(".whoport").join("config.json"),
        })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        if !fs::try_exists(&self.config_path).await.unwrap_or(false) {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist. The file is written
    /// to a temp path first and renamed into place.
    pub async fn save(&self, config: &Config) -> Result<()> {
        if let Some(config_dir) = self.config_path.parent() {
            fs::create_dir_all(config_dir)
                .await
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        let temp_path = self.config_path.with_extension("json.tmp");

        if let Err(e) = self.write_and_swap(&temp_path, content.as_bytes()).await {
            // Leave no half-written temp file behind.
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        Ok(())
    }

    async fn write_and_swap(&self, temp_path: &Path, content: &[u8]) -> Result<()> {
        let mut file = fs::File::create(temp_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to create temp config file: {}", e)))?;

        file.write_all(content)
            .await
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Config(format!("Failed to sync config: {}", e)))?;

        fs::rename(temp_path, &self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to rename config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store() -> (ConfigStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        (ConfigStore::with_path(path), dir)
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let (store, _dir) = test_store();
        let config = store.load().await.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.lsof_path, "lsof");
        assert_eq!(config.connection_limit, 5);
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _dir) = test_store();

        let config = Config {
            lsof_path: "/usr/sbin/lsof".to_string(),
            ps_path: "/bin/ps".to_string(),
            connection_limit: 10,
        };
        store.save(&config).await.unwrap();

        assert!(store.path().exists());
        assert!(!store.path().with_extension("json.tmp").exists());
        assert_eq!(store.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn test_failed_save_removes_temp_file() {
        let (store, _dir) = test_store();
        // A directory where the file should go makes the final rename fail.
        std::fs::create_dir_all(store.path()).unwrap();
        std::fs::write(store.path().join("keep"), "x").unwrap();

        let result = store.save(&Config::default()).await;
        assert!(matches!(result, Err(Error::Config(_))));
        assert!(!store.path().with_extension("json.tmp").exists());
        assert!(store.path().is_dir());
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let (store, _dir) = test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), r#"{"lsofPath": "/opt/lsof"}"#).unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.lsof_path, "/opt/lsof");
        assert_eq!(config.ps_path, "ps");
        assert_eq!(config.connection_limit, 5);
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let (store, _dir) = test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "not json").unwrap();

        let result = store.load().await;
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
