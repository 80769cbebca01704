//! # Config Module
//!
//! Application settings loaded from `config.yaml`.
//!
//! ## Lookup order:
//! 1. An explicit path passed to `AppConfig::load_from`
//! 2. `config.yaml` in the platform config directory (`ProjectDirs`)
//! 3. Built-in defaults when no file exists
//!
//! Environment variables `EXPENSES_BACKEND_URL` and `EXPENSES_LOG_FILTER`
//! override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const BACKEND_URL_ENV: &str = "EXPENSES_BACKEND_URL";
pub const LOG_FILTER_ENV: &str = "EXPENSES_LOG_FILTER";

const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Where the expense backend lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Behaviour switches for the manage-expense screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManageExpenseConfig {
    /// Restore the previous record in the store when a backend update fails.
    /// Off by default: the optimistic value is kept.
    pub rollback_failed_updates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub manage_expense: ManageExpenseConfig,
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            manage_expense: ManageExpenseConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Default config file location for this platform, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ExpenseTracker", "expense-tracker")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the platform config directory with environment overrides applied
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("📁 No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("📁 Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides through `lookup` so tests need not touch the real env
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.backend.base_url = url;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.trim().is_empty()) {
            self.log_filter = filter;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();

        let config = AppConfig::load_from(&dir.path().join("config.yaml")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(!config.manage_expense.rollback_failed_updates);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "backend:\n  base_url: https://demo.firebaseio.com\nmanage_expense:\n  rollback_failed_updates: true\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.backend.base_url, "https://demo.firebaseio.com");
        assert_eq!(config.backend.timeout_secs, 10);
        assert!(config.manage_expense.rollback_failed_updates);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "backend: [not, a, map").unwrap();

        let result = AppConfig::load_from(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (BACKEND_URL_ENV, "http://127.0.0.1:4000"),
            (LOG_FILTER_ENV, "debug"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::default()
            .with_env_overrides(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(config.backend.base_url, "http://127.0.0.1:4000");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config = AppConfig::default().with_env_overrides(|_| Some("  ".to_string()));

        assert_eq!(config, AppConfig::default());
    }
}
