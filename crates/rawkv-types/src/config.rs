//! Configuration loading for RawKV.
//!
//! Layered precedence, later sources override earlier:
//! 1. Built-in defaults
//! 2. Config file (~/.config/rawkv/config.toml)
//! 3. Environment variables (RAWKV_*)
//! 4. CLI flags (applied by the caller after `load` returns)

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::KvError;

/// Main application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the storage engine directory
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_db_path() -> String {
    ProjectDirs::from("", "", "rawkv")
        .map(|p| p.data_local_dir().join("db"))
        .unwrap_or_else(|| PathBuf::from("./data"))
        .to_string_lossy()
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence. CLI flags are applied by the
    /// caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, KvError> {
        let config_dir = ProjectDirs::from("", "", "rawkv")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("db_path", default_db_path())
            .map_err(|e| KvError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| KvError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Format: RAWKV_DB_PATH, RAWKV_LOG_LEVEL. Settings keys are flat,
        // so no nesting separator.
        builder = builder.add_source(Environment::with_prefix("RAWKV").try_parsing(true));

        let config = builder
            .build()
            .map_err(|e| KvError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| KvError::Config(e.to_string()))
    }

    /// Database path as a `PathBuf`.
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.db_path.is_empty());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "db_path = \"/tmp/rawkv-test\"").unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let settings = Settings::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(settings.db_path, "/tmp/rawkv-test");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_missing_cli_config_is_error() {
        let result = Settings::load(Some("/nonexistent/rawkv-config.toml"));
        assert!(matches!(result, Err(KvError::Config(_))));
    }
}
