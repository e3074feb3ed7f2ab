//! Configuration file handling
//!
//! The config is a JSON document; every field has a default, and a missing
//! file means "all defaults".

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (default: "inventory.sqlite")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("inventory.sqlite")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when absent
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        database: Option<PathBuf>,
    ) -> CliResult<Self> {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(database) = database {
            self.database_path = database;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> CliResult<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("inventory.json");
        fs::write(
            &path,
            r#"{"database_path": "/var/lib/inventory.sqlite", "server": {"port": 8081}}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/var/lib/inventory.sqlite"));
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_json_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("inventory.json");
        fs::write(&path, "{not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = Config::default().with_overrides(Some(0), None).unwrap_err();
        assert!(err.message().contains("port"));
    }

    #[test]
    fn test_overrides_apply() {
        let config = Config::default()
            .with_overrides(Some(9000), Some(PathBuf::from("other.sqlite")))
            .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database_path, PathBuf::from("other.sqlite"));
    }
}
