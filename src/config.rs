//! YAML configuration file handling.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_bind() -> String {
    "127.0.0.1:8420".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database: String,
    /// Address the HTTP server listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            bind: default_bind(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("workclock")
    }

    /// Return the full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workclock.yaml")
    }

    /// Return the full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("workclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
        } else {
            Ok(Self::default())
        }
    }

    /// Write the config file, creating the directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }
}
