use crate::errors::BackendResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Endpoint used when no configuration or override supplies one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Identifier sent as `user_id` with every query. The backend keys its
/// per-user session on it; the client treats it as an opaque constant.
pub const DEFAULT_USER_ID: &str = "frontend_user";

/// Configuration struct for the query bot client
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuerybotConfig {
    pub base_url: Option<String>,
    pub user_id: Option<String>,
    pub log_level: Option<String>,
}

impl Default for QuerybotConfig {
    fn default() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            user_id: Some(DEFAULT_USER_ID.to_string()),
            log_level: Some("info".to_string()),
        }
    }
}

impl QuerybotConfig {
    /// Loads configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> BackendResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Default config file location (`<config dir>/querybot/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("querybot").join("config.toml"))
    }

    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> BackendResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                crate::errors::BackendError::Config(format!("Failed to read config file: {}", e))
            })?;

            let config: Self = toml::from_str(&content).map_err(|e| {
                crate::errors::BackendError::Config(format!("Failed to parse config file: {}", e))
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to a file
    pub fn save_to_file(&self, path: &Path) -> BackendResult<()> {
        let content = toml::to_string(self).map_err(|e| {
            crate::errors::BackendError::Config(format!("Failed to serialize config: {}", e))
        })?;

        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                crate::errors::BackendError::Config(format!(
                    "Failed to create config directory: {}",
                    e
                ))
            })?;
        }

        fs::write(path, content).map_err(|e| {
            crate::errors::BackendError::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Merges this config with another config, preferring values from the other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            base_url: other.base_url.clone().or_else(|| self.base_url.clone()),
            user_id: other.user_id.clone().or_else(|| self.user_id.clone()),
            log_level: other.log_level.clone().or_else(|| self.log_level.clone()),
        }
    }

    /// The endpoint to contact, with the default applied
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// The user id to send, with the default applied
    pub fn resolved_user_id(&self) -> String {
        self.user_id
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string())
    }
}
