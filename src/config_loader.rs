use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::constants::DEFAULT_LOG_FILTER;

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppInfo,
    // Add more sections as needed
}

/// Diagnostics settings. Nothing in here touches the wire protocol; the
/// request/response contract takes no configuration at all.
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Read the file
        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        // Parse the TOML
        let config: AppConfig = toml::from_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        Ok(config)
    }

    /// Load from the given path, falling back to built-in defaults when the
    /// file is absent or unreadable. Runs before the logger is up, so a
    /// missing config stays silent rather than aborting startup.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }
}
