//! Suggest configuration persistence
//!
//! Stores settings in `~/.config/column-suggest/config.yaml`. The custom field
//! tables normally come from the issue tracker; this file is where a host
//! hands them over.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::vocabulary::CustomFields;

/// Configuration injected into the suggest engine at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Prefix requesting the condensed rendering of a column
    #[serde(default = "default_compact_symbol")]
    pub compact_symbol: char,

    /// Maximum number of candidates offered at once
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Key introducing the column list (`columns:`)
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Block type following the opening fence (```` ```jira-search ````)
    #[serde(default = "default_fence_block")]
    pub fence_block: String,

    #[serde(default)]
    pub custom_fields: CustomFields,
}

fn default_compact_symbol() -> char {
    '-'
}

fn default_limit() -> usize {
    100
}

fn default_keyword() -> String {
    "columns".to_string()
}

fn default_fence_block() -> String {
    "jira-search".to_string()
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            compact_symbol: default_compact_symbol(),
            limit: default_limit(),
            keyword: default_keyword(),
            fence_block: default_fence_block(),
            custom_fields: CustomFields::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    NoConfigDir,
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No config directory available"),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SuggestConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }

    /// Parse config from YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| {
            ConfigError::IoError(format!("Failed to write config to {}: {}", path.display(), e))
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
