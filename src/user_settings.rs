use crate::config::{self, Config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "disperse_settings.json";

const APP_DIR: &str = "disperse-input";

fn default_address_prefix() -> String {
    config::DEFAULT_ADDRESS_PREFIX.to_string()
}

fn default_address_length() -> usize {
    config::DEFAULT_ADDRESS_LENGTH
}

fn default_delimiters() -> String {
    config::DEFAULT_DELIMITERS.iter().collect()
}

fn default_native_token() -> String {
    config::DEFAULT_NATIVE_TOKEN.to_string()
}

fn default_preview_limit() -> usize {
    config::DEFAULT_PREVIEW_LIMIT
}

/// User settings that persist between sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    /// Required address prefix
    #[serde(default = "default_address_prefix")]
    pub address_prefix: String,
    /// Required address length, prefix included
    #[serde(default = "default_address_length")]
    pub address_length: usize,
    /// Separator characters, stored as one string (e.g. "=, ")
    #[serde(default = "default_delimiters")]
    pub delimiters: String,
    /// Token symbol shown next to amounts
    #[serde(default = "default_native_token")]
    pub native_token: String,
    /// Recipients listed in the preview before collapsing
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            address_prefix: default_address_prefix(),
            address_length: default_address_length(),
            delimiters: default_delimiters(),
            native_token: default_native_token(),
            preview_limit: default_preview_limit(),
        }
    }
}

impl UserSettings {
    /// Get the settings file path
    fn settings_path() -> PathBuf {
        // Try to use the app data directory, fall back to current directory
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join(APP_DIR).join(SETTINGS_FILE)
        } else {
            PathBuf::from(SETTINGS_FILE)
        }
    }

    /// Get the settings file path for display
    pub fn settings_path_display() -> String {
        Self::settings_path().display().to_string()
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    /// Load from `path`; a missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => {
                        tracing::info!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse settings file: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read settings file: {}", e);
                }
            }
        }
        tracing::info!("Using default settings");
        Self::default()
    }

    /// Save settings to disk
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write settings to {:?}", path))?;
        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Build the runtime rules. Empty values fall back to the built-in ones.
    pub fn to_config(&self) -> Config {
        let mut config = Config::builtin();
        if !self.address_prefix.is_empty() {
            config.address_prefix = self.address_prefix.clone();
        }
        config.address_length = self.address_length;
        if !self.delimiters.is_empty() {
            let mut delimiters: Vec<char> = self.delimiters.chars().collect();
            delimiters.dedup();
            config.delimiters = delimiters;
        }
        if !self.native_token.trim().is_empty() {
            config.native_token = self.native_token.trim().to_string();
        }
        config.preview_limit = self.preview_limit;
        config
    }
}
