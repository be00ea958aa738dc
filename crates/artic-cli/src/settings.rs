//! Persisted settings.
//!
//! Loaded from `settings.toml` in the user's config directory at startup.
//! A missing or unreadable file means defaults; flags given on the command
//! line win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use artic_client::ClientConfig;
use artic_model::PageSize;

/// Default table width in columns.
pub const DEFAULT_TABLE_WIDTH: u16 = 140;

/// Root of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Collection API access.
    pub client: ClientConfig,

    /// Table presentation.
    pub display: DisplaySettings,
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows per page: 6, 12 or 24.
    pub page_size: PageSize,

    /// Maximum table width in terminal columns.
    pub table_width: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            table_width: DEFAULT_TABLE_WIDTH,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "No settings file, using defaults"
                );
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring invalid settings file"
                );
                Self::default()
            }
        }
    }

    /// Save settings to `path`, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).with_context(|| format!("write {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize settings")
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("edu", "ArticBrowser", "ArticBrowser")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}
