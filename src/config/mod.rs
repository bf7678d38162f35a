//! Configuration for the browser menubar
//!
//! Persistent options live in a TOML file in the platform config
//! directory under `dev.browser-menubar`:
//!
//! - **Linux**: `~/.config/dev.browser-menubar/config.toml`
//! - **macOS**: `~/Library/Application Support/dev.browser-menubar/config.toml`
//! - **Windows**: `%APPDATA%\dev.browser-menubar\config.toml`
//!
//! A missing file means defaults. [`settings::MenubarSettings`] is the
//! runtime view of the options the user can toggle while the app runs.
//!
//! # Example
//!
//! ```ignore
//! use browser_menubar::config::AppConfig;
//!
//! let mut config = AppConfig::load_or_default();
//! config.autohide_menubar = true;
//! config.save()?;
//! ```

pub mod settings;

pub use settings::MenubarSettings;

use crate::error::{MenubarError, Result};
use crate::i18n::Language;
use crate::menu::{build_default_template, MenuTemplateState};
use crate::types::Template;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for config directories
pub const APP_ID: &str = "dev.browser-menubar";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Current config file version
pub const CONFIG_VERSION: u32 = 1;

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info,browser_menubar=debug";

// ==================== Config Directory ====================

/// Get the application config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

/// Ensure the config directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().ok_or_else(|| {
        MenubarError::Config("Could not determine config directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            MenubarError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

// ==================== App Config ====================

/// Persistent application options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Config format version
    pub version: u32,

    /// Hide the menubar until Alt is pressed
    pub autohide_menubar: bool,

    /// UI language
    pub language: Language,

    /// Show developer entries (e.g. developer tools) in the menus
    pub developer_mode: bool,

    /// Custom menu template (JSON or TOML); the built-in one is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,

    /// `tracing_subscriber` filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            autohide_menubar: false,
            language: Language::default(),
            developer_mode: false,
            template_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load config from a file; a missing file yields defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| MenubarError::Config(format!("Failed to read config: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| MenubarError::Config(format!("Failed to parse config: {}", e)))?;

        if config.version > CONFIG_VERSION {
            tracing::warn!(
                "Config version {} is newer than supported version {}",
                config.version,
                CONFIG_VERSION
            );
        }

        Ok(config)
    }

    /// Save config to a file, creating parent directories as needed
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    MenubarError::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MenubarError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| MenubarError::Config(format!("Failed to write config: {}", e)))
    }

    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or_else(|| {
            MenubarError::Config("Could not determine config path".to_string())
        })?;
        Self::load_from(path)
    }

    /// Load config, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_config_dir()?;
        self.save_to(dir.join(CONFIG_FILE))
    }

    /// Template named by `template_path`, or the built-in one.
    ///
    /// A custom template that fails to load falls back to the built-in
    /// template with a warning.
    pub fn load_template(&self) -> Template {
        let state = MenuTemplateState {
            developer_mode: self.developer_mode,
        };

        match &self.template_path {
            Some(path) => Template::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load menu template, using built-in: {}", e);
                build_default_template(&state)
            }),
            None => build_default_template(&state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(!config.autohide_menubar);
        assert!(!config.developer_mode);
        assert_eq!(config.language, Language::English);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str("autohide_menubar = true").unwrap();
        assert!(config.autohide_menubar);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.template_path.is_none());
    }

    #[test]
    fn test_app_config_serialization() {
        let config = AppConfig {
            language: Language::SimplifiedChinese,
            template_path: Some(PathBuf::from("menus.toml")),
            ..Default::default()
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_template_falls_back_to_builtin() {
        let config = AppConfig {
            template_path: Some(PathBuf::from("/nonexistent/menus.json")),
            ..Default::default()
        };
        assert_eq!(config.load_template().len(), 7);
    }
}
