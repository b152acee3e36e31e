// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and log level
//! - `[backend]` - Backend kind (`memory` or `http`), base URL and timeout
//! - `[catalog]` - Layout (`grid` or `list`) and grid column count
//! - `[capture]` - Picture directory and platform API level
//!
//! # Examples
//!
//! ```no_run
//! use storefront::app::config;
//! use std::path::Path;
//!
//! let path = Path::new("settings.toml");
//! let mut config = config::load_from_path(path).unwrap_or_default();
//! config.catalog.grid_columns = 3;
//! config::save_to_path(&config, path).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::catalog::GridColumns;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Process-local catalog pre-filled with sample products.
    #[default]
    Memory,
    /// REST backend at `base_url`.
    Http,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogLayout {
    #[default]
    Grid,
    List,
}

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// `log` level filter; `STOREFRONT_LOG` takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub layout: CatalogLayout,

    #[serde(default = "default_grid_columns")]
    pub grid_columns: u8,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            layout: CatalogLayout::default(),
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn columns(&self) -> GridColumns {
        GridColumns::new(self.grid_columns)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptureConfig {
    /// Overrides `<data dir>/pictures`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pictures_dir: Option<PathBuf>,

    #[serde(default = "default_platform_api_level")]
    pub platform_api_level: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            pictures_dir: None,
            platform_api_level: DEFAULT_PLATFORM_API_LEVEL,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub capture: CaptureConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_grid_columns() -> u8 {
    DEFAULT_GRID_COLUMNS
}

fn default_platform_api_level() -> u32 {
    DEFAULT_PLATFORM_API_LEVEL
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// A settings file that exists but could not be used.
///
/// Loading happens before the logger is installed, so the cause is handed
/// back to the caller instead of being logged here.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub error: Error,
}

impl LoadWarning {
    /// Notification shown when the defaults replace an unreadable file.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "notification-config-load-error"
    }
}

/// Loads the configuration from the default path.
///
/// An unreadable file yields the defaults and a [`LoadWarning`].
pub fn load() -> (Config, Option<LoadWarning>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<LoadWarning>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => (Config::default(), Some(LoadWarning { path, error })),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("es".to_string()),
                theme_mode: ThemeMode::Dark,
                log_level: Some("debug".to_string()),
            },
            backend: BackendConfig {
                kind: BackendKind::Http,
                base_url: "https://shop.test/api".to_string(),
                timeout_secs: 30,
            },
            catalog: CatalogConfig {
                layout: CatalogLayout::List,
                grid_columns: 3,
            },
            capture: CaptureConfig {
                pictures_dir: Some(PathBuf::from("/srv/pictures")),
                platform_api_level: 30,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[backend]\nkind = \"http\"\n").unwrap();
        assert_eq!(config.backend.kind, BackendKind::Http);
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.catalog.grid_columns, DEFAULT_GRID_COLUMNS);
        assert_eq!(config.capture.platform_api_level, DEFAULT_PLATFORM_API_LEVEL);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").unwrap();

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn invalid_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[catalog]\nlayout = \"carousel\"").unwrap();

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        let warning = warning.expect("warning for an invalid file");
        assert_eq!(warning.i18n_key(), "notification-config-load-error");
        assert_eq!(warning.path, temp_dir.path().join(CONFIG_FILE));
        assert!(matches!(warning.error, Error::Config(_)));
    }

    #[test]
    fn absent_file_is_not_a_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_use() {
        let config: Config =
            toml::from_str("[backend]\ntimeout_secs = 0\n[catalog]\ngrid_columns = 12\n").unwrap();
        assert_eq!(config.backend.timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));
        assert_eq!(config.catalog.columns().value(), 4);
    }
}
