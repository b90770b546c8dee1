//! SiteConfig - Startup Settings
//!
//! Read from `avagh-site.toml` in the platform config directory:
//!
//! ```toml
//! default_locale = "en"
//! storage_file = "/var/lib/avagh/preferences.json"
//! transition_delay_ms = 100
//! system_poll_interval_ms = 1000
//! watch_system_theme = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_STORAGE_FILE, SYSTEM_POLL_INTERVAL_MS, TRANSITION_DELAY_MS,
};
use crate::error::Result;
use crate::helpers::{get_or_create_config_dir, get_or_create_data_dir};
use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Locale the site starts in
    pub default_locale: String,
    /// Preference store file; defaults to the data directory
    pub storage_file: Option<PathBuf>,
    pub transition_delay_ms: u64,
    pub system_poll_interval_ms: u64,
    /// Follow OS color-scheme changes while running
    pub watch_system_theme: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default().code().to_string(),
            storage_file: None,
            transition_delay_ms: TRANSITION_DELAY_MS,
            system_poll_interval_ms: SYSTEM_POLL_INTERVAL_MS,
            watch_system_theme: true,
        }
    }
}

impl SiteConfig {
    /// Load from the platform config directory, falling back to defaults
    pub fn load() -> Self {
        match get_or_create_config_dir() {
            Ok(dir) => Self::load_from(&dir.join(CONFIG_FILE_NAME)),
            Err(e) => {
                warn!(error = %e, "Config directory unavailable, using defaults");
                Self::default()
            }
        }
    }

    /// Load `path`; missing, empty or malformed files yield defaults
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = ?path, "Invalid config file, using defaults");
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string_pretty(self)?;
        fs::write(path, value)?;
        Ok(())
    }

    /// Configured start locale; unknown codes fall back to the default locale
    pub fn locale(&self) -> Locale {
        self.default_locale.parse().unwrap_or_else(|_| {
            warn!(code = %self.default_locale, "Unsupported default_locale in config");
            Locale::default()
        })
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    pub fn system_poll_interval(&self) -> Duration {
        Duration::from_millis(self.system_poll_interval_ms)
    }

    /// Preference store location, creating the data directory when needed
    pub fn storage_path(&self) -> Result<PathBuf> {
        match &self.storage_file {
            Some(path) => Ok(path.clone()),
            None => Ok(get_or_create_data_dir()?.join(DEFAULT_STORAGE_FILE)),
        }
    }
}
