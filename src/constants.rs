//! Site Constants
//!
//! Centralized constants shared by the preference managers and the site shell.

/// Storage key of the persisted theme preference blob
pub const THEME_STORAGE_KEY: &str = "avagh-theme-v2";

/// Delay before smooth theme transitions are enabled (avoids initial-paint flicker)
pub const TRANSITION_DELAY_MS: u64 = 100;

/// How often the native color-scheme watcher polls the OS
pub const SYSTEM_POLL_INTERVAL_MS: u64 = 1000;

/// Application identity used for config/data directories
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "avagh-media";
pub const APP_NAME: &str = "avagh-site";

/// File names inside the config/data directories
pub const CONFIG_FILE_NAME: &str = "avagh-site.toml";
pub const DEFAULT_STORAGE_FILE: &str = "preferences.json";

/// Document class and attribute names
pub const CLASS_THEME_LIGHT: &str = "theme-light";
pub const CLASS_THEME_DARK: &str = "theme-dark";
pub const CLASS_TRANSITIONS_ENABLED: &str = "theme-transitions-enabled";
pub const ATTR_THEME: &str = "data-theme";
pub const ATTR_THEME_MODE: &str = "data-theme-mode";
pub const ATTR_LANGUAGE: &str = "data-language";
pub const ATTR_LANG: &str = "lang";
pub const ATTR_DIR: &str = "dir";
pub const META_COLOR_SCHEME: &str = "color-scheme";

/// Contact form limits
pub const NAME_MIN_LENGTH: usize = 2;
pub const MESSAGE_MIN_LENGTH: usize = 10;
