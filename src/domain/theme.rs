//! Theme domain types
//!
//! The tri-state preference, its derived effective value, and the persisted blob.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// User theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the OS color-scheme signal
    #[default]
    Auto,
}

impl ThemeMode {
    /// Fixed `cycle` order
    pub const ROTATION: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    /// Successor under `light -> dark -> auto -> light`
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Auto,
            ThemeMode::Auto => ThemeMode::Light,
        }
    }

    /// Effective darkness for this mode given the OS signal
    pub fn resolve(self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::Auto => system_prefers_dark,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::Auto => "System",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "☀️",
            ThemeMode::Dark => "🌙",
            ThemeMode::Auto => "💻",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" => Ok(ThemeMode::Auto),
            other => Err(Error::InvalidThemeMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Snapshot of the theme state, also the payload of theme change events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub is_dark: bool,
    pub system_prefers_dark: bool,
}

impl ThemeConfig {
    pub fn new(mode: ThemeMode, system_prefers_dark: bool) -> Self {
        Self {
            mode,
            is_dark: mode.resolve(system_prefers_dark),
            system_prefers_dark,
        }
    }
}

/// Entry of the theme picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeOption {
    pub value: ThemeMode,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Picker entries in rotation order
pub fn available_themes() -> [ThemeOption; 3] {
    ThemeMode::ROTATION.map(|mode| ThemeOption {
        value: mode,
        label: mode.label(),
        icon: mode.icon(),
    })
}

/// Persisted preference blob: `{"mode": "dark", "timestamp": 1700000000000}`
///
/// Older blobs keyed the mode as `theme`; both spellings are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTheme {
    #[serde(alias = "theme")]
    pub mode: ThemeMode,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: i64,
}

impl PersistedTheme {
    /// Stamp a mode with the current time
    pub fn now(mode: ThemeMode) -> Self {
        Self {
            mode,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Parse a stored blob; unknown modes and malformed JSON are both errors
    pub fn decode(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_closes_after_three_steps() {
        let start = ThemeMode::Light;
        assert_eq!(start.next(), ThemeMode::Dark);
        assert_eq!(start.next().next(), ThemeMode::Auto);
        assert_eq!(start.next().next().next(), ThemeMode::Light);
    }

    #[test]
    fn resolve_follows_system_only_in_auto() {
        assert!(ThemeMode::Auto.resolve(true));
        assert!(!ThemeMode::Auto.resolve(false));
        assert!(ThemeMode::Dark.resolve(false));
        assert!(!ThemeMode::Light.resolve(true));
    }

    #[test]
    fn decode_accepts_legacy_theme_field() {
        let blob = PersistedTheme::decode(r#"{"theme":"dark","timestamp":42}"#).expect("valid blob");
        assert_eq!(blob.mode, ThemeMode::Dark);
        assert_eq!(blob.timestamp, 42);

        let blob = PersistedTheme::decode(r#"{"mode":"auto"}"#).expect("valid blob");
        assert_eq!(blob.mode, ThemeMode::Auto);
        assert_eq!(blob.timestamp, 0);
    }

    #[test]
    fn parse_accepts_exact_names_only() {
        assert_eq!("dark".parse::<ThemeMode>().ok(), Some(ThemeMode::Dark));
        assert!(" dark ".parse::<ThemeMode>().is_err());
        assert!("Dark".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn decode_rejects_unknown_mode() {
        assert!(PersistedTheme::decode(r#"{"theme":"purple"}"#).is_err());
        assert!(PersistedTheme::decode("not json").is_err());
        assert!(PersistedTheme::decode("{}").is_err());
    }

    #[test]
    fn encode_writes_mode_field() {
        let raw = PersistedTheme { mode: ThemeMode::Light, timestamp: 7 }
            .encode()
            .expect("encodes");
        assert_eq!(raw, r#"{"mode":"light","timestamp":7}"#);
    }

    #[test]
    fn picker_lists_system_label_for_auto() {
        let options = available_themes();
        assert_eq!(options[2].value, ThemeMode::Auto);
        assert_eq!(options[2].label, "System");
    }
}
