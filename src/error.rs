//! Error types for avagh-site
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Nothing here crosses into the view layer: managers log these and fall back.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Locale code outside the supported set
    #[snafu(display("Unsupported locale: {code}"))]
    InvalidLocale { code: String },

    /// Theme mode outside light/dark/auto
    #[snafu(display("Unsupported theme mode: {mode}"))]
    InvalidThemeMode { mode: String },

    /// Preference storage failure
    #[snafu(display("Storage error for key {key}: {message}"))]
    Storage { key: String, message: String },

    /// Locale resource could not be loaded
    #[snafu(display("Catalog error in {resource}: {message}"))]
    Catalog { resource: String, message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
