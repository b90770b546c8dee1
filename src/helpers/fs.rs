//! File System Utilities
//!
//! Configuration and data directory management.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::constants::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};
use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/avagh-site/` or `$XDG_CONFIG_HOME/avagh-site/`
/// - **macOS**: `~/Library/Application Support/com.avagh-media.avagh-site/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\avagh-media\avagh-site\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory holding the preference store
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/avagh-site/`
/// - **macOS**: `~/Library/Application Support/com.avagh-media.avagh-site/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\avagh-media\avagh-site\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
