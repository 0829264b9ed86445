//! Settings parser for config.toml

use super::types::Settings;
use bookview_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const BOOKVIEW_DIR: &str = ".bookview";
const APP_DIR: &str = "bookview";

/// `<config_dir>/bookview/config.toml`, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Locate the config file: project-local first, then the user config dir
pub fn find_config_file(project_path: &Path) -> Option<PathBuf> {
    let local = project_path.join(BOOKVIEW_DIR).join(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }
    user_config_path().filter(|p| p.exists())
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings for a working directory
///
/// Returns default settings if no config file exists.
pub fn load_settings(project_path: &Path) -> Settings {
    match find_config_file(project_path) {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config file found, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
