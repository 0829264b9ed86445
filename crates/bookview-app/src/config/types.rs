//! Configuration types for bookview
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-sections

use std::path::{Path, PathBuf};

use bookview_core::prelude::*;
use bookview_core::{default_themes, ThemeTable, DEFAULT_PAGE_SIZE, DEFAULT_THEME};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub ui: UiSettings,

    /// Theme name → color pair
    #[serde(default = "default_themes")]
    pub themes: ThemeTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            ui: UiSettings::default(),
            themes: default_themes(),
        }
    }
}

impl Settings {
    /// Reject values the browser cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.ui.page_size == 0 {
            return Err(Error::config_invalid("ui.page_size must be at least 1"));
        }
        if self.themes.is_empty() {
            return Err(Error::config_invalid("at least one theme must be defined"));
        }
        Ok(())
    }

    /// Catalog path, resolved against `base` when relative
    pub fn catalog_path(&self, base: &Path) -> Option<PathBuf> {
        self.catalog.path.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        })
    }
}

/// Catalog source settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Path to the catalog JSON file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Previews rendered per "show more" step
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Theme applied at startup
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            theme: default_theme(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}
