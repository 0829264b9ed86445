//! Startup: resolve settings and the catalog into the initial state

use std::path::{Path, PathBuf};

use bookview_app::config::{self, Settings};
use bookview_app::AppState;
use bookview_core::prelude::*;
use bookview_core::Catalog;

/// Command-line values that take precedence over config.toml
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit config file instead of the lookup chain
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub theme: Option<String>,
    pub page_size: Option<usize>,
}

/// Load settings for `working_dir` and apply the overrides
pub fn resolve_settings(working_dir: &Path, overrides: &Overrides) -> Settings {
    let mut settings = match &overrides.config {
        Some(path) => config::load_settings_from(path),
        None => config::load_settings(working_dir),
    };

    if let Some(catalog) = &overrides.catalog {
        settings.catalog.path = Some(catalog.clone());
    }
    if let Some(theme) = &overrides.theme {
        settings.ui.theme = theme.clone();
    }
    if let Some(page_size) = overrides.page_size {
        settings.ui.page_size = page_size;
    }
    settings
}

/// Build the initial state. Every error here is fatal.
pub fn load_state(working_dir: &Path, overrides: &Overrides) -> Result<AppState> {
    let settings = resolve_settings(working_dir, overrides);
    settings.validate()?;

    let catalog_path = settings
        .catalog_path(working_dir)
        .ok_or(Error::NoCatalog)?;
    let catalog = Catalog::load(&catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    info!(
        "Settings: page_size={} theme={}",
        settings.ui.page_size, settings.ui.theme
    );
    AppState::new(catalog, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG: &str = r#"{
        "books": [
            {"id":"b1","title":"Mort","author":"a1","genres":["fantasy"],"published":"1987-11-12T00:00:00Z"}
        ],
        "authors": {"a1": "Terry Pratchett"}
    }"#;

    #[test]
    fn test_overrides_win_over_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".bookview")).unwrap();
        fs::write(
            dir.path().join(".bookview/config.toml"),
            "[ui]\npage_size = 10\ntheme = \"day\"\n",
        )
        .unwrap();

        let overrides = Overrides {
            theme: Some("night".into()),
            page_size: Some(5),
            ..Default::default()
        };
        let settings = resolve_settings(dir.path(), &overrides);

        assert_eq!(settings.ui.page_size, 5);
        assert_eq!(settings.ui.theme, "night");
    }

    #[test]
    fn test_missing_catalog_is_fatal() {
        let dir = tempdir().unwrap();
        let overrides = Overrides {
            config: Some(dir.path().join("absent.toml")),
            ..Default::default()
        };
        let err = load_state(dir.path(), &overrides).unwrap_err();
        assert!(matches!(err, Error::NoCatalog));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_catalog_path_relative_to_working_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("books.json"), CATALOG).unwrap();
        let overrides = Overrides {
            config: Some(dir.path().join("absent.toml")),
            catalog: Some(PathBuf::from("books.json")),
            ..Default::default()
        };

        let state = load_state(dir.path(), &overrides).unwrap();
        assert_eq!(state.total_matches(), 1);
    }

    #[test]
    fn test_unreadable_catalog_is_fatal() {
        let dir = tempdir().unwrap();
        let overrides = Overrides {
            config: Some(dir.path().join("absent.toml")),
            catalog: Some(dir.path().join("nope.json")),
            ..Default::default()
        };
        assert!(load_state(dir.path(), &overrides).unwrap_err().is_fatal());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("books.json"), CATALOG).unwrap();
        let overrides = Overrides {
            config: Some(dir.path().join("absent.toml")),
            catalog: Some(dir.path().join("books.json")),
            page_size: Some(0),
            ..Default::default()
        };
        let err = load_state(dir.path(), &overrides).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }
}
