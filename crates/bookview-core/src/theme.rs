//! Theme table types: theme name → {dark, light} color pair

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Theme used when nothing is configured
pub const DEFAULT_THEME: &str = "day";

/// An RGB color written as `"r, g, b"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(Error::invalid_color(s));
        };
        let channel = |v: &str| v.parse::<u8>().map_err(|_| Error::invalid_color(s));
        Ok(Rgb(channel(*r)?, channel(*g)?, channel(*b)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// The color pair a theme applies: `dark` for foreground, `light` for background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub dark: Rgb,
    pub light: Rgb,
}

/// Ordered theme table
pub type ThemeTable = BTreeMap<String, ThemeColors>;

/// Built-in `day` and `night` themes
pub fn default_themes() -> ThemeTable {
    let ink = Rgb(10, 10, 20);
    let paper = Rgb(255, 255, 255);
    BTreeMap::from([
        (
            "day".to_string(),
            ThemeColors {
                dark: ink,
                light: paper,
            },
        ),
        (
            "night".to_string(),
            ThemeColors {
                dark: paper,
                light: ink,
            },
        ),
    ])
}

/// The theme currently applied to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTheme {
    pub name: String,
    pub colors: ThemeColors,
}

impl ActiveTheme {
    /// Resolve `name` in `themes`.
    ///
    /// Names missing from the table are not rejected: the first theme in the
    /// table is used instead and a warning is logged. Returns `None` only for
    /// an empty table.
    pub fn resolve(themes: &ThemeTable, name: &str) -> Option<Self> {
        if let Some(colors) = themes.get(name) {
            return Some(Self {
                name: name.to_string(),
                colors: *colors,
            });
        }
        let (fallback, colors) = themes.iter().next()?;
        tracing::warn!("Unknown theme {:?}, falling back to {:?}", name, fallback);
        Some(Self {
            name: fallback.clone(),
            colors: *colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!("10, 10, 20".parse::<Rgb>().unwrap(), Rgb(10, 10, 20));
        assert_eq!("255,0,7".parse::<Rgb>().unwrap(), Rgb(255, 0, 7));
    }

    #[test]
    fn test_parse_rgb_rejects_garbage() {
        assert!("10, 10".parse::<Rgb>().is_err());
        assert!("300, 0, 0".parse::<Rgb>().is_err());
        assert!("red".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgb_display_round_trips_format() {
        assert_eq!(Rgb(1, 2, 3).to_string(), "1, 2, 3");
    }

    #[test]
    fn test_default_themes_are_inverse() {
        let themes = default_themes();
        let day = themes["day"];
        let night = themes["night"];
        assert_eq!(day.dark, night.light);
        assert_eq!(day.light, night.dark);
    }

    #[test]
    fn test_resolve_known_theme() {
        let active = ActiveTheme::resolve(&default_themes(), "night").unwrap();
        assert_eq!(active.name, "night");
        assert_eq!(active.colors.light, Rgb(10, 10, 20));
    }

    #[test]
    fn test_resolve_unknown_theme_falls_back() {
        let active = ActiveTheme::resolve(&default_themes(), "sepia").unwrap();
        assert_eq!(active.name, "day");
    }

    #[test]
    fn test_resolve_empty_table() {
        assert!(ActiveTheme::resolve(&ThemeTable::new(), "day").is_none());
    }

    #[test]
    fn test_theme_colors_deserialize() {
        let colors: ThemeColors =
            serde_json::from_str(r#"{"dark":"0, 0, 0","light":"250, 240, 230"}"#).unwrap();
        assert_eq!(colors.light, Rgb(250, 240, 230));
    }
}
