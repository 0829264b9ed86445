//! Color palette derived from the active theme.
//!
//! A theme only defines two colors. Text uses `dark`, surfaces use `light`,
//! and the remaining roles are blends of the two so that every theme in the
//! table stays legible without extra configuration.

use bookview_core::{ActiveTheme, Rgb};
use ratatui::style::Color;

// --- Fixed status colors ---
pub const STATUS_RED: Color = Color::Rgb(220, 50, 70);
pub const ACCENT: Color = Color::Rgb(56, 132, 255);

/// Resolved colors for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Main background (`light`)
    pub bg: Color,
    /// Primary text (`dark`)
    pub fg: Color,
    /// Secondary text
    pub muted: Color,
    /// Inactive borders
    pub border: Color,
    /// Modal background
    pub popup_bg: Color,
    /// Dimmed backdrop behind modals
    pub backdrop: Color,
    /// Focused borders and highlights
    pub accent: Color,
}

impl Palette {
    pub fn from_theme(theme: &ActiveTheme) -> Self {
        let dark = theme.colors.dark;
        let light = theme.colors.light;
        Self {
            bg: to_color(light),
            fg: to_color(dark),
            muted: blend(dark, light, 45),
            border: blend(dark, light, 70),
            popup_bg: blend(dark, light, 92),
            backdrop: blend(dark, light, 80),
            accent: ACCENT,
        }
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Mix `weight` percent of `toward` into `from`
pub fn blend(from: Rgb, toward: Rgb, weight: u16) -> Color {
    let weight = weight.min(100);
    let mix = |a: u8, b: u8| -> u8 {
        let value = (u16::from(a) * (100 - weight) + u16::from(b) * weight) / 100;
        value as u8
    };
    Color::Rgb(
        mix(from.0, toward.0),
        mix(from.1, toward.1),
        mix(from.2, toward.2),
    )
}
