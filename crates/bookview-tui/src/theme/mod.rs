//! Centralized theme system.
//!
//! This module provides:
//! - `palette`: colors derived from the active theme's dark/light pair
//! - `styles`: semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::Palette;
