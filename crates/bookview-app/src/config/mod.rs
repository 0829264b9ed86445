//! Configuration file parsing for bookview
//!
//! Supports:
//! - `.bookview/config.toml` - Project-local settings (takes precedence)
//! - `<config_dir>/bookview/config.toml` - User settings

pub mod settings;
pub mod types;

pub use settings::{find_config_file, load_settings, load_settings_from, user_config_path};
pub use types::*;
