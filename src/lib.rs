//! bookview Library
//!
//! A terminal browser for book catalogs. The interactive UI lives in
//! `bookview-tui`; this crate wires startup and the headless mode.

pub mod headless;
pub mod startup;

// Re-export main entry points
pub use headless::{run_headless, HeadlessQuery};
pub use startup::{load_state, Overrides};
