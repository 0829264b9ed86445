//! bookview-app - Application state and orchestration for bookview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events, and
//! [`handler::update`] the only place state changes. It also owns
//! configuration loading and the OS signal bridge.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod search_form;
pub mod settings_form;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
