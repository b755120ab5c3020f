//! nightswitch-app - Night-mode state and orchestration
//!
//! Implements the TEA (The Elm Architecture) loop around a single
//! [`ThemeToggleController`]: the persisted `MODE.nightMode` flag, the switch
//! showing it and the application-wide theme are kept in agreement.
//!
//! Collaborators are injected through narrow traits:
//! - [`PreferenceStore`] - namespaced boolean storage (TOML file or in-memory)
//! - [`ThemeService`] - application-wide light/dark theme
//! - [`ToggleControl`] - the two-state switch

pub mod config;
pub mod controller;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod preferences;
pub mod signals;
pub mod state;
pub mod theme_service;
pub mod toggle;

// Re-export primary types
pub use controller::{open_app_controller, AppController, ThemeToggleController, ToggleOutcome};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use preferences::{InMemoryStore, PreferenceKey, PreferenceStore, TomlPreferenceStore};
pub use signals::ShutdownSignal;
pub use state::AppState;
pub use theme_service::{SharedThemeService, ThemeService};
pub use toggle::{SwitchState, ToggleControl};
