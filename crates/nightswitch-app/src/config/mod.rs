//! Configuration file parsing for nightswitch
//!
//! Supports:
//! - `<config_dir>/config.toml` - Global settings
//! - `[store]` section locating the preference file and night-mode key

pub mod settings;
pub mod types;

pub use settings::{
    default_config_dir, init_config_dir, load_settings, CONFIG_DIR_ENV_VAR, CONFIG_FILENAME,
};
pub use types::*;
