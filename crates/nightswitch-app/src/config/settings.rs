//! Settings parser for `config.toml`

use super::types::Settings;
use nightswitch_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "nightswitch";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV_VAR: &str = "NIGHTSWITCH_CONFIG_DIR";

/// Locate the configuration directory.
///
/// `$NIGHTSWITCH_CONFIG_DIR` wins, then the platform config dir
/// (`~/.config/nightswitch` on Linux).
pub fn default_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    dirs::config_dir()
        .map(|base| base.join(APP_DIR))
        .ok_or(Error::NoConfigDir)
}

/// Load settings from the given `config.toml`
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the config directory and a commented default `config.toml`.
///
/// Existing files are left untouched.
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        info!("Created config directory {:?}", config_dir);
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config.toml");
    }

    Ok(())
}

fn generate_default_config() -> String {
    r#"# nightswitch configuration

[store]
namespace = "MODE"      # Preference namespace
key = "nightMode"       # Boolean key holding the night-mode flag
path = ""               # Empty = preferences.toml next to this file

[ui]
show_hints = true       # Show key hints under the switch
"#
    .to_string()
}
