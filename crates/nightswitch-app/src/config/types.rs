//! Configuration types for nightswitch

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default preference namespace
pub const DEFAULT_NAMESPACE: &str = "MODE";

/// Default night-mode key inside the namespace
pub const DEFAULT_NIGHT_MODE_KEY: &str = "nightMode";

/// File name of the preference store inside the config directory
pub const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where and under which key the night-mode flag lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreSettings {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_key")]
    pub key: String,

    /// Preference file path (empty = `<config_dir>/preferences.toml`)
    #[serde(default)]
    pub path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            key: default_key(),
            path: String::new(),
        }
    }
}

impl StoreSettings {
    /// Resolve the preference file location relative to the config directory.
    pub fn resolved_path(&self, config_dir: &Path) -> PathBuf {
        if self.path.trim().is_empty() {
            config_dir.join(PREFERENCES_FILENAME)
        } else {
            PathBuf::from(self.path.trim())
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key hint footer
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_key() -> String {
    DEFAULT_NIGHT_MODE_KEY.to_string()
}

fn default_true() -> bool {
    true
}
