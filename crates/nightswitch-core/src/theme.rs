//! Theme mode state machine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Application-wide colour scheme.
///
/// Two-state machine: `Light` <-> `Dark`, flipped by [`ThemeMode::toggled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Map the persisted night-mode flag to a theme.
    pub fn from_night_mode(enabled: bool) -> Self {
        if enabled {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_from_night_mode() {
        assert_eq!(ThemeMode::from_night_mode(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_night_mode(false), ThemeMode::Light);
    }

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_display() {
        assert_eq!(ThemeMode::Dark.to_string(), "Dark");
        assert_eq!(format!("{}", ThemeMode::Light), "Light");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
