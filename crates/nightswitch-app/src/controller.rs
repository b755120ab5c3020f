//! Theme toggle controller
//!
//! Keeps three things in step: the persisted night-mode flag, the switch's
//! checked state and the application-wide theme.
//!
//! ```text
//!   initialize()             on_toggle_activated()
//!   store ──read──► flag     flag ──invert──► theme, switch, store, commit
//!          ├──► switch
//!          └──► theme
//! ```

use std::path::Path;

use nightswitch_core::prelude::*;
use nightswitch_core::ThemeMode;

use crate::config::Settings;
use crate::preferences::{PreferenceKey, PreferenceStore, TomlPreferenceStore};
use crate::theme_service::{SharedThemeService, ThemeService};
use crate::toggle::{SwitchState, ToggleControl};

/// Controller wired the way the binary uses it
pub type AppController =
    ThemeToggleController<Box<dyn PreferenceStore>, SharedThemeService, SwitchState>;

/// Result of a single switch activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// New in-memory flag
    pub night_mode: bool,
    /// Theme applied for the new flag
    pub theme: ThemeMode,
    /// `false` when the commit failed; the new state then only lives for
    /// this session
    pub persisted: bool,
}

/// Synchronizes a persisted boolean with a switch and the active theme.
pub struct ThemeToggleController<P, T, C> {
    store: P,
    themes: T,
    switch: C,
    key: PreferenceKey,
    night_mode: bool,
}

impl<P, T, C> ThemeToggleController<P, T, C>
where
    P: PreferenceStore,
    T: ThemeService,
    C: ToggleControl,
{
    pub fn new(store: P, themes: T, switch: C, key: PreferenceKey) -> Self {
        Self {
            store,
            themes,
            switch,
            key,
            night_mode: false,
        }
    }

    /// Load the persisted flag and bring the switch and theme in line.
    ///
    /// An absent value counts as `false`. Never writes to the store.
    pub fn initialize(&mut self) -> ThemeMode {
        self.night_mode = self
            .store
            .get_bool(&self.key.namespace, &self.key.key, false);

        let mode = ThemeMode::from_night_mode(self.night_mode);
        self.switch.set_checked(self.night_mode);
        self.themes.set_theme(mode);

        debug!("Initialized {} = {} ({})", self.key, self.night_mode, mode);
        mode
    }

    /// Handle a click on the switch: invert, apply, persist, commit.
    pub fn on_toggle_activated(&mut self) -> ToggleOutcome {
        let theme = ThemeMode::from_night_mode(self.night_mode).toggled();
        let night_mode = theme.is_dark();

        self.night_mode = night_mode;
        self.themes.set_theme(theme);
        self.switch.set_checked(night_mode);

        self.store
            .put_bool(&self.key.namespace, &self.key.key, night_mode);
        let persisted = match self.store.commit() {
            Ok(()) => {
                info!("Night mode {} persisted", if night_mode { "on" } else { "off" });
                true
            }
            Err(e) => {
                warn!("Night mode not persisted, keeping session state: {}", e);
                false
            }
        };

        ToggleOutcome {
            night_mode,
            theme,
            persisted,
        }
    }

    /// Drive the switch to `enabled`, activating it only when that changes
    /// something. Returns `None` when already there.
    pub fn set_night_mode(&mut self, enabled: bool) -> Option<ToggleOutcome> {
        if self.night_mode == enabled {
            return None;
        }
        Some(self.on_toggle_activated())
    }

    pub fn night_mode(&self) -> bool {
        self.night_mode
    }

    pub fn theme(&self) -> ThemeMode {
        self.themes.theme()
    }

    pub fn switch(&self) -> &C {
        &self.switch
    }

    pub fn key(&self) -> &PreferenceKey {
        &self.key
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Give the store back, e.g. to re-create the screen on top of it.
    pub fn into_store(self) -> P {
        self.store
    }
}

/// Build the controller the binary runs: TOML store from `settings`,
/// the given shared theme service and a fresh switch. Not yet initialized.
pub fn open_app_controller(
    settings: &Settings,
    config_dir: &Path,
    themes: SharedThemeService,
) -> AppController {
    let path = settings.store.resolved_path(config_dir);
    info!("Using preference store {:?}", path);

    ThemeToggleController::new(
        Box::new(TomlPreferenceStore::open(path)),
        themes,
        SwitchState::default(),
        PreferenceKey::from_settings(&settings.store),
    )
}
