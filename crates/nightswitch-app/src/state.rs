//! Application state (Model in TEA pattern)

use nightswitch_core::ThemeMode;

use crate::config::Settings;
use crate::controller::{AppController, ToggleOutcome};
use crate::toggle::ToggleControl;

/// Lifecycle phase of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
pub struct AppState {
    pub settings: Settings,

    pub controller: AppController,

    /// Result of the most recent switch activation
    pub last_outcome: Option<ToggleOutcome>,

    pub phase: AppPhase,
}

impl AppState {
    /// Wrap an already built controller and run its initial load.
    pub fn new(settings: Settings, mut controller: AppController) -> Self {
        controller.initialize();
        Self {
            settings,
            controller,
            last_outcome: None,
            phase: AppPhase::Running,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn theme(&self) -> ThemeMode {
        self.controller.theme()
    }

    pub fn night_mode(&self) -> bool {
        self.controller.night_mode()
    }

    pub fn switch_checked(&self) -> bool {
        self.controller.switch().is_checked()
    }

    /// `true` when the last toggle could not be written to the store
    pub fn unsaved(&self) -> bool {
        self.last_outcome.is_some_and(|o| !o.persisted)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("night_mode", &self.night_mode())
            .field("theme", &self.theme())
            .field("last_outcome", &self.last_outcome)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
