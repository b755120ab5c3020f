//! Headless mode - one JSON line per command, no TUI
//!
//! Runs the same controller as the switch screen and reports the result as
//! NDJSON on stdout, so scripts can read or flip night mode.
//!
//! # Example Output
//!
//! ```json
//! {"event":"status","key":"MODE.nightMode","night_mode":false,"theme":"light","timestamp":1704700001000}
//! {"event":"toggled","key":"MODE.nightMode","night_mode":true,"theme":"dark","persisted":true,"timestamp":1704700002000}
//! {"event":"unchanged","key":"MODE.nightMode","night_mode":true,"theme":"dark","timestamp":1704700003000}
//! ```

use std::io::{self, Write};

use chrono::Utc;
use nightswitch_app::{PreferenceStore, ThemeService, ThemeToggleController, ToggleControl};
use nightswitch_core::prelude::*;
use nightswitch_core::ThemeMode;
use serde::Serialize;

/// What a headless invocation should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessCommand {
    /// Report the persisted state
    Status,
    /// Activate the switch once
    Toggle,
    /// Drive the switch to the given state
    Set(bool),
}

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    Status {
        key: String,
        night_mode: bool,
        theme: ThemeMode,
        timestamp: i64,
    },

    /// The switch was activated
    Toggled {
        key: String,
        night_mode: bool,
        theme: ThemeMode,
        persisted: bool,
        timestamp: i64,
    },

    /// `set` asked for the state already in place
    Unchanged {
        key: String,
        night_mode: bool,
        theme: ThemeMode,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as a single line to stdout
    pub fn emit(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    pub fn night_mode(&self) -> bool {
        match self {
            HeadlessEvent::Status { night_mode, .. }
            | HeadlessEvent::Toggled { night_mode, .. }
            | HeadlessEvent::Unchanged { night_mode, .. } => *night_mode,
        }
    }

    /// `false` only for a toggle whose commit failed
    pub fn persisted(&self) -> bool {
        match self {
            HeadlessEvent::Toggled { persisted, .. } => *persisted,
            _ => true,
        }
    }
}

fn timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Initialize `controller` and run `command` against it.
pub fn execute<P, T, C>(
    controller: &mut ThemeToggleController<P, T, C>,
    command: HeadlessCommand,
) -> HeadlessEvent
where
    P: PreferenceStore,
    T: ThemeService,
    C: ToggleControl,
{
    controller.initialize();
    let key = controller.key().to_string();

    let outcome = match command {
        HeadlessCommand::Status => {
            return HeadlessEvent::Status {
                key,
                night_mode: controller.night_mode(),
                theme: controller.theme(),
                timestamp: timestamp(),
            };
        }
        HeadlessCommand::Toggle => Some(controller.on_toggle_activated()),
        HeadlessCommand::Set(enabled) => controller.set_night_mode(enabled),
    };

    match outcome {
        Some(outcome) => HeadlessEvent::Toggled {
            key,
            night_mode: outcome.night_mode,
            theme: outcome.theme,
            persisted: outcome.persisted,
            timestamp: timestamp(),
        },
        None => HeadlessEvent::Unchanged {
            key,
            night_mode: controller.night_mode(),
            theme: controller.theme(),
            timestamp: timestamp(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightswitch_app::{InMemoryStore, PreferenceKey, SharedThemeService, SwitchState};

    type Controller = ThemeToggleController<InMemoryStore, SharedThemeService, SwitchState>;

    fn controller(store: InMemoryStore) -> Controller {
        ThemeToggleController::new(
            store,
            SharedThemeService::default(),
            SwitchState::default(),
            PreferenceKey::default(),
        )
    }

    fn to_json(event: &HeadlessEvent) -> serde_json::Value {
        let mut buf = Vec::new();
        event.write_to(&mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.lines().count(), 1);
        serde_json::from_str(line.trim_end()).unwrap()
    }

    #[test]
    fn test_status_reports_without_writing() {
        let mut ctrl = controller(InMemoryStore::new().with_value("MODE", "nightMode", true));

        let event = execute(&mut ctrl, HeadlessCommand::Status);

        let value = to_json(&event);
        assert_eq!(value["event"], "status");
        assert_eq!(value["key"], "MODE.nightMode");
        assert_eq!(value["night_mode"], true);
        assert_eq!(value["theme"], "dark");
        assert!(value["timestamp"].is_i64());
        assert_eq!(ctrl.store().commit_count(), 0);
    }

    #[test]
    fn test_toggle_flips_and_commits() {
        let mut ctrl = controller(InMemoryStore::new());

        let event = execute(&mut ctrl, HeadlessCommand::Toggle);

        assert!(event.night_mode());
        assert!(event.persisted());
        let value = to_json(&event);
        assert_eq!(value["event"], "toggled");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["persisted"], true);
        assert_eq!(ctrl.store().committed_value("MODE", "nightMode"), Some(true));
    }

    #[test]
    fn test_set_to_current_value_is_unchanged() {
        let mut ctrl = controller(InMemoryStore::new());

        let event = execute(&mut ctrl, HeadlessCommand::Set(false));

        assert_eq!(to_json(&event)["event"], "unchanged");
        assert!(!event.night_mode());
        assert_eq!(ctrl.store().commit_count(), 0);
    }

    #[test]
    fn test_set_to_other_value_toggles() {
        let mut ctrl = controller(InMemoryStore::new().with_value("MODE", "nightMode", true));

        let event = execute(&mut ctrl, HeadlessCommand::Set(false));

        assert_eq!(to_json(&event)["event"], "toggled");
        assert!(!event.night_mode());
        assert_eq!(ctrl.theme(), ThemeMode::Light);
        assert_eq!(
            ctrl.store().committed_value("MODE", "nightMode"),
            Some(false)
        );
    }
}
