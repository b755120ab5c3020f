//! Main update function - handles state transitions (TEA pattern)

use nightswitch_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{keys, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => UpdateResult::none(),

        Message::ToggleActivated => {
            let outcome = state.controller.on_toggle_activated();
            if !outcome.persisted {
                warn!("Toggle applied for this session only");
            }
            state.last_outcome = Some(outcome);
            UpdateResult::none()
        }

        Message::Reinitialize => {
            let mode = state.controller.initialize();
            debug!("Screen re-created with {} theme", mode);
            state.last_outcome = None;
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::Shutdown(signal) => {
            info!(
                "{} received, closing with {} = {}{}",
                signal,
                state.controller.key(),
                state.night_mode(),
                if state.unsaved() { " (not saved)" } else { "" }
            );
            state.request_quit();
            UpdateResult::none()
        }
    }
}
